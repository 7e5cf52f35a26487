// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpuff
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpuffError {
    // =========================================================================
    // === Caller-Level Preconditions
    // =========================================================================
    /// Compression of a zero-length input is rejected before the engine runs.
    #[error("input is empty; nothing to compress")]
    EmptyInput,

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not
    /// found, permission denied). Not recoverable within the core.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while parsing a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    // =========================================================================
    // === Archive Decoding Errors
    // =========================================================================
    /// A declared bit length is inconsistent with the available words, or the
    /// tree parse did not consume exactly the declared number of bits.
    #[error("malformed archive header: {0}")]
    MalformedHeader(String),

    /// The flattened tree bits ran out where a node marker or a leaf's symbol
    /// bits were required.
    #[error("invalid tree structure: {0}")]
    InvalidTreeStructure(String),

    /// The payload walk ended somewhere other than a leaf boundary.
    #[error("unexpected end of payload: {0}")]
    UnexpectedEndOfPayload(String),

    /// An impossible state was reached. Seeing this error is a bug.
    #[error("internal logic error (this is a bug): {0}")]
    Internal(String),
}
