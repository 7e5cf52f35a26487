// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the huffpuff library. It provides
// a stable, byte-buffer interface that completely encapsulates the pure codec
// engine. It is the authoritative boundary between the outside world (files,
// the CLI) and the internal coding logic.
//
// Data Flow (Compression):
//
//   1. [Caller / CLI]                  -> Reads the input file into a byte buffer
//         |
//         `-> 2. [Stateless API (compress)]   -> Enforces the non-empty precondition
//                 |
//                 `-> a. Calls the engine: `codec::compress_bytes` -> `CompressedArchive`
//                 |
//                 `-> b. Serializes via `format::CompressedArchive::to_bytes`
//
// Data Flow (Decompression):
//
//   1. [Stateless API (decompress)]    -> Receives `&[u8]` (a serialized archive)
//         |
//         `-> a. Parses framing via `format::CompressedArchive::from_bytes`
//         |
//         `-> b. Calls the engine: `codec::decompress_bytes` -> original bytes
//
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

// --- Low-Level Stateless API ---
pub use stateless_api::{analyze, compress, decompress};

// --- Format Structs ---
pub use format::CompressionStats;
