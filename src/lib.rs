//! This file is the root of the `huffpuff` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`codec`, `kernels`,
//!     `bridge`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface that callers (including the
//!     `huffpuff` CLI binary) are meant to use.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod kernels;

mod codec;
mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{analyze, compress, decompress};
pub use config::HuffpuffConfig;
pub use error::HuffpuffError;
