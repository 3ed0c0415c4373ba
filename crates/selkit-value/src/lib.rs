//! Value helpers packaged alongside the selector builder.
//!
//! # Scope
//!
//! This crate provides:
//! - **Serializer** - JSON encode/decode over `serde`
//! - **Rehydrator** - build a typed value from decoded JSON fields
//! - **Rect** - a width/height record with a derived area
//!
//! None of this is used by `selkit-css`; the CLI uses the serializer for
//! `--json` output.

/// Error type shared by the serializer and rehydrator.
pub mod error;
/// Rectangle value with a derived area.
pub mod rect;
/// Typed construction from decoded JSON objects.
pub mod rehydrate;
/// JSON encode and decode.
pub mod serializer;

// Re-exports for convenience
pub use error::{Result, ValueError};
pub use rect::Rect;
pub use rehydrate::{Template, rehydrate, rehydrate_str};
pub use serializer::{decode, decode_value, encode, encode_pretty};
