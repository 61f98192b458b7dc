//! Text normalization primitives
//!
//! Small, total helpers shared by the hardware detectors: byte-size
//! formatting, literal substring erase/replace and `key: value` field
//! extraction. None of them fail; degenerate input yields an empty string.

mod bytes;
mod field;
mod substr;

pub use bytes::{format_bytes, ByteUnit};
pub use field::FieldStyle;
pub use substr::{erase, replace, truncate_to};
