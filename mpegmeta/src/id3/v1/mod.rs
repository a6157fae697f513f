//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! ID3v1 is a fixed size, 128 byte trailer at the very end of the stream. Every field is
//! truncated to its fixed width, and genres are stored as an index into [`GENRES`].
//!
//! An ID3v1.1 tag is distinguished from an ID3v1 tag by a zero byte at the 29th byte of the
//! comment, followed by a non-zero track number.

pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub use constants::GENRES;
pub use tag::{Id3v1Tag, Id3v1Version};
