//! ID3v2 items and utilities
//!
//! ID3v2.2, ID3v2.3, and ID3v2.4 tags are supported. Frames are kept as written, and ID3v2.2
//! frame IDs are *not* upgraded to their four character equivalents.
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
mod tag;
pub mod util;

// Exports

pub use header::{Id3v2TagFlags, Id3v2Version};

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::{Frame, FrameFlags, FrameHeader, FrameId};

pub use crate::util::text::TextEncoding;
