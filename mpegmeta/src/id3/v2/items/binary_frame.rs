use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};

/// A frame that is kept as raw bytes
///
/// The data is the frame content after unsynchronisation and compression have been reversed.
/// Encrypted frames are only de-unsynchronised, as they can't be decompressed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryFrame {
	pub(crate) header: FrameHeader,
	/// The frame content
	pub data: Vec<u8>,
}

impl BinaryFrame {
	pub(crate) fn new(header: FrameHeader, data: Vec<u8>) -> Self {
		Self { header, data }
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &FrameId {
		&self.header.id
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}
}
