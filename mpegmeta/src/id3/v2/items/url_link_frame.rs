use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::latin1_decode;

/// An ID3v2 URL frame
///
/// This is used in the frames starting with "W", excluding "WXXX". URLs are always Latin-1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlLinkFrame {
	pub(crate) header: FrameHeader,
	/// The URL
	pub content: String,
}

impl UrlLinkFrame {
	pub(crate) fn parse(header: FrameHeader, content: &[u8]) -> Self {
		let end = content.iter().position(|b| *b == 0).unwrap_or(content.len());

		UrlLinkFrame {
			header,
			content: latin1_decode(&content[..end]),
		}
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
