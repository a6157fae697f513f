use super::split_encoding;
use crate::error::Result;
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{TextDecoder, TextEncoding, latin1_decode};

/// An extended ID3v2 URL frame
///
/// This is used in the `WXXX` frame. The description uses the frame's encoding, but the URL is
/// always Latin-1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedUrlFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The URL
	pub content: String,
}

impl ExtendedUrlFrame {
	pub(crate) fn parse(header: FrameHeader, content: &[u8], version: Id3v2Version) -> Result<Self> {
		let (encoding, content) = split_encoding(content)?;
		let encoding = verify_encoding(encoding, version)?;

		let (description, content) = TextDecoder::new(encoding).decode_terminated(content)?;
		let end = content.iter().position(|b| *b == 0).unwrap_or(content.len());

		Ok(ExtendedUrlFrame {
			header,
			encoding,
			description,
			content: latin1_decode(&content[..end]),
		})
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
