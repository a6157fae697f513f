use super::split_encoding;
use crate::error::Result;
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{TextDecoder, TextEncoding};

/// An extended ID3v2 text frame
///
/// This is used in the `TXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and content
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl ExtendedTextFrame {
	/// Read an [`ExtendedTextFrame`] from the frame content
	///
	/// # Errors
	///
	/// * The content is empty
	/// * The encoding is invalid
	/// * The text could not be decoded
	pub(crate) fn parse(header: FrameHeader, content: &[u8], version: Id3v2Version) -> Result<Self> {
		let (encoding, content) = split_encoding(content)?;
		let encoding = verify_encoding(encoding, version)?;

		let mut decoder = TextDecoder::new(encoding);
		let (description, content) = decoder.decode_terminated(content)?;
		let (content, _) = decoder.decode_terminated(content)?;

		Ok(ExtendedTextFrame {
			header,
			encoding,
			description,
			content,
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
