use super::split_encoding;
use crate::error::Result;
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{TextDecoder, TextEncoding};

/// An ID3v2 text frame
///
/// This is used in the frames starting with "T", excluding "TXXX".
///
/// A frame may hold multiple values, separated by null terminators. Each value is kept,
/// in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text values
	pub values: Vec<String>,
}

impl TextInformationFrame {
	/// Read a [`TextInformationFrame`] from the frame content
	///
	/// # Errors
	///
	/// * The content is empty
	/// * The encoding is invalid
	/// * The text could not be decoded
	pub(crate) fn parse(header: FrameHeader, content: &[u8], version: Id3v2Version) -> Result<Self> {
		let (encoding, content) = split_encoding(content)?;
		let encoding = verify_encoding(encoding, version)?;

		let values = TextDecoder::new(encoding).decode_values(content)?;

		Ok(TextInformationFrame {
			header,
			encoding,
			values,
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

	/// The first value, if there are any
	pub fn first(&self) -> Option<&str> {
		self.values.first().map(String::as_str)
	}
}
