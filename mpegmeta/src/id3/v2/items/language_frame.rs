use super::split_encoding;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{TextDecoder, TextEncoding};

/// Text with a language and content descriptor
///
/// This is used in the `COMM` and `USLT` frames (`COM` and `ULT` in ID3v2.2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and content
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl LanguageFrame {
	/// Read a [`LanguageFrame`] from the frame content
	///
	/// # Errors
	///
	/// * The content is too short for the encoding and language
	/// * The encoding is invalid
	/// * The text could not be decoded
	pub(crate) fn parse(header: FrameHeader, content: &[u8], version: Id3v2Version) -> Result<Self> {
		let (encoding, content) = split_encoding(content)?;
		let encoding = verify_encoding(encoding, version)?;

		let Some((language, content)) = content.split_first_chunk::<3>() else {
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		};

		let mut decoder = TextDecoder::new(encoding);
		let (description, content) = decoder.decode_terminated(content)?;
		let (content, _) = decoder.decode_terminated(content)?;

		Ok(LanguageFrame {
			header,
			encoding,
			language: *language,
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
