//! MPEG audio specific items
//!
//! The stream is located by searching for a frame sync, and every frame after it is decoded and
//! aggregated into [`MpegProperties`]. See [`FrameHeader`] for the decoding of a single header.

mod constants;
pub(crate) mod header;
mod properties;
mod read;

pub use header::{ChannelMode, Emphasis, FrameHeader, InvalidHeader, Layer, MpegVersion, VbrHeaderType};
pub use properties::{BitrateMode, MpegProperties, ScanExtent};

use crate::config::ParseOptions;
use crate::error::{Result, Warning};
use crate::id3::v1::Id3v1Tag;
use crate::id3::v2::Id3v2Tag;
use crate::tag::TagType;

use std::io::{Read, Seek};

/// An MPEG audio stream, with its tags
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MpegFile {
	pub(crate) id3v2_tag: Option<Id3v2Tag>,
	pub(crate) id3v1_tag: Option<Id3v1Tag>,
	pub(crate) properties: Option<MpegProperties>,
	pub(crate) warnings: Vec<Warning>,
}

impl MpegFile {
	/// Read an `MpegFile` from a reader
	///
	/// The stream is read from the start, regardless of the reader's current position.
	///
	/// # Errors
	///
	/// * The reader contains no MPEG frames and no tags, while [`ParseOptions::compute_duration`]
	///   is enabled
	/// * A tag is malformed, and the [`ParsingMode`](crate::config::ParsingMode) is `Strict`
	/// * Any I/O error
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	/// use mpegmeta::mpeg::MpegFile;
	///
	/// # fn main() -> mpegmeta::error::Result<()> {
	/// let mut reader = std::io::Cursor::new(vec![0; 1024]);
	/// let file = MpegFile::read_from(&mut reader, ParseOptions::new().compute_duration(false))?;
	///
	/// assert!(file.properties().is_none());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		read::read_from(reader, parse_options)
	}

	/// The ID3v2 tag, if one was found
	///
	/// If the stream starts with multiple ID3v2 tags, the frames of all of them are merged into one.
	pub fn id3v2(&self) -> Option<&Id3v2Tag> {
		self.id3v2_tag.as_ref()
	}

	/// The ID3v1 tag, if one was found
	pub fn id3v1(&self) -> Option<&Id3v1Tag> {
		self.id3v1_tag.as_ref()
	}

	/// The audio properties, if any frames were found
	pub fn properties(&self) -> Option<&MpegProperties> {
		self.properties.as_ref()
	}

	/// Everything that was recovered from while reading
	pub fn warnings(&self) -> &[Warning] {
		&self.warnings
	}

	/// The types of the tags present, in the order they were parsed
	pub fn tag_types(&self) -> Vec<TagType> {
		let mut tag_types = Vec::with_capacity(2);

		if let Some(id3v2) = &self.id3v2_tag {
			tag_types.push(TagType::Id3v2(id3v2.version()));
		}

		if let Some(id3v1) = &self.id3v1_tag {
			tag_types.push(TagType::Id3v1(id3v1.version()));
		}

		tag_types
	}
}
