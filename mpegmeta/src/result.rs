//! The format-agnostic result of parsing a stream

use crate::common::CommonMetadata;
use crate::config::ParseOptions;
use crate::error::Warning;
use crate::mpeg::{BitrateMode, MpegFile, MpegProperties};
use crate::tag::{Tag, TagType};

/// Information about the stream itself
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
	pub(crate) tag_types: Vec<TagType>,
	pub(crate) properties: Option<MpegProperties>,
}

impl Format {
	/// The types of every tag container found, in the order they were parsed
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use mpegmeta::config::ParseOptions;
	///
	/// # fn main() -> mpegmeta::error::Result<()> {
	/// let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
	///
	/// // ex. ["ID3v2.3", "ID3v1.1"]
	/// let tag_types = result
	/// 	.format()
	/// 	.tag_types()
	/// 	.iter()
	/// 	.map(ToString::to_string)
	/// 	.collect::<Vec<_>>();
	/// # Ok(()) }
	/// ```
	pub fn tag_types(&self) -> &[TagType] {
		&self.tag_types
	}

	/// The full stream statistics, if any audio frames were found
	pub fn properties(&self) -> Option<&MpegProperties> {
		self.properties.as_ref()
	}

	/// Nominal bitrate (bps), see [`MpegProperties::bitrate`]
	pub fn bitrate(&self) -> Option<u32> {
		self.properties.as_ref().map(MpegProperties::bitrate)
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> Option<u32> {
		self.properties.as_ref().map(MpegProperties::sample_rate)
	}

	/// Channel count
	pub fn number_of_channels(&self) -> Option<u8> {
		self.properties.as_ref().map(MpegProperties::channels)
	}

	/// Duration in seconds, see [`MpegProperties::duration`]
	pub fn duration(&self) -> Option<f64> {
		self.properties.as_ref().and_then(MpegProperties::duration)
	}

	/// See [`BitrateMode`]
	pub fn bitrate_mode(&self) -> Option<BitrateMode> {
		self.properties.as_ref().map(MpegProperties::bitrate_mode)
	}
}

/// The result of parsing a stream
///
/// This combines the stream statistics, the [`CommonMetadata`] mapped from every tag container,
/// and (if [`ParseOptions::decode_native_tags`] is enabled) the containers themselves.
///
/// For the strongly typed containers, see [`MpegFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
	pub(crate) format: Format,
	pub(crate) common: CommonMetadata,
	pub(crate) native: Vec<Tag>,
	pub(crate) warnings: Vec<Warning>,
}

impl ParseResult {
	pub(crate) fn from_file(file: MpegFile, parse_options: ParseOptions) -> Self {
		let tag_types = file.tag_types();

		let MpegFile {
			id3v2_tag,
			id3v1_tag,
			properties,
			warnings,
		} = file;

		let mut native = Vec::with_capacity(tag_types.len());
		if let Some(id3v2) = id3v2_tag {
			native.push(Tag::from(id3v2));
		}
		if let Some(id3v1) = id3v1_tag {
			native.push(Tag::from(id3v1));
		}

		let common = CommonMetadata::from_tags(&native);

		if !parse_options.decode_native_tags {
			native.clear();
		}

		Self {
			format: Format {
				tag_types,
				properties,
			},
			common,
			native,
			warnings,
		}
	}

	/// See [`Format`]
	pub fn format(&self) -> &Format {
		&self.format
	}

	/// See [`CommonMetadata`]
	pub fn common(&self) -> &CommonMetadata {
		&self.common
	}

	/// Every tag container, in the order they were parsed
	///
	/// This is empty if [`ParseOptions::decode_native_tags`] is disabled.
	pub fn native(&self) -> &[Tag] {
		&self.native
	}

	/// The tag container of a specific type, if it was found
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use mpegmeta::config::ParseOptions;
	/// use mpegmeta::id3::v2::Id3v2Version;
	/// use mpegmeta::tag::TagType;
	///
	/// # fn main() -> mpegmeta::error::Result<()> {
	/// let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
	///
	/// if let Some(id3v23) = result.native_tag(TagType::Id3v2(Id3v2Version::V3)) {
	/// 	println!("Title: {:?}", id3v23.get_string("TIT2"));
	/// }
	/// # Ok(()) }
	/// ```
	pub fn native_tag(&self, tag_type: TagType) -> Option<&Tag> {
		self.native.iter().find(|tag| tag.tag_type() == tag_type)
	}

	/// Everything that was recovered from while parsing
	pub fn warnings(&self) -> &[Warning] {
		&self.warnings
	}
}
