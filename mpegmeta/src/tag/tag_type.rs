use crate::id3::v1::Id3v1Version;
use crate::id3::v2::Id3v2Version;

use std::fmt::{Display, Formatter};

/// The tag container's format, including its version
///
/// # Examples
///
/// ```rust
/// use mpegmeta::id3::v2::Id3v2Version;
/// use mpegmeta::tag::TagType;
///
/// assert_eq!(TagType::Id3v2(Id3v2Version::V3).to_string(), "ID3v2.3");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagType {
	/// An ID3v1 trailer
	Id3v1(Id3v1Version),
	/// An ID3v2 tag
	Id3v2(Id3v2Version),
}

impl TagType {
	/// Whether the tag is an ID3v1 tag, of any version
	pub fn is_id3v1(self) -> bool {
		matches!(self, Self::Id3v1(_))
	}

	/// Whether the tag is an ID3v2 tag, of any version
	pub fn is_id3v2(self) -> bool {
		matches!(self, Self::Id3v2(_))
	}
}

impl Display for TagType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Id3v1(Id3v1Version::V1) => f.write_str("ID3v1"),
			Self::Id3v1(Id3v1Version::V1_1) => f.write_str("ID3v1.1"),
			Self::Id3v2(Id3v2Version::V2) => f.write_str("ID3v2.2"),
			Self::Id3v2(Id3v2Version::V3) => f.write_str("ID3v2.3"),
			Self::Id3v2(Id3v2Version::V4) => f.write_str("ID3v2.4"),
		}
	}
}
