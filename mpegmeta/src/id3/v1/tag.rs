use crate::id3::v1::constants::GENRES;
use crate::tag::{ItemValue, Tag, TagType};

/// The version of an ID3v1 tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Id3v1Version {
	/// ID3v1, with a 30 byte comment
	V1,
	/// ID3v1.1, with a 28 byte comment and a track number
	V1_1,
}

/// An ID3v1 tag
///
/// All fields are read as-is, with the fixed-width padding removed. Empty fields are `None`.
///
/// ## Conversions
///
/// ### To `Tag`
///
/// * `title` -> "title"
/// * `artist` -> "artist"
/// * `album` -> "album"
/// * `year` -> "year"
/// * `comment` -> "comment"
/// * `track_number` -> "track" (as [`ItemValue::Number`])
/// * `genre` -> "genre" (the *name* at [`GENRES`]\[index\], not the index)
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: Option<String>,
	/// Track artist, 30 bytes max
	pub artist: Option<String>,
	/// Album title, 30 bytes max
	pub album: Option<String>,
	/// Release year, 4 ASCII digits
	pub year: Option<String>,
	/// A short comment
	///
	/// This is 30 bytes in an ID3v1 tag, and 28 bytes in an ID3v1.1 tag.
	pub comment: Option<String>,
	/// The track number, only present in ID3v1.1 tags
	///
	/// A track number of 0 is indistinguishable from the end of an ID3v1 comment, so it is never
	/// present.
	pub track_number: Option<u8>,
	/// The track's genre, as an index into [`GENRES`]
	///
	/// Indices outside of the table (ex. 255, the conventional "no genre") are `None`.
	pub genre: Option<u8>,
}

impl Id3v1Tag {
	/// Create a new empty `Id3v1Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::id3::v1::Id3v1Tag;
	///
	/// let id3v1_tag = Id3v1Tag::new();
	/// assert!(id3v1_tag.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// The version of the tag, determined by the presence of a track number
	pub fn version(&self) -> Id3v1Version {
		if self.track_number.is_some() {
			Id3v1Version::V1_1
		} else {
			Id3v1Version::V1
		}
	}

	/// The name of the tag's genre
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::id3::v1::Id3v1Tag;
	///
	/// let mut id3v1_tag = Id3v1Tag::new();
	/// id3v1_tag.genre = Some(21);
	///
	/// assert_eq!(id3v1_tag.genre_name(), Some("Ska"));
	/// ```
	pub fn genre_name(&self) -> Option<&'static str> {
		self.genre.and_then(|index| GENRES.get(usize::from(index)).copied())
	}

	/// Whether every field is empty
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.artist.is_none()
			&& self.album.is_none()
			&& self.year.is_none()
			&& self.comment.is_none()
			&& self.track_number.is_none()
			&& self.genre.is_none()
	}
}

impl From<Id3v1Tag> for Tag {
	fn from(input: Id3v1Tag) -> Self {
		let mut tag = Tag::new(TagType::Id3v1(input.version()));
		let genre = input.genre_name();

		let text_fields = [
			("title", input.title),
			("artist", input.artist),
			("album", input.album),
			("year", input.year),
			("comment", input.comment),
		];

		for (key, value) in text_fields {
			if let Some(value) = value {
				tag.push_value(key, ItemValue::Text(value));
			}
		}

		if let Some(track_number) = input.track_number {
			tag.push_value("track", ItemValue::Number(u32::from(track_number)));
		}

		if let Some(genre) = genre {
			tag.push_value("genre", ItemValue::Text(String::from(genre)));
		}

		tag
	}
}

#[cfg(test)]
mod tests {
	use super::{Id3v1Tag, Id3v1Version};
	use crate::tag::{ItemValue, Tag, TagType};

	#[test_log::test]
	fn to_native_tag() {
		let id3v1_tag = Id3v1Tag {
			title: Some(String::from("Foo title")),
			artist: Some(String::from("Bar artist")),
			album: None,
			year: Some(String::from("1998")),
			comment: Some(String::from("Qux comment")),
			track_number: Some(4),
			genre: Some(32),
		};

		let tag: Tag = id3v1_tag.into();
		assert_eq!(tag.tag_type(), TagType::Id3v1(Id3v1Version::V1_1));
		assert_eq!(tag.get_string("title"), Some("Foo title"));
		assert_eq!(tag.get_string("album"), None);
		assert_eq!(tag.get_string("year"), Some("1998"));
		assert_eq!(tag.get("track").next(), Some(&ItemValue::Number(4)));
		assert_eq!(tag.get_string("genre"), Some("Classical"));
		assert_eq!(tag.len(), 6);
	}

	#[test_log::test]
	fn unknown_genre_is_dropped() {
		let id3v1_tag = Id3v1Tag {
			genre: Some(200),
			..Id3v1Tag::default()
		};

		assert_eq!(id3v1_tag.version(), Id3v1Version::V1);
		assert!(id3v1_tag.genre_name().is_none());

		let tag: Tag = id3v1_tag.into();
		assert!(tag.is_empty());
	}
}
