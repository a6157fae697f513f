use super::header::{Id3v2TagFlags, Id3v2Version};
use super::items::{LanguageFrame, TextInformationFrame};
use super::Frame;
use crate::tag::{ItemValue, LanguageText, Tag, TagType, UserText};

/// An `ID3v2` tag
///
/// Frames are kept in the order they were read. Duplicate frames are allowed, and a
/// multi-valued text frame keeps all of its values.
///
/// ## Conversions
///
/// ### To `Tag`
///
/// Every frame becomes one item per value, keyed by its frame ID as written (ex. "TPE1",
/// or "TP1" in an ID3v2.2 tag):
///
/// * Text frames -> [`ItemValue::Text`], one per value
/// * `TXXX`/`WXXX` -> [`ItemValue::UserText`]
/// * URL frames -> [`ItemValue::Locator`]
/// * `COMM`/`USLT` -> [`ItemValue::Language`]
/// * `APIC` -> [`ItemValue::Picture`]
/// * Everything else -> [`ItemValue::Binary`]
#[derive(Debug, Clone, PartialEq)]
pub struct Id3v2Tag {
	version: Id3v2Version,
	flags: Id3v2TagFlags,
	pub(crate) frames: Vec<Frame>,
}

impl Id3v2Tag {
	pub(crate) fn new(version: Id3v2Version, flags: Id3v2TagFlags) -> Self {
		Self {
			version,
			flags,
			frames: Vec::new(),
		}
	}

	/// The version of the tag
	///
	/// If multiple tags were merged, this is the version of the first.
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The flags from the tag header
	pub fn flags(&self) -> &Id3v2TagFlags {
		&self.flags
	}

	/// Every frame, in the order they were read
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Every frame with the ID `id`
	pub fn get<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
		self.frames.iter().filter(move |frame| frame.id_str() == id)
	}

	/// Every text value of every frame with the ID `id`
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use mpegmeta::config::ParseOptions;
	/// use mpegmeta::mpeg::MpegFile;
	///
	/// # fn main() -> mpegmeta::error::Result<()> {
	/// # let mut reader = std::io::Cursor::new(Vec::new());
	/// let file = MpegFile::read_from(&mut reader, ParseOptions::new())?;
	///
	/// if let Some(id3v2) = file.id3v2() {
	/// 	for artist in id3v2.get_texts("TPE1") {
	/// 		println!("Artist: {artist}");
	/// 	}
	/// }
	/// # Ok(()) }
	/// ```
	pub fn get_texts<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.get(id)
			.filter_map(|frame| match frame {
				Frame::Text(TextInformationFrame { values, .. }) => Some(values),
				_ => None,
			})
			.flatten()
			.map(String::as_str)
	}

	/// The first text value of the first frame with the ID `id`
	pub fn get_text(&self, id: &str) -> Option<&str> {
		self.frames
			.iter()
			.filter(|frame| frame.id_str() == id)
			.find_map(|frame| match frame {
				Frame::Text(TextInformationFrame { values, .. }) => values.first().map(String::as_str),
				_ => None,
			})
	}

	/// Every comment frame (`COMM`, or `COM` in ID3v2.2)
	pub fn comments(&self) -> impl Iterator<Item = &LanguageFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::Comment(comment) => Some(comment),
			_ => None,
		})
	}

	/// The number of frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Append the frames of a later tag in the same stream
	pub(crate) fn merge(&mut self, other: Id3v2Tag) {
		if other.version != self.version {
			log::debug!(
				"Merging an {:?} tag into an {:?} tag",
				other.version,
				self.version
			);
		}

		self.frames.extend(other.frames);
	}
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

fn language_text(frame: LanguageFrame) -> ItemValue {
	ItemValue::Language(LanguageText {
		language: frame.language,
		description: frame.description,
		text: frame.content,
	})
}

impl From<Id3v2Tag> for Tag {
	fn from(input: Id3v2Tag) -> Self {
		let mut tag = Tag::new(TagType::Id3v2(input.version));

		for frame in input.frames {
			let key = frame.id_str().to_owned();

			match frame {
				Frame::Text(text) => {
					for value in text.values {
						tag.push_value(key.clone(), ItemValue::Text(value));
					}
				},
				Frame::UserText(user_text) => tag.push_value(
					key,
					ItemValue::UserText(UserText {
						description: user_text.description,
						value: user_text.content,
					}),
				),
				Frame::UserUrl(user_url) => tag.push_value(
					key,
					ItemValue::UserText(UserText {
						description: user_url.description,
						value: user_url.content,
					}),
				),
				Frame::Url(url) => tag.push_value(key, ItemValue::Locator(url.content)),
				Frame::Comment(comment) => tag.push_value(key, language_text(comment)),
				Frame::UnsynchronizedText(lyrics) => tag.push_value(key, language_text(lyrics)),
				Frame::Picture(picture) => tag.push_value(key, ItemValue::Picture(picture.picture)),
				Frame::Binary(binary) => tag.push_value(key, ItemValue::Binary(binary.data)),
			}
		}

		tag
	}
}
