//! Format-agnostic metadata
//!
//! Every tag container present in a stream is mapped onto a single [`CommonMetadata`]. When
//! multiple containers provide the same field, ID3v2 is preferred over ID3v1. Fields that no
//! container provides are left empty.

mod mapping;

use crate::tag::{ItemValue, Tag, TagType};
use mapping::{CommonKey, common_key, parse_genre, parse_number_of, parse_year};

/// A position within a set, such as a track number and total
///
/// Either side may be unknown. An unknown value is distinct from 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberOf {
	/// The position
	pub no: Option<u32>,
	/// The size of the set
	pub of: Option<u32>,
}

impl NumberOf {
	/// Whether both sides are unknown
	pub fn is_empty(&self) -> bool {
		self.no.is_none() && self.of.is_none()
	}
}

/// Metadata mapped from all tag containers in a stream
///
/// # Examples
///
/// ```rust,no_run
/// use mpegmeta::config::ParseOptions;
///
/// # fn main() -> mpegmeta::error::Result<()> {
/// let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
/// let common = result.common();
///
/// println!("{:?} by {}", common.title, common.artists.join(", "));
/// if let Some(track) = common.track.no {
/// 	println!("Track #{track}");
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CommonMetadata {
	/// Track title
	pub title: Option<String>,
	/// Track artists, in order
	pub artists: Vec<String>,
	/// Album artist
	pub album_artist: Option<String>,
	/// Album title
	pub album: Option<String>,
	/// Release year
	pub year: Option<u32>,
	/// Track number and total
	pub track: NumberOf,
	/// Disk number and total
	pub disk: NumberOf,
	/// Genres, in order
	pub genre: Vec<String>,
	/// Comments, in order
	pub comment: Vec<String>,
	/// Composer
	pub composer: Option<String>,
	/// Unsynchronized lyrics
	pub lyrics: Option<String>,
}

impl CommonMetadata {
	/// Map the items of `tags` onto a `CommonMetadata`
	///
	/// `tags` may be in any order, they are consulted by priority.
	pub(crate) fn from_tags(tags: &[Tag]) -> Self {
		let mut tags = tags.iter().collect::<Vec<_>>();
		tags.sort_by_key(|tag| priority(tag.tag_type()));

		let mut common = CommonMetadata::default();
		for tag in tags {
			common.fill_from(Self::from_tag(tag));
		}

		common
	}

	fn from_tag(tag: &Tag) -> Self {
		let mut common = CommonMetadata::default();

		for item in tag {
			let Some(key) = common_key(tag.tag_type(), item.key()) else {
				continue;
			};

			let value = item.value();
			match key {
				CommonKey::Title => set_first(&mut common.title, value),
				CommonKey::Artist => push_text(&mut common.artists, value),
				CommonKey::AlbumArtist => set_first(&mut common.album_artist, value),
				CommonKey::Album => set_first(&mut common.album, value),
				CommonKey::Year => {
					if common.year.is_none() {
						common.year = text(value).and_then(parse_year);
					}
				},
				CommonKey::Track => set_number_of(&mut common.track, value),
				CommonKey::Disk => set_number_of(&mut common.disk, value),
				CommonKey::Genre => {
					for genre in text(value).map(parse_genre).unwrap_or_default() {
						if !common.genre.contains(&genre) {
							common.genre.push(genre);
						}
					}
				},
				CommonKey::Comment => push_text(&mut common.comment, value),
				CommonKey::Composer => set_first(&mut common.composer, value),
				CommonKey::Lyrics => set_first(&mut common.lyrics, value),
			}
		}

		common
	}

	// Fields already set by a higher priority container are kept
	fn fill_from(&mut self, other: Self) {
		fn fill<T>(field: &mut Option<T>, other: Option<T>) {
			if field.is_none() {
				*field = other;
			}
		}

		fn fill_list<T>(field: &mut Vec<T>, other: Vec<T>) {
			if field.is_empty() {
				*field = other;
			}
		}

		fill(&mut self.title, other.title);
		fill_list(&mut self.artists, other.artists);
		fill(&mut self.album_artist, other.album_artist);
		fill(&mut self.album, other.album);
		fill(&mut self.year, other.year);
		if self.track.is_empty() {
			self.track = other.track;
		}
		if self.disk.is_empty() {
			self.disk = other.disk;
		}
		fill_list(&mut self.genre, other.genre);
		fill_list(&mut self.comment, other.comment);
		fill(&mut self.composer, other.composer);
		fill(&mut self.lyrics, other.lyrics);
	}
}

fn priority(tag_type: TagType) -> u8 {
	match tag_type {
		TagType::Id3v2(_) => 0,
		TagType::Id3v1(_) => 1,
	}
}

// Empty values are treated as absent
fn text(value: &ItemValue) -> Option<&str> {
	let text = match value {
		ItemValue::Text(text) => text.as_str(),
		ItemValue::Language(language) => language.text.as_str(),
		_ => return None,
	};

	(!text.trim().is_empty()).then_some(text)
}

fn set_first(field: &mut Option<String>, value: &ItemValue) {
	if field.is_none() {
		*field = text(value).map(str::to_owned);
	}
}

fn push_text(field: &mut Vec<String>, value: &ItemValue) {
	if let Some(text) = text(value) {
		field.push(text.to_owned());
	}
}

fn set_number_of(field: &mut NumberOf, value: &ItemValue) {
	if !field.is_empty() {
		return;
	}

	let (no, of) = match value {
		ItemValue::Number(number) => (Some(*number), None),
		_ => text(value).map(parse_number_of).unwrap_or_default(),
	};

	*field = NumberOf { no, of };
}
