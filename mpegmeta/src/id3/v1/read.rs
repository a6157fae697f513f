use super::constants::{GENRES, ID3V1_TAG_MARKER};
use super::tag::Id3v1Tag;
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::err;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse a 128 byte ID3v1 trailer, including the "TAG" marker
	///
	/// # Errors
	///
	/// * The marker is missing
	/// * The year is not made of 4 digits, and `parse_mode` is [`ParsingMode::Strict`]
	pub(crate) fn parse(reader: [u8; 128], parse_mode: ParsingMode) -> Result<Self> {
		if reader[..3] != ID3V1_TAG_MARKER {
			err!(FakeTag);
		}

		let reader = &reader[3..];

		let mut tag = Self {
			title: decode_text(&reader[..30]),
			artist: decode_text(&reader[30..60]),
			album: decode_text(&reader[60..90]),
			year: parse_year(&reader[90..94], parse_mode)?,
			..Self::default()
		};

		// ID3v1.1 steals the final 2 bytes of the comment: a zero byte, then the track number.
		// A track number of 0 is just more comment padding.
		let comment_range = if reader[122] == 0 && reader[123] != 0 {
			tag.track_number = Some(reader[123]);
			94..122
		} else {
			94..124
		};

		tag.comment = decode_text(&reader[comment_range]);

		if usize::from(reader[124]) < GENRES.len() {
			tag.genre = Some(reader[124]);
		}

		Ok(tag)
	}
}

// Fields are padded with either zeros or spaces
fn decode_text(data: &[u8]) -> Option<String> {
	let mut end = data.len();
	if let Some(null_pos) = data.iter().position(|&b| b == 0) {
		if data[null_pos..].iter().any(|b| *b != 0) {
			log::warn!("ID3v1: Text field contains junk after the terminator, skipping it");
		}

		end = null_pos;
	}

	let text = latin1_decode(&data[..end]);
	let trimmed = text.trim_end_matches(' ');
	if trimmed.is_empty() {
		return None;
	}

	Some(trimmed.to_owned())
}

fn parse_year(data: &[u8], parse_mode: ParsingMode) -> Result<Option<String>> {
	let Some(year) = decode_text(data) else {
		return Ok(None);
	};

	if year.len() != 4 || !year.bytes().all(|c| c.is_ascii_digit()) {
		// Many encoders write spaces or zeros for an unknown year
		if parse_mode == ParsingMode::Strict {
			err!(TextDecode("ID3v1 year field contains non-ASCII digit characters"));
		}

		log::warn!("ID3v1: Discarding an invalid year: {year:?}");
		return Ok(None);
	}

	Ok(Some(year))
}
