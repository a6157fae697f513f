use crate::id3::v1::GENRES;
use crate::tag::TagType;

/// A field of [`CommonMetadata`](super::CommonMetadata)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CommonKey {
	Title,
	Artist,
	AlbumArtist,
	Album,
	Year,
	Track,
	Disk,
	Genre,
	Comment,
	Composer,
	Lyrics,
}

macro_rules! gen_map {
	(
		$(#[$meta:meta])?
		$NAME:ident;

		$(
			$($key:literal)|+ => $variant:ident
		),+ $(,)?
	) => {
		$(#[$meta])?
		#[allow(non_camel_case_types)]
		pub(super) struct $NAME;

		impl $NAME {
			pub(super) fn common_key(&self, key: &str) -> Option<CommonKey> {
				match key {
					$(
						$($key)|+ => Some(CommonKey::$variant),
					)+
					_ => None,
				}
			}
		}
	}
}

gen_map!(
	ID3V1_MAP;

	"title"   => Title,
	"artist"  => Artist,
	"album"   => Album,
	"year"    => Year,
	"track"   => Track,
	"genre"   => Genre,
	"comment" => Comment
);

gen_map!(
	ID3V2_MAP;

	"TIT2" | "TT2"          => Title,
	"TPE1" | "TP1"          => Artist,
	"TPE2" | "TP2"          => AlbumArtist,
	"TALB" | "TAL"          => Album,
	"TDRC" | "TYER" | "TYE" => Year,
	"TRCK" | "TRK"          => Track,
	"TPOS" | "TPA"          => Disk,
	"TCON" | "TCO"          => Genre,
	"COMM" | "COM"          => Comment,
	"TCOM" | "TCM"          => Composer,
	"USLT" | "ULT"          => Lyrics
);

pub(super) fn common_key(tag_type: TagType, key: &str) -> Option<CommonKey> {
	match tag_type {
		TagType::Id3v1(_) => ID3V1_MAP.common_key(key),
		TagType::Id3v2(_) => ID3V2_MAP.common_key(key),
	}
}

/// Parse a "number/total" pair, as used in `TRCK` and `TPOS`
///
/// Either side may be missing or invalid, in which case it is `None`.
pub(super) fn parse_number_of(value: &str) -> (Option<u32>, Option<u32>) {
	let (no, of) = match value.split_once('/') {
		Some((no, of)) => (no, Some(of)),
		None => (value, None),
	};

	(
		no.trim().parse().ok(),
		of.and_then(|of| of.trim().parse().ok()),
	)
}

/// Parse the year from a date, which may be a bare year ("1998") or an ISO 8601 timestamp
/// ("1998-03-14T12:00")
pub(super) fn parse_year(value: &str) -> Option<u32> {
	let value = value.trim();
	let year = value.get(..4)?;

	if !year.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	// "19980" is not a year
	if value.as_bytes().get(4).is_some_and(u8::is_ascii_digit) {
		return None;
	}

	year.parse().ok()
}

fn genre_code(code: &str) -> Option<&'static str> {
	match code {
		"RX" => Some("Remix"),
		"CR" => Some("Cover"),
		_ => {
			let index = code.parse::<usize>().ok()?;
			GENRES.get(index).copied()
		},
	}
}

/// Resolve an ID3v2 content type into genre names
///
/// This handles the legacy forms:
///
/// * "(17)", a reference into the ID3v1 genre list
/// * "(4)Eurodisco", a reference with a refinement, both are kept
/// * "(RX)"/"(CR)", remix and cover
/// * "((Foo)", an escaped literal "(Foo)"
/// * "17", a bare reference (ID3v2.4)
///
/// Anything else is taken as-is.
pub(super) fn parse_genre(value: &str) -> Vec<String> {
	let value = value.trim();
	if value.is_empty() {
		return Vec::new();
	}

	if value.bytes().all(|b| b.is_ascii_digit()) {
		return match genre_code(value) {
			Some(genre) => vec![genre.to_owned()],
			None => vec![value.to_owned()],
		};
	}

	let mut genres = Vec::new();
	let mut rest = value;
	while let Some(inner) = rest.strip_prefix('(') {
		if inner.starts_with('(') {
			break;
		}

		let Some((code, after)) = inner.split_once(')') else {
			break;
		};

		match genre_code(code) {
			Some(genre) => genres.push(genre.to_owned()),
			// Not a reference, so the whole value is text
			None => return vec![value.to_owned()],
		}

		rest = after;
	}

	let refinement = rest.strip_prefix('(').filter(|r| r.starts_with('(')).unwrap_or(rest);
	if !refinement.is_empty() && !genres.iter().any(|genre| genre == refinement) {
		genres.push(refinement.to_owned());
	}

	genres
}

#[cfg(test)]
mod tests {
	use super::{CommonKey, common_key, parse_genre, parse_number_of, parse_year};
	use crate::id3::v1::Id3v1Version;
	use crate::id3::v2::Id3v2Version;
	use crate::tag::TagType;

	#[test_log::test]
	fn keys() {
		let v22 = TagType::Id3v2(Id3v2Version::V2);
		let v24 = TagType::Id3v2(Id3v2Version::V4);
		let v1 = TagType::Id3v1(Id3v1Version::V1_1);

		assert_eq!(common_key(v24, "TPE1"), Some(CommonKey::Artist));
		assert_eq!(common_key(v22, "TP1"), Some(CommonKey::Artist));
		assert_eq!(common_key(v24, "TDRC"), Some(CommonKey::Year));
		assert_eq!(common_key(v24, "PRIV"), None);
		assert_eq!(common_key(v1, "track"), Some(CommonKey::Track));
		assert_eq!(common_key(v1, "TIT2"), None);
	}

	#[test_log::test]
	fn number_of() {
		assert_eq!(parse_number_of("04"), (Some(4), None));
		assert_eq!(parse_number_of("4/12"), (Some(4), Some(12)));
		assert_eq!(parse_number_of(" 1 / 2 "), (Some(1), Some(2)));
		assert_eq!(parse_number_of("/12"), (None, Some(12)));
		assert_eq!(parse_number_of("A"), (None, None));
	}

	#[test_log::test]
	fn year() {
		assert_eq!(parse_year("1998"), Some(1998));
		assert_eq!(parse_year("2003-05-01T12:00"), Some(2003));
		assert_eq!(parse_year("98"), None);
		assert_eq!(parse_year("19980"), None);
		assert_eq!(parse_year("abcd"), None);
	}

	#[test_log::test]
	fn genres() {
		assert_eq!(parse_genre("Ska-Punk"), vec!["Ska-Punk"]);
		assert_eq!(parse_genre("(17)"), vec!["Rock"]);
		assert_eq!(parse_genre("17"), vec!["Rock"]);
		assert_eq!(parse_genre("(17)Rock"), vec!["Rock"]);
		assert_eq!(parse_genre("(4)Eurodisco"), vec!["Disco", "Eurodisco"]);
		assert_eq!(parse_genre("(RX)(CR)"), vec!["Remix", "Cover"]);
		assert_eq!(parse_genre("((Foo)"), vec!["(Foo)"]);
		assert_eq!(parse_genre("(Foo)"), vec!["(Foo)"]);
		assert_eq!(parse_genre("999"), vec!["999"]);
		assert!(parse_genre("").is_empty());
	}
}
