//! ID3 specific items
//!
//! An MPEG stream may carry an [`Id3v2Tag`](v2::Id3v2Tag) at its start, and an
//! [`Id3v1Tag`](v1::Id3v1Tag) at its end. Either or both may be absent.

pub mod v1;
pub mod v2;

use crate::config::ParsingMode;
use crate::error::{Region, Result, Warning};
use crate::util::io::SeekStreamLen;
use v1::constants::ID3V1_TAG_MARKER;

use std::io::{Read, Seek, SeekFrom};

pub(crate) struct ID3FindResults<Header, Content>(pub Option<Header>, pub Content);

/// Searches for an ID3v1 tag in the final 128 bytes of the stream
///
/// Bytes before `search_start` (ex. a preceding ID3v2 tag) are never treated as part of the trailer.
pub(crate) fn find_id3v1<R>(
	data: &mut R,
	search_start: u64,
	read: bool,
	parse_mode: ParsingMode,
	warnings: &mut Vec<Warning>,
) -> Result<ID3FindResults<(), Option<v1::Id3v1Tag>>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	let mut id3v1 = None;
	let mut header = None;

	let stream_len = data.stream_len_hack()?;
	let available = stream_len.saturating_sub(search_start);

	if available < 128 {
		// The stream is too small to hold a trailer. If it looks like one anyway, it was cut short.
		if available >= 3 {
			data.seek(SeekFrom::Start(search_start))?;

			let mut id3v1_header = [0; 3];
			data.read_exact(&mut id3v1_header)?;

			if id3v1_header == ID3V1_TAG_MARKER {
				log::warn!("ID3v1: Stream ended {available} bytes into the tag");
				warnings.push(Warning::SourceExhausted(Region::Id3v1));
			}
		}

		return Ok(ID3FindResults(header, id3v1));
	}

	data.seek(SeekFrom::End(-128))?;

	let mut id3v1_tag = [0; 128];
	data.read_exact(&mut id3v1_tag)?;

	// No ID3v1 tag found
	if id3v1_tag[..3] != ID3V1_TAG_MARKER {
		return Ok(ID3FindResults(header, id3v1));
	}

	log::debug!("Found an ID3v1 tag, parsing");

	header = Some(());

	if read {
		id3v1 = Some(v1::Id3v1Tag::parse(id3v1_tag, parse_mode)?);
	}

	Ok(ID3FindResults(header, id3v1))
}
