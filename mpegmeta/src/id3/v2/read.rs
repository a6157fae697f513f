use super::frame::read::ParsedFrame;
use super::header::{Id3v2Header, Id3v2Version, skip_extended_header};
use super::tag::Id3v2Tag;
use super::util::synchsafe::remove_unsynchronisation;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Region, Result, Warning};

use std::io::Read;

/// Read the body of an ID3v2 tag, `header` having just been read from `bytes`
///
/// The reader is left at the end of the tag body (before the footer, if any).
pub(crate) fn parse_id3v2<R>(
	bytes: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
	warnings: &mut Vec<Warning>,
) -> Result<Id3v2Tag>
where
	R: Read,
{
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	// The declared size can't be trusted until the bytes are actually there
	let mut body = Vec::new();
	let read = bytes
		.by_ref()
		.take(u64::from(header.size))
		.read_to_end(&mut body)?;

	if read < header.size as usize {
		log::warn!(
			"ID3v2 tag declares {} bytes, but the source ended after {read}",
			header.size
		);
		warnings.push(Warning::SourceExhausted(Region::Id3v2));
	}

	// ID3v2.4 tags are unsynchronised per frame
	let tag_unsynchronised = header.flags.unsynchronisation;
	if tag_unsynchronised && header.version != Id3v2Version::V4 {
		remove_unsynchronisation(&mut body);
	}

	let mut content = &body[..];
	if header.flags.extended_header {
		match skip_extended_header(content, header.version) {
			Ok(rest) => content = rest,
			Err(err) => {
				if parse_options.parsing_mode == ParsingMode::Strict {
					return Err(err);
				}

				log::warn!("{err}, ignoring the tag body");
				content = &[];
			},
		}
	}

	let mut tag = Id3v2Tag::new(header.version, header.flags);
	loop {
		match ParsedFrame::read(
			&mut content,
			header.version,
			tag_unsynchronised,
			parse_options,
			warnings,
		)? {
			ParsedFrame::Next(frame) => tag.frames.push(frame),
			// The frame was skipped, but we can expect more
			ParsedFrame::Skip => {},
			// Padding, or the end of the tag
			ParsedFrame::Eof => break,
		}
	}

	log::debug!("Read {} ID3v2 frames", tag.len());
	Ok(tag)
}
