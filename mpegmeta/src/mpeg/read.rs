use super::MpegFile;
use super::constants::MAX_FREE_FORMAT_FRAME_LEN;
use super::header::{
	CHAIN_MASK, FREE_FORMAT_MASK, FrameHeader, HEADER_MASK, Layer, VBRI_OFFSET, VbrHeader,
	search_for_frame_sync, verify_frame_sync,
};
use super::properties::{ScanExtent, StreamStatistics};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Region, Result, Warning};
use crate::id3::v2::header::Id3v2Header;
use crate::id3::v2::read::parse_id3v2;
use crate::id3::{ID3FindResults, find_id3v1};
use crate::macros::err;
use crate::util::io::{ReadAtExt, SeekStreamLen};

use std::io::{Read, Seek, SeekFrom};

// Size of the window read at a time while searching for a frame sync
const SEARCH_WINDOW: u64 = 4096;

pub(super) fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<MpegFile>
where
	R: Read + Seek,
{
	let mut file = MpegFile::default();
	let mut found_tag = false;

	let stream_len = reader.stream_len_hack()?;
	let mut audio_start = 0;

	// There may be multiple ID3v2 tags back to back
	loop {
		reader.seek(SeekFrom::Start(audio_start))?;

		let mut identifier = [0; 3];
		if reader.read_exact(&mut identifier).is_err() || &identifier != b"ID3" {
			break;
		}

		if stream_len - audio_start < 10 {
			log::warn!("ID3v2: Stream ended inside of the tag header");
			file.warnings.push(Warning::SourceExhausted(Region::Id3v2));
			break;
		}

		reader.seek(SeekFrom::Start(audio_start))?;
		let header = match Id3v2Header::parse(reader) {
			Ok(header) => header,
			Err(e) => {
				if parse_options.parsing_mode == ParsingMode::Strict {
					return Err(e);
				}

				log::warn!("ID3v2: Ignoring a tag with an invalid header: {e}");
				break;
			},
		};

		found_tag = true;
		let header_end = audio_start + 10;
		let tag_end = audio_start + u64::from(header.full_tag_size());

		if parse_options.read_tags {
			match parse_id3v2(reader, header, parse_options, &mut file.warnings) {
				Ok(tag) => match &mut file.id3v2_tag {
					Some(existing_tag) => {
						// Duplicate tags should have their frames appended to the previous
						log::warn!("ID3v2: Found another tag directly after the first, merging");
						existing_tag.merge(tag);
					},
					None => file.id3v2_tag = Some(tag),
				},
				Err(e) => {
					if parse_options.parsing_mode == ParsingMode::Strict {
						return Err(e);
					}

					log::warn!("ID3v2: Ignoring an unreadable tag: {e}");
					file.warnings.push(Warning::InvalidTag {
						region: Region::Id3v2,
						reason: e.to_string(),
					});
				},
			}
		}

		// A size running past the source can't be used to find the audio, so the frame
		// synchronizer takes over from the end of the tag header
		if tag_end > stream_len {
			log::warn!("ID3v2: Tag size runs past the end of the stream, searching after the header");
			audio_start = header_end;
			break;
		}

		audio_start = tag_end;
		if audio_start == stream_len {
			break;
		}
	}

	let ID3FindResults(id3v1_header, id3v1) = find_id3v1(
		reader,
		audio_start,
		parse_options.read_tags,
		parse_options.parsing_mode,
		&mut file.warnings,
	)?;

	let mut audio_end = stream_len;
	if id3v1_header.is_some() {
		found_tag = true;
		audio_end -= 128;
		file.id3v1_tag = id3v1;
	}

	log::debug!("MPEG: Audio region is {audio_start}..{audio_end}");

	let mut scanner = FrameScanner::new(reader, audio_end, parse_options.confirm_frame_sync);
	file.properties = read_properties(&mut scanner, audio_start, parse_options, &mut file.warnings)?;

	if file.properties.is_none() {
		log::warn!("MPEG: No valid frames found in the stream");

		if parse_options.compute_duration && !found_tag {
			err!(NoAudioFrames);
		}

		file.warnings.push(Warning::NoAudioFrames);
	}

	Ok(file)
}

fn read_properties<R>(
	scanner: &mut FrameScanner<'_, R>,
	audio_start: u64,
	parse_options: ParseOptions,
	warnings: &mut Vec<Warning>,
) -> Result<Option<super::MpegProperties>>
where
	R: Read + Seek,
{
	let Some(first_frame) = scanner.find_next_frame(audio_start)? else {
		return Ok(None);
	};

	log::debug!("MPEG: First frame found at offset {}", first_frame.offset);

	let vbr_header = scanner.read_vbr_header(&first_frame)?;

	let mut current = Some(first_frame);
	if let Some(vbr_header) = vbr_header {
		log::debug!(
			"MPEG: Found a {:?} header, total frames: {}",
			vbr_header.ty,
			vbr_header.frames
		);

		// The VBR header frame carries no audio
		current = scanner.next_frame(&first_frame)?;
	}

	let limit = if parse_options.compute_duration {
		parse_options.probe_frame_limit.map(u64::from)
	} else {
		Some(1)
	};

	let mut scan_extent = if parse_options.compute_duration {
		ScanExtent::Full
	} else {
		ScanExtent::FirstFrame
	};

	let mut stats = StreamStatistics::default();
	let mut counted_start = None;

	while let Some(frame) = current {
		if limit.is_some_and(|limit| stats.total_frames() >= limit) {
			if parse_options.compute_duration {
				log::debug!(
					"MPEG: Probe limit reached after {} frames",
					stats.total_frames()
				);
				scan_extent = ScanExtent::Truncated;
			}

			break;
		}

		let available = scanner.end - frame.offset;
		let bytes = u64::from(frame.header.len).min(available);
		if bytes < u64::from(frame.header.len) {
			log::debug!(
				"MPEG: Final frame is truncated, {bytes} of {} bytes available",
				frame.header.len
			);
		}

		let bytes = u32::try_from(bytes).unwrap_or(frame.header.len);
		if let Some(warning) = stats.push(&frame.header, bytes) {
			warnings.push(warning);
		}

		counted_start.get_or_insert(frame.offset);
		current = scanner.next_frame(&frame)?;
	}

	let audio_len = counted_start.map_or(0, |start| scanner.end - start);
	log::debug!(
		"MPEG: Counted {} frames, {} bytes",
		stats.total_frames(),
		stats.total_audio_bytes()
	);

	Ok(stats.finish(scan_extent, vbr_header, audio_len))
}

#[derive(Copy, Clone, Debug)]
struct Frame {
	header: FrameHeader,
	offset: u64,
	data: u32,
}

/// Locates frames within the audio region of a stream
struct FrameScanner<'a, R> {
	reader: &'a mut R,
	end: u64,
	confirm: bool,
	// Length of the unpadded free format frames, once measured
	free_format_len: Option<u32>,
}

impl<'a, R> FrameScanner<'a, R>
where
	R: Read + Seek,
{
	fn new(reader: &'a mut R, end: u64, confirm: bool) -> Self {
		Self {
			reader,
			end,
			confirm,
			free_format_len: None,
		}
	}

	fn read_u32_at(&mut self, offset: u64) -> Result<Option<u32>> {
		if offset + 4 > self.end {
			return Ok(None);
		}

		self.reader.read_u32_at(offset)
	}

	/// Searches for the next valid frame at or after `from`
	///
	/// A candidate is skipped one byte at a time, never by its own length, so that a false
	/// match can't throw off the following search.
	fn find_next_frame(&mut self, from: u64) -> Result<Option<Frame>> {
		let mut window = Vec::new();
		let mut window_start = from;

		while window_start + 4 <= self.end {
			let len = SEARCH_WINDOW.min(self.end - window_start);
			let read = self.reader.read_window_at(window_start, len, &mut window)?;
			if read < 4 {
				break;
			}

			let mut pos = 0;
			while let Some(sync) = search_for_frame_sync(&window[pos..read - 2]) {
				let index = pos + sync;
				pos = index + 1;

				let data = u32::from_be_bytes([
					window[index],
					window[index + 1],
					window[index + 2],
					window[index + 3],
				]);

				let offset = window_start + index as u64;
				let mut header = match FrameHeader::parse(data) {
					Ok(header) => header,
					Err(e) => {
						log::trace!("MPEG: Rejected candidate at offset {offset}: {e}");
						continue;
					},
				};

				if header.is_free_format() && !self.resolve_free_format(&mut header, offset, data)? {
					log::trace!("MPEG: Unable to measure free format frame at offset {offset}");
					continue;
				}

				let frame = Frame {
					header,
					offset,
					data,
				};

				if self.confirm_frame(&frame)? {
					return Ok(Some(frame));
				}

				log::debug!("MPEG: Candidate at offset {offset} is not followed by another frame");
			}

			// The final 3 bytes are revisited with the next window
			window_start += (read - 3) as u64;
		}

		Ok(None)
	}

	/// Checks that another frame with a matching header sits at `offset + frame length`
	fn confirm_frame(&mut self, frame: &Frame) -> Result<bool> {
		if !self.confirm {
			return Ok(true);
		}

		let next = frame.offset + u64::from(frame.header.len);

		// Nothing to compare against, the frame runs up to (or past) the end of the audio
		let Some(next_data) = self.read_u32_at(next)? else {
			return Ok(true);
		};

		Ok(next_data & HEADER_MASK == frame.data & HEADER_MASK
			&& FrameHeader::parse(next_data).is_ok())
	}

	/// Finds the frame after `previous`, searching for a new one if the chain is broken
	fn next_frame(&mut self, previous: &Frame) -> Result<Option<Frame>> {
		let offset = previous.offset + u64::from(previous.header.len);

		let Some(data) = self.read_u32_at(offset)? else {
			return Ok(None);
		};

		if data & CHAIN_MASK == previous.data & CHAIN_MASK {
			if let Ok(mut header) = FrameHeader::parse(data) {
				if !header.is_free_format() || self.resolve_free_format(&mut header, offset, data)? {
					return Ok(Some(Frame {
						header,
						offset,
						data,
					}));
				}
			}
		}

		log::debug!("MPEG: Lost sync at offset {offset}, searching for the next frame");
		self.find_next_frame(offset)
	}

	/// Determine the length of a free format frame
	///
	/// The first free format frame is measured by searching for the following header, every
	/// frame after it is assumed to be the same size.
	fn resolve_free_format(&mut self, header: &mut FrameHeader, offset: u64, data: u32) -> Result<bool> {
		if let Some(unpadded_len) = self.free_format_len {
			header.set_free_format_len(unpadded_len);
			return Ok(true);
		}

		let search_start = offset + u64::from(header.data_start);
		if search_start >= self.end {
			return Ok(false);
		}

		let len = MAX_FREE_FORMAT_FRAME_LEN.min(self.end - search_start);

		let mut window = Vec::new();
		let read = self.reader.read_window_at(search_start, len, &mut window)?;

		for (index, bytes) in window[..read].windows(4).enumerate() {
			if !verify_frame_sync([bytes[0], bytes[1]]) {
				continue;
			}

			let next_data = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
			if next_data & FREE_FORMAT_MASK != data & FREE_FORMAT_MASK
				|| FrameHeader::parse(next_data).is_err()
			{
				continue;
			}

			let distance = (search_start - offset) + index as u64;
			let Ok(distance) = u32::try_from(distance) else {
				return Ok(false);
			};

			let unpadded_len = distance.saturating_sub(header.padding_size());
			log::debug!("MPEG: Free format frames are {unpadded_len} bytes (unpadded)");

			self.free_format_len = Some(unpadded_len);
			header.set_free_format_len(unpadded_len);
			return Ok(true);
		}

		Ok(false)
	}

	fn read_vbr_header(&mut self, frame: &Frame) -> Result<Option<VbrHeader>> {
		if frame.header.layer != Layer::Layer3 {
			return Ok(None);
		}

		let mut window = Vec::new();
		for position in [frame.header.data_start, VBRI_OFFSET] {
			if position + 4 > frame.header.len {
				continue;
			}

			let len = u64::from(frame.header.len - position).min(32);
			let read = self
				.reader
				.read_window_at(frame.offset + u64::from(position), len, &mut window)?;

			match VbrHeader::read(&mut &window[..read]) {
				Ok(Some(vbr_header)) => return Ok(Some(vbr_header)),
				Ok(None) => {},
				Err(e) => {
					log::warn!("MPEG: Ignoring an invalid VBR header: {e}");
					return Ok(None);
				},
			}
		}

		Ok(None)
	}
}
