use super::Frame;
use super::content::parse_content;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result, Warning};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::items::BinaryFrame;
use crate::id3::v2::util::synchsafe::{SynchsafeInteger, remove_unsynchronisation};
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::macros::parse_mode_choice;

use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder};

// Whether a frame body of `size` bytes is followed by padding, the end of the tag, or a valid frame ID
fn ends_on_frame_boundary(rest: &[u8], size: u32) -> bool {
	match rest.get(size as usize..) {
		Some([] | [0, ..]) => true,
		Some(next) => next
			.get(..4)
			.is_some_and(|id| id.iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())),
		None => false,
	}
}

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

impl ParsedFrame {
	/// Read the next frame from the (already de-unsynchronised, for ID3v2.2/ID3v2.3) tag body
	///
	/// `content` is advanced past the frame.
	pub(crate) fn read(
		content: &mut &[u8],
		version: Id3v2Version,
		tag_unsynchronised: bool,
		parse_options: ParseOptions,
		warnings: &mut Vec<Warning>,
	) -> Result<Self> {
		let parsing_mode = parse_options.parsing_mode;

		let header_len = match version {
			Id3v2Version::V2 => 6,
			Id3v2Version::V3 | Id3v2Version::V4 => 10,
		};

		// Padding, or not enough left for another frame
		if content.len() < header_len || content[0] == 0 {
			return Ok(Self::Eof);
		}

		let (header, rest) = content.split_at(header_len);
		let (id, size, flags) = match version {
			Id3v2Version::V2 => (
				&header[..3],
				BigEndian::read_u24(&header[3..6]),
				FrameFlags::default(),
			),
			Id3v2Version::V3 => (
				&header[..4],
				BigEndian::read_u32(&header[4..8]),
				FrameFlags::parse_id3v23(BigEndian::read_u16(&header[8..])),
			),
			Id3v2Version::V4 => {
				let plain_size = BigEndian::read_u32(&header[4..8]);

				// Some encoders write plain sizes into ID3v2.4 tags. When both readings are
				// possible, the plain one is only used if it alone lands on another frame.
				let size = if plain_size & 0x8080_8080 != 0 {
					log::warn!("ID3v2.4 frame has a non-synchsafe size, reading it as-is");
					plain_size
				} else {
					let synchsafe_size = plain_size.unsynch();
					if synchsafe_size != plain_size
						&& !ends_on_frame_boundary(rest, synchsafe_size)
						&& ends_on_frame_boundary(rest, plain_size)
					{
						log::warn!("ID3v2.4 frame size only lines up as a plain integer, reading it as-is");
						plain_size
					} else {
						synchsafe_size
					}
				};

				(
					&header[..4],
					size,
					FrameFlags::parse_id3v24(BigEndian::read_u16(&header[8..])),
				)
			},
		};

		if size == 0 {
			log::debug!("Encountered a zero length frame, stopping");
			*content = &[];
			return Ok(Self::Eof);
		}

		let available = rest.len();
		if size as usize > available {
			let id = String::from_utf8_lossy(id).into_owned();
			let available = u32::try_from(available).unwrap_or(u32::MAX);

			if parsing_mode == ParsingMode::Strict {
				return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedFrame {
					id,
					declared: size,
					available,
				})
				.into());
			}

			log::warn!(
				"Frame `{id}` declares {size} bytes, but only {available} remain, dropping it"
			);
			warnings.push(Warning::TruncatedFrame {
				id,
				declared: size,
				available,
			});

			*content = &[];
			return Ok(Self::Eof);
		}

		let (frame_content, remaining) = rest.split_at(size as usize);
		*content = remaining;

		let id = match FrameId::from_bytes(id) {
			Ok(id) => id,
			Err(err) => {
				if parsing_mode == ParsingMode::Strict {
					return Err(err);
				}

				log::warn!("Failed to read frame header, skipping: {err}");
				warnings.push(Warning::InvalidFrame {
					id: String::from_utf8_lossy(id).into_owned(),
					reason: err.to_string(),
				});
				return Ok(Self::Skip);
			},
		};

		if !parse_options.read_cover_art && matches!(id.as_str(), "APIC" | "PIC") {
			log::trace!("Skipping cover art");
			return Ok(Self::Skip);
		}

		let header = FrameHeader::new(id, flags);
		match decode_frame(header.clone(), frame_content, version, tag_unsynchronised) {
			Ok(frame) => Ok(Self::Next(frame)),
			Err(err) => {
				log::warn!("Failed to decode frame `{}`: {err}", header.id);

				let warning = Warning::InvalidFrame {
					id: header.id.as_str().to_owned(),
					reason: err.to_string(),
				};

				parse_mode_choice!(
					parsing_mode,
					STRICT: Err(err),
					BESTATTEMPT: {
						warnings.push(warning);
						Ok(Self::Next(Frame::Binary(BinaryFrame::new(
							header,
							frame_content.to_vec(),
						))))
					},
					DEFAULT: {
						warnings.push(warning);
						Ok(Self::Skip)
					}
				)
			},
		}
	}
}

fn decode_frame(
	mut header: FrameHeader,
	content: &[u8],
	version: Id3v2Version,
	tag_unsynchronised: bool,
) -> Result<Frame> {
	let mut content = content;

	// The additional data comes in a different order depending on the version
	match version {
		Id3v2Version::V2 => {},
		Id3v2Version::V3 => {
			if header.flags.compression {
				header.flags.data_length_indicator = Some(take_u32(&mut content)?);
			}

			if let Some(method) = header.flags.encryption.as_mut() {
				*method = take_u8(&mut content)?;
			}

			if let Some(group) = header.flags.grouping_identity.as_mut() {
				*group = take_u8(&mut content)?;
			}
		},
		Id3v2Version::V4 => {
			if let Some(group) = header.flags.grouping_identity.as_mut() {
				*group = take_u8(&mut content)?;
			}

			if let Some(method) = header.flags.encryption.as_mut() {
				*method = take_u8(&mut content)?;
			}

			if header.flags.data_length_indicator.is_some() {
				header.flags.data_length_indicator = Some(take_u32(&mut content)?.unsynch());
			} else if header.flags.compression {
				return Err(Id3v2Error::new(Id3v2ErrorKind::MissingDataLengthIndicator).into());
			}
		},
	}

	// Frames must have at least 1 byte, *after* all of the additional data
	if content.is_empty() {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	}

	// The flags are applied in the order: unsynchronisation -> compression -> encryption
	let mut content = Cow::Borrowed(content);
	if version == Id3v2Version::V4 && (header.flags.unsynchronisation || tag_unsynchronised) {
		let mut owned = content.into_owned();
		remove_unsynchronisation(&mut owned);
		content = Cow::Owned(owned);
	}

	// Nothing further we can do with encrypted frames
	if header.flags.encryption.is_some() {
		log::debug!("Keeping encrypted frame `{}` as binary", header.id);
		return Ok(Frame::Binary(BinaryFrame::new(header, content.into_owned())));
	}

	if header.flags.compression {
		content = Cow::Owned(decompress(&content, header.flags.data_length_indicator)?);
	}

	parse_content(header, &content, version)
}

fn take_u8(content: &mut &[u8]) -> Result<u8> {
	match content.split_first() {
		Some((byte, rest)) => {
			*content = rest;
			Ok(*byte)
		},
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into()),
	}
}

fn take_u32(content: &mut &[u8]) -> Result<u32> {
	match content.split_first_chunk::<4>() {
		Some((bytes, rest)) => {
			*content = rest;
			Ok(u32::from_be_bytes(*bytes))
		},
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into()),
	}
}

#[cfg(feature = "id3v2_compression_support")]
fn decompress(content: &[u8], expected_len: Option<u32>) -> Result<Vec<u8>> {
	use crate::config::global_options;
	use crate::macros::err;
	use crate::util::alloc::VecFallibleCapacity;

	use std::io::Read;

	let limit = global_options().allocation_limit;
	let capacity = expected_len.map_or(content.len(), |len| len as usize);

	let mut decompressed = Vec::try_with_capacity_stable(capacity.min(limit))?;
	flate2::read::ZlibDecoder::new(content)
		.take(limit as u64 + 1)
		.read_to_end(&mut decompressed)
		.map_err(|e| Id3v2Error::new(Id3v2ErrorKind::Decompression(e)))?;

	if decompressed.len() > limit {
		log::warn!("Decompressed frame exceeds the allocation limit of {limit} bytes");
		err!(TooMuchData);
	}

	Ok(decompressed)
}

#[cfg(not(feature = "id3v2_compression_support"))]
fn decompress(_: &[u8], _: Option<u32>) -> Result<Vec<u8>> {
	Err(Id3v2Error::new(Id3v2ErrorKind::CompressedFrameEncountered).into())
}

#[cfg(test)]
mod tests {
	use super::ParsedFrame;
	use crate::config::{ParseOptions, ParsingMode};
	use crate::error::Warning;
	use crate::id3::v2::Frame;
	use crate::id3::v2::header::Id3v2Version;

	fn frame(id: &[u8], size: [u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
		let mut bytes = id.to_vec();
		bytes.extend(size);
		bytes.extend(flags.to_be_bytes());
		bytes.extend(content);
		bytes
	}

	fn sized(id: &[u8], flags: u16, content: &[u8]) -> Vec<u8> {
		let size = u32::try_from(content.len()).unwrap();
		assert!(size < 0x80, "keep test frames synchsafe");
		frame(id, size.to_be_bytes(), flags, content)
	}

	fn read(
		content: &mut &[u8],
		version: Id3v2Version,
		parse_options: ParseOptions,
		warnings: &mut Vec<Warning>,
	) -> ParsedFrame {
		ParsedFrame::read(content, version, false, parse_options, warnings).unwrap()
	}

	#[test_log::test]
	fn padding_ends_iteration() {
		let mut bytes = sized(b"TIT2", 0, b"\x00Title");
		bytes.extend([0; 32]);

		let mut content = &bytes[..];
		let mut warnings = Vec::new();

		let ParsedFrame::Next(Frame::Text(text)) =
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut warnings)
		else {
			panic!("expected a text frame");
		};
		assert_eq!(text.values, vec![String::from("Title")]);

		assert!(matches!(
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut warnings),
			ParsedFrame::Eof
		));
		assert!(warnings.is_empty());
	}

	#[test_log::test]
	fn truncated_frame() {
		let bytes = frame(b"TALB", [0, 0, 0, 100], 0, b"\x00Album");

		let mut content = &bytes[..];
		let mut warnings = Vec::new();
		assert!(matches!(
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut warnings),
			ParsedFrame::Eof
		));
		assert_eq!(
			warnings,
			vec![Warning::TruncatedFrame {
				id: String::from("TALB"),
				declared: 100,
				available: 6,
			}]
		);

		let mut content = &bytes[..];
		assert!(
			ParsedFrame::read(
				&mut content,
				Id3v2Version::V3,
				false,
				ParseOptions::new().parsing_mode(ParsingMode::Strict),
				&mut Vec::new()
			)
			.is_err()
		);
	}

	#[test_log::test]
	fn v2_frame_header() {
		let mut bytes = b"TT2\x00\x00\x06".to_vec();
		bytes.extend(b"\x00Title");

		let mut content = &bytes[..];
		let ParsedFrame::Next(frame) =
			read(&mut content, Id3v2Version::V2, ParseOptions::new(), &mut Vec::new())
		else {
			panic!("expected a frame");
		};
		assert_eq!(frame.id_str(), "TT2");
		assert!(content.is_empty());
	}

	#[test_log::test]
	fn non_synchsafe_v4_size() {
		let mut text = vec![0];
		text.extend([b'a'; 127]);

		let bytes = frame(b"TIT2", [0, 0, 0, 0x80], 0, &text);
		let mut content = &bytes[..];

		let ParsedFrame::Next(Frame::Text(text)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut Vec::new())
		else {
			panic!("expected a text frame");
		};
		assert_eq!(text.values[0].len(), 127);
	}

	#[test_log::test]
	fn plain_v4_size_followed_by_frame() {
		// 0x0100 is also a valid synchsafe integer (128), which would land inside the text
		let mut text = vec![0];
		text.extend([b'a'; 255]);

		let mut bytes = frame(b"TIT2", [0, 0, 1, 0], 0, &text);
		bytes.extend(sized(b"TALB", 0, b"\x00Album"));
		let mut content = &bytes[..];
		let mut warnings = Vec::new();

		let ParsedFrame::Next(Frame::Text(title)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut warnings)
		else {
			panic!("expected a text frame");
		};
		assert_eq!(title.values[0].len(), 255);

		let ParsedFrame::Next(Frame::Text(album)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut warnings)
		else {
			panic!("expected a text frame");
		};
		assert_eq!(album.values, vec![String::from("Album")]);
		assert!(warnings.is_empty());
	}

	#[test_log::test]
	fn synchsafe_v4_size_preferred() {
		// Both 0x0100 (plain) and 128 (synchsafe) land on a frame boundary here
		let mut text = vec![0];
		text.extend([b'a'; 127]);

		let mut bytes = frame(b"TIT2", [0, 0, 1, 0], 0, &text);
		bytes.extend([0; 128]);
		let mut content = &bytes[..];

		let ParsedFrame::Next(Frame::Text(title)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut Vec::new())
		else {
			panic!("expected a text frame");
		};
		assert_eq!(title.values[0].len(), 127);
		assert!(matches!(
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut Vec::new()),
			ParsedFrame::Eof
		));
	}

	#[test_log::test]
	fn v4_frame_unsynchronisation() {
		let bytes = sized(b"TIT2", 0x0002, b"\x00\xFF\x00\xE0");
		let mut content = &bytes[..];

		let ParsedFrame::Next(Frame::Text(text)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut Vec::new())
		else {
			panic!("expected a text frame");
		};
		assert_eq!(text.values, vec![String::from("\u{FF}\u{E0}")]);
		assert!(text.flags().unsynchronisation);
	}

	#[test_log::test]
	fn undecodable_frame() {
		// Invalid text encoding
		let bytes = sized(b"TPE1", 0, b"\x09Artist");

		let mut content = &bytes[..];
		let mut warnings = Vec::new();
		let ParsedFrame::Next(Frame::Binary(binary)) =
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut warnings)
		else {
			panic!("expected a binary frame");
		};
		assert_eq!(binary.data, b"\x09Artist");
		assert_eq!(warnings.len(), 1);
		assert_eq!(warnings[0].name(), "InvalidFrame");

		let mut content = &bytes[..];
		let mut warnings = Vec::new();
		assert!(matches!(
			read(
				&mut content,
				Id3v2Version::V4,
				ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
				&mut warnings
			),
			ParsedFrame::Skip
		));
		assert_eq!(warnings.len(), 1);

		let mut content = &bytes[..];
		assert!(
			ParsedFrame::read(
				&mut content,
				Id3v2Version::V4,
				false,
				ParseOptions::new().parsing_mode(ParsingMode::Strict),
				&mut Vec::new()
			)
			.is_err()
		);
	}

	#[test_log::test]
	fn bad_frame_id_is_skipped() {
		let mut bytes = sized(b"t!t2", 0, b"\x00Nope");
		bytes.extend(sized(b"TIT2", 0, b"\x00Yes"));

		let mut content = &bytes[..];
		let mut warnings = Vec::new();
		assert!(matches!(
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut warnings),
			ParsedFrame::Skip
		));
		assert!(matches!(
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut warnings),
			ParsedFrame::Next(Frame::Text(_))
		));
		assert_eq!(warnings.len(), 1);
	}

	#[test_log::test]
	fn encrypted_frame_is_binary() {
		// Encryption method 0x80
		let bytes = sized(b"TIT2", 0x0040, b"\x80\x12\x34");
		let mut content = &bytes[..];

		let ParsedFrame::Next(Frame::Binary(binary)) =
			read(&mut content, Id3v2Version::V3, ParseOptions::new(), &mut Vec::new())
		else {
			panic!("expected a binary frame");
		};
		assert_eq!(binary.flags().encryption, Some(0x80));
		assert_eq!(binary.data, b"\x12\x34");
	}

	#[test_log::test]
	fn skip_cover_art() {
		let bytes = sized(b"APIC", 0, b"\x00image/png\0\x03\0\x89PNG");
		let mut content = &bytes[..];

		assert!(matches!(
			read(
				&mut content,
				Id3v2Version::V3,
				ParseOptions::new().read_cover_art(false),
				&mut Vec::new()
			),
			ParsedFrame::Skip
		));
		assert!(content.is_empty());
	}

	#[test_log::test]
	#[cfg(feature = "id3v2_compression_support")]
	fn compressed_frames() {
		use std::io::Write;

		let mut encoder =
			flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
		encoder.write_all(b"\x00Compressed").unwrap();
		let compressed = encoder.finish().unwrap();

		// ID3v2.3: 4 byte decompressed size
		let mut v3_content = 11u32.to_be_bytes().to_vec();
		v3_content.extend(&compressed);
		let v3 = sized(b"TIT2", 0x0080, &v3_content);

		// ID3v2.4: compression + data length indicator
		let mut v4_content = vec![0, 0, 0, 11];
		v4_content.extend(&compressed);
		let v4 = sized(b"TIT2", 0x0009, &v4_content);

		for (bytes, version) in [(v3, Id3v2Version::V3), (v4, Id3v2Version::V4)] {
			let mut content = &bytes[..];
			let ParsedFrame::Next(Frame::Text(text)) =
				read(&mut content, version, ParseOptions::new(), &mut Vec::new())
			else {
				panic!("expected a text frame");
			};
			assert_eq!(text.values, vec![String::from("Compressed")]);
			assert_eq!(text.flags().data_length_indicator, Some(11));
		}

		// ID3v2.4 compression requires a data length indicator
		let bytes = sized(b"TIT2", 0x0008, &compressed);
		let mut content = &bytes[..];
		let mut warnings = Vec::new();
		assert!(matches!(
			read(&mut content, Id3v2Version::V4, ParseOptions::new(), &mut warnings),
			ParsedFrame::Next(Frame::Binary(_))
		));
		assert_eq!(warnings.len(), 1);
	}
}
