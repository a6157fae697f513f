use mpegmeta::config::ParseOptions;
use mpegmeta::result::ParseResult;

use std::io::{Cursor, Seek as _, Write as _};

// MPEG-1 Layer III bitrates (kbps), indexed by the 4 bit bitrate index
const BITRATES: [u32; 15] = [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320];

/// An MPEG-1 Layer III, 44.1 kHz, joint stereo frame with a zeroed body
pub fn frame(bitrate_index: u8, padding: bool) -> Vec<u8> {
	mpeg1_frame(0xFB, bitrate_index, BITRATES[usize::from(bitrate_index)], padding)
}

/// An MPEG-1 Layer II, 44.1 kHz, joint stereo, 128 kbps frame with a zeroed body
pub fn layer2_frame(padding: bool) -> Vec<u8> {
	// Layer II has its own bitrate table, 128 kbps is index 8
	mpeg1_frame(0xFD, 8, 128, padding)
}

// Layer II and III share the same frame length formula for MPEG-1
fn mpeg1_frame(byte1: u8, bitrate_index: u8, bitrate: u32, padding: bool) -> Vec<u8> {
	let len = (144 * bitrate * 1000 / 44100) as usize + usize::from(padding);

	let mut frame = vec![0; len];
	frame[..4].copy_from_slice(&[
		0xFF,
		byte1,
		(bitrate_index << 4) | (u8::from(padding) << 1),
		0x64,
	]);

	frame
}

/// `count` 128 kbps frames, only the first unpadded
pub fn cbr_frames(count: usize) -> Vec<u8> {
	let mut stream = frame(9, false);
	for _ in 1..count {
		stream.extend(frame(9, true));
	}

	stream
}

/// Encode `value` as a 4 byte synchsafe integer
pub fn synchsafe(value: u32) -> [u8; 4] {
	[
		((value >> 21) & 0x7F) as u8,
		((value >> 14) & 0x7F) as u8,
		((value >> 7) & 0x7F) as u8,
		(value & 0x7F) as u8,
	]
}

/// An ID3v2.3/4 frame
pub fn id3v2_frame(major: u8, id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	let size = content.len() as u32;

	let mut frame = id.to_vec();
	if major == 4 {
		frame.extend(synchsafe(size));
	} else {
		frame.extend(size.to_be_bytes());
	}
	frame.extend([0, 0]);
	frame.extend_from_slice(content);

	frame
}

/// A Latin-1 text frame with a single value
pub fn text_frame(major: u8, id: &[u8; 4], value: &str) -> Vec<u8> {
	let mut content = vec![0];
	content.extend_from_slice(value.as_bytes());
	id3v2_frame(major, id, &content)
}

/// An ID3v2 tag holding `frames`, followed by `padding` zeroes
pub fn id3v2_tag(major: u8, frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
	let body_len = frames.iter().map(Vec::len).sum::<usize>() + padding;

	let mut tag = vec![b'I', b'D', b'3', major, 0, 0];
	tag.extend(synchsafe(body_len as u32));
	for frame in frames {
		tag.extend_from_slice(frame);
	}
	tag.resize(tag.len() + padding, 0);

	tag
}

/// An ID3v1 trailer, written as ID3v1.1 when `track` is non-zero
pub fn id3v1_tag(title: &str, artist: &str, year: &str, comment: &str, track: u8, genre: u8) -> Vec<u8> {
	fn field(tag: &mut Vec<u8>, value: &str, len: usize) {
		let start = tag.len();
		tag.extend_from_slice(value.as_bytes());
		tag.resize(start + len, 0);
	}

	let mut tag = b"TAG".to_vec();
	field(&mut tag, title, 30);
	field(&mut tag, artist, 30);
	// Album
	field(&mut tag, "", 30);
	field(&mut tag, year, 4);

	if track == 0 {
		field(&mut tag, comment, 30);
	} else {
		field(&mut tag, comment, 28);
		tag.extend([0, track]);
	}

	tag.push(genre);
	assert_eq!(tag.len(), 128);

	tag
}

/// Parse an in-memory stream
pub fn read(stream: Vec<u8>, parse_options: ParseOptions) -> ParseResult {
	mpegmeta::read_from(&mut Cursor::new(stream), parse_options).unwrap()
}

/// Write `stream` to a named temporary file
pub fn temp_file(stream: &[u8]) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(stream).unwrap();
	file.rewind().unwrap();

	file
}
