#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mpegmeta::config::ParseOptions;
use mpegmeta::mpeg::MpegFile;

// The input is the tag body, behind a valid ID3v2.4 header
fuzz_target!(|data: Vec<u8>| {
	let size = (data.len() as u32).min(0x0FFF_FFFF);
	let synchsafe = [
		((size >> 21) & 0x7F) as u8,
		((size >> 14) & 0x7F) as u8,
		((size >> 7) & 0x7F) as u8,
		(size & 0x7F) as u8,
	];

	let mut bytes = b"ID3\x04\x00\x00".to_vec();
	bytes.extend(synchsafe);
	bytes.extend(data);

	let _ = MpegFile::read_from(
		&mut Cursor::new(bytes),
		ParseOptions::new().compute_duration(false),
	);
});
