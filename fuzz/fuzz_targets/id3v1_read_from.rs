#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mpegmeta::config::ParseOptions;
use mpegmeta::mpeg::MpegFile;

fuzz_target!(|data: [u8; 125]| {
	let mut bytes = b"TAG".to_vec();
	bytes.extend(data);

	let _ = MpegFile::read_from(
		&mut Cursor::new(bytes),
		ParseOptions::new().compute_duration(false),
	);
});
