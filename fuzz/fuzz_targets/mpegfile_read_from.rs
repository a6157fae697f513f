#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mpegmeta::config::ParseOptions;
use mpegmeta::mpeg::MpegFile;

fuzz_target!(|data: Vec<u8>| {
	let _ = MpegFile::read_from(&mut Cursor::new(data), ParseOptions::new());
});
