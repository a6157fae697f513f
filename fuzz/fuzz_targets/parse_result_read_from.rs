#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mpegmeta::config::{ParseOptions, ParsingMode};

fuzz_target!(|data: Vec<u8>| {
	let _ = mpegmeta::read_from(
		&mut Cursor::new(data),
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	);
});
