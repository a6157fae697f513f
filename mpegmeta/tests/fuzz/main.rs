#![allow(missing_docs)]

use mpegmeta::config::ParseOptions;
use mpegmeta::error::Result;
use mpegmeta::result::ParseResult;

use std::io::Cursor;
use std::thread;
use std::time::Instant;

mod id3v2;
mod mpegfile_read_from;

/// Parse `data` on another thread, failing if it takes longer than 3 seconds or panics
pub fn bounded_test(data: Vec<u8>, parse_options: ParseOptions) {
	let _ = bounded_read(data, parse_options);
}

/// [`bounded_test`], keeping the result of the parse
#[allow(clippy::missing_panics_doc)]
pub fn bounded_read(data: Vec<u8>, parse_options: ParseOptions) -> Result<ParseResult> {
	let instant = Instant::now();
	let thread = thread::spawn(move || mpegmeta::read_from(&mut Cursor::new(data), parse_options));

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			return thread.join().unwrap();
		}
	}

	panic!("Failed to run test");
}
