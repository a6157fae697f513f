use crate::{bounded_read, bounded_test};
use mpegmeta::config::ParseOptions;
use mpegmeta::error::ErrorKind;
use mpegmeta::mpeg::MpegFile;

use std::io::Cursor;

#[test_log::test]
fn zeros() {
	let err = bounded_read(vec![0; 5 * 1024 * 1024], ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoAudioFrames), "{err:?}");
}

#[test_log::test]
fn sync_bytes() {
	// Every offset is a frame sync candidate, none with a valid header
	bounded_test(vec![0xFF; 1024 * 1024], ParseOptions::new());
}

#[test_log::test]
fn unconfirmed_headers() {
	// Valid headers that are never followed by another frame
	let mut data = Vec::with_capacity(1024 * 1024);
	while data.len() < 1024 * 1024 {
		data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
		data.extend_from_slice(&[0x11; 60]);
	}

	bounded_test(data, ParseOptions::new());
}

#[test_log::test]
fn free_format_without_successor() {
	let mut data = Vec::with_capacity(512 * 1024);
	while data.len() < 512 * 1024 {
		data.extend_from_slice(&[0xFF, 0xFB, 0x00, 0x64]);
		data.extend_from_slice(&[0x22; 9000]);
	}

	bounded_test(data, ParseOptions::new());
}

#[test_log::test]
fn truncated_header() {
	for len in 0..4 {
		let data = &[0xFF, 0xFB, 0x90, 0x64][..len];
		let _ = MpegFile::read_from(&mut Cursor::new(data), ParseOptions::new());
	}
}
