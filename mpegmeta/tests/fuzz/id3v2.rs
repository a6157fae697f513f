use crate::bounded_test;
use mpegmeta::config::{ParseOptions, ParsingMode};

#[test_log::test]
fn huge_tag_size() {
	// 256 MiB, over the allocation limit
	let mut data = vec![b'I', b'D', b'3', 4, 0, 0, 0x7F, 0x7F, 0x7F, 0x7F];
	data.extend_from_slice(&[0; 64]);

	bounded_test(data, ParseOptions::new());
}

#[test_log::test]
fn many_empty_tags() {
	let data = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0].repeat(5_000);
	bounded_test(data, ParseOptions::new());
}

#[test_log::test]
fn frames_with_max_size() {
	let mut body = Vec::new();
	for _ in 0..1000 {
		body.extend_from_slice(b"TIT2");
		body.extend_from_slice(&[0xFF; 4]);
		body.extend_from_slice(&[0, 0, 0]);
	}

	let size = body.len() as u32;
	let mut data = vec![b'I', b'D', b'3', 4, 0, 0];
	data.extend_from_slice(&[
		((size >> 21) & 0x7F) as u8,
		((size >> 14) & 0x7F) as u8,
		((size >> 7) & 0x7F) as u8,
		(size & 0x7F) as u8,
	]);
	data.extend(body);

	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		bounded_test(data.clone(), ParseOptions::new().parsing_mode(parsing_mode));
	}
}
