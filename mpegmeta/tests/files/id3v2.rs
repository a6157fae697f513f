use crate::util::{
	cbr_frames, id3v1_tag, id3v2_frame, id3v2_tag, read, synchsafe, temp_file, text_frame,
};

use mpegmeta::config::{ParseOptions, ParsingMode};
use mpegmeta::error::{ErrorKind, Id3v2ErrorKind, Region, Warning};
use mpegmeta::id3::v2::Id3v2Version;
use mpegmeta::tag::{ItemValue, TagType};

use std::io::Cursor;

#[test_log::test]
fn comment_frame() {
	let mut comm = vec![0];
	comm.extend_from_slice(b"eng");
	comm.push(0);
	comm.extend_from_slice(b"Jive");

	let mut stream = id3v2_tag(3, &[id3v2_frame(3, b"COMM", &comm)], 64);
	stream.extend(cbr_frames(2));

	let result = read(stream, ParseOptions::new());
	let tag = result.native_tag(TagType::Id3v2(Id3v2Version::V3)).unwrap();

	let comments = tag
		.get("COMM")
		.map(|value| value.language_text().unwrap())
		.collect::<Vec<_>>();
	assert_eq!(comments.len(), 1);
	assert_eq!(comments[0].language_str(), "eng");
	assert_eq!(comments[0].description, "");
	assert_eq!(comments[0].text, "Jive");

	assert_eq!(result.common().comment, ["Jive"]);
}

#[test_log::test]
fn synchsafe_sizes() {
	// Large enough that every size needs more than 7 bits
	let title = "a".repeat(300);
	let stream = id3v2_tag(4, &[text_frame(4, b"TIT2", &title), text_frame(4, b"TPE1", "Foo artist")], 200);

	let result = read(stream, ParseOptions::new());
	assert!(result.warnings().iter().all(|w| *w == Warning::NoAudioFrames));

	let common = result.common();
	assert_eq!(common.title.as_deref(), Some(title.as_str()));
	assert_eq!(common.artists, ["Foo artist"]);
}

#[test_log::test]
fn v3_frame_sizes_are_plain() {
	// 0x80 is not a valid synchsafe byte
	let value = "b".repeat(0x7F);
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TALB", &value)], 0);
	stream.extend(cbr_frames(2));

	let result = read(stream, ParseOptions::new());
	assert_eq!(result.common().album.as_deref(), Some(value.as_str()));
}

fn truncated_tag() -> Vec<u8> {
	let mut frames = vec![text_frame(3, b"TIT2", "Foo title")];

	// Declares 100 bytes, but only 10 follow
	let mut truncated = b"TALB".to_vec();
	truncated.extend(100_u32.to_be_bytes());
	truncated.extend([0, 0]);
	truncated.extend([b'x'; 10]);
	frames.push(truncated);

	let mut stream = id3v2_tag(3, &frames, 0);
	stream.extend(cbr_frames(2));
	stream
}

#[test_log::test]
fn truncated_frame() {
	let result = read(truncated_tag(), ParseOptions::new());

	assert_eq!(
		result.warnings(),
		[Warning::TruncatedFrame {
			id: String::from("TALB"),
			declared: 100,
			available: 10,
		}]
	);

	// Everything before the bad frame is kept, and the audio is unaffected
	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert!(result.common().album.is_none());
	assert_eq!(result.format().properties().unwrap().total_frames(), 2);
}

#[test_log::test]
fn truncated_frame_strict() {
	let err = mpegmeta::read_from(
		&mut Cursor::new(truncated_tag()),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();

	let ErrorKind::Id3v2(id3v2_err) = err.kind() else {
		panic!("unexpected error: {err:?}");
	};
	assert!(matches!(
		id3v2_err.kind(),
		Id3v2ErrorKind::TruncatedFrame { declared: 100, .. }
	));
}

#[test_log::test]
fn tag_size_past_end_of_stream() {
	let mut stream = vec![b'I', b'D', b'3', 4, 0, 0];
	stream.extend(synchsafe(1000));
	stream.extend(text_frame(4, b"TIT2", "Foo title"));

	let result = read(stream, ParseOptions::new());

	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert!(
		result
			.warnings()
			.iter()
			.any(|w| matches!(w, Warning::SourceExhausted(_)))
	);
}

#[test_log::test]
fn oversized_tag_before_audio() {
	// ~256 MiB declared, with the audio and an ID3v1 trailer directly after the first frame
	let mut stream = b"ID3\x03\x00\x00\x7F\x7F\x7F\x7F".to_vec();
	stream.extend(text_frame(3, b"TIT2", "Foo title"));
	stream.extend(cbr_frames(4));
	stream.extend(id3v1_tag("Bar title", "Bar artist", "1984", "", 1, 17));

	let result = mpegmeta::read_from(&mut Cursor::new(stream), ParseOptions::new()).unwrap();
	let format = result.format();

	assert_eq!(format.properties().unwrap().total_frames(), 4);
	assert_eq!(format.bitrate(), Some(128_000));

	let tag_types = format
		.tag_types()
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>();
	assert_eq!(tag_types, ["ID3v2.3", "ID3v1.1"]);

	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert_eq!(result.common().artists, ["Bar artist"]);
	assert!(result.warnings().contains(&Warning::SourceExhausted(Region::Id3v2)));
}

#[test_log::test]
fn native_tags_disabled() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TIT2", "Foo title")], 0);
	stream.extend(cbr_frames(2));

	let result = read(stream, ParseOptions::new().decode_native_tags(false));

	assert!(result.native().is_empty());
	assert_eq!(result.format().tag_types(), [TagType::Id3v2(Id3v2Version::V3)]);
	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
}

#[test_log::test]
fn multiple_values() {
	let stream = id3v2_tag(4, &[text_frame(4, b"TPE1", "Foo\0Bar"), text_frame(4, b"TCON", "17\0Jazz")], 0);

	let result = read(stream, ParseOptions::new());

	let tag = result.native_tag(TagType::Id3v2(Id3v2Version::V4)).unwrap();
	let artists = tag.get("TPE1").filter_map(ItemValue::text).collect::<Vec<_>>();
	assert_eq!(artists, ["Foo", "Bar"]);

	let common = result.common();
	assert_eq!(common.artists, ["Foo", "Bar"]);
	assert_eq!(common.genre, ["Rock", "Jazz"]);
}

#[test_log::test]
fn read_from_path() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TIT2", "Foo title")], 0);
	stream.extend(cbr_frames(20));

	let file = temp_file(&stream);
	let result = mpegmeta::read_from_path(file.path(), ParseOptions::new()).unwrap();

	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert_eq!(result.format().bitrate(), Some(128_000));
}
