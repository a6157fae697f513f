use crate::util::{cbr_frames, id3v1_tag, read};

use mpegmeta::config::ParseOptions;
use mpegmeta::id3::v1::Id3v1Version;
use mpegmeta::tag::TagType;

#[test_log::test]
fn v1() {
	let mut stream = cbr_frames(3);
	stream.extend(id3v1_tag(
		"Foo title",
		"Bar artist",
		"2003",
		"A comment that spans all 30 by",
		0,
		4,
	));

	let result = read(stream, ParseOptions::new());
	assert_eq!(result.format().tag_types(), [TagType::Id3v1(Id3v1Version::V1)]);

	let tag = result.native_tag(TagType::Id3v1(Id3v1Version::V1)).unwrap();
	assert_eq!(tag.get_string("title"), Some("Foo title"));
	assert_eq!(tag.get_string("genre"), Some("Disco"));
	assert!(tag.get_string("track").is_none());

	let common = result.common();
	assert_eq!(common.comment, ["A comment that spans all 30 by"]);
	assert_eq!(common.year, Some(2003));
	assert!(common.track.is_empty());
	assert_eq!(common.genre, ["Disco"]);

	// The trailer is not audio
	let properties = result.format().properties().unwrap();
	assert_eq!(properties.total_frames(), 3);
}

#[test_log::test]
fn v1_1() {
	let mut stream = cbr_frames(3);
	stream.extend(id3v1_tag("Foo title", "", "", "Short comment", 12, 255));

	let result = read(stream, ParseOptions::new());
	assert_eq!(result.format().tag_types(), [TagType::Id3v1(Id3v1Version::V1_1)]);

	let common = result.common();
	assert_eq!(common.track.no, Some(12));
	assert_eq!(common.track.of, None);
	assert_eq!(common.comment, ["Short comment"]);

	// Empty fields and the "no genre" index are absent
	assert!(common.artists.is_empty());
	assert!(common.year.is_none());
	assert!(common.genre.is_empty());
}

#[test_log::test]
fn only_a_trailer() {
	let stream = id3v1_tag("Foo title", "", "", "", 0, 255);

	let result = read(stream, ParseOptions::new());
	assert!(result.format().properties().is_none());
	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
}
