use crate::util::{cbr_frames, frame, id3v1_tag, id3v2_tag, layer2_frame, read, text_frame};

use mpegmeta::config::ParseOptions;
use mpegmeta::error::{ErrorKind, Warning};
use mpegmeta::mpeg::{BitrateMode, ChannelMode, Layer, MpegVersion, ScanExtent};

use std::io::Cursor;

fn duration_of(frames: u32) -> f64 {
	f64::from(frames * 1152) / 44100.0
}

#[test_log::test]
fn cbr_with_both_tags() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TIT2", "Foo title")], 32);
	stream.extend(cbr_frames(20));
	stream.extend(id3v1_tag("Bar title", "Bar artist", "1984", "", 1, 17));

	let result = read(stream, ParseOptions::new());
	let format = result.format();

	assert_eq!(format.bitrate(), Some(128_000));
	assert_eq!(format.sample_rate(), Some(44100));
	assert_eq!(format.number_of_channels(), Some(2));
	assert_eq!(format.bitrate_mode(), Some(BitrateMode::Cbr));
	assert_eq!(format.duration(), Some(duration_of(20)));

	let tag_types = format
		.tag_types()
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>();
	assert_eq!(tag_types, ["ID3v2.3", "ID3v1.1"]);

	let properties = format.properties().unwrap();
	assert_eq!(properties.version(), MpegVersion::V1);
	assert_eq!(properties.layer(), Layer::Layer3);
	assert_eq!(properties.channel_mode(), ChannelMode::JointStereo);
	assert_eq!(properties.total_frames(), 20);
	assert_eq!(properties.unpadded_frames(), 1);
	assert_eq!(properties.padded_frames(), 19);
	assert_eq!(properties.total_audio_bytes(), 417 + 19 * 418);
	assert_eq!(properties.scan_extent(), ScanExtent::Full);
	assert!(!properties.is_malformed());

	// ID3v2 wins, ID3v1 fills in the rest
	let common = result.common();
	assert_eq!(common.title.as_deref(), Some("Foo title"));
	assert_eq!(common.artists, ["Bar artist"]);
	assert_eq!(common.year, Some(1984));
	assert_eq!(common.track.no, Some(1));
	assert_eq!(common.genre, ["Rock"]);

	assert!(result.warnings().is_empty());
}

#[test_log::test]
fn layer2_cbr_with_both_tags() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TIT2", "Foo title")], 0);
	stream.extend(layer2_frame(false));
	for _ in 1..20 {
		stream.extend(layer2_frame(true));
	}
	stream.extend(id3v1_tag("Bar title", "Bar artist", "1984", "", 1, 17));

	let result = read(stream, ParseOptions::new());
	let format = result.format();

	assert_eq!(format.bitrate(), Some(128_000));
	assert_eq!(format.sample_rate(), Some(44100));
	assert_eq!(format.bitrate_mode(), Some(BitrateMode::Cbr));
	// Layer II frames hold 1152 samples, same as MPEG-1 Layer III
	assert_eq!(format.duration(), Some(duration_of(20)));

	let tag_types = format
		.tag_types()
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>();
	assert_eq!(tag_types, ["ID3v2.3", "ID3v1.1"]);

	let properties = format.properties().unwrap();
	assert_eq!(properties.layer(), Layer::Layer2);
	assert_eq!(properties.total_frames(), 20);
	assert_eq!(properties.total_audio_bytes(), 417 + 19 * 418);

	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert!(result.warnings().is_empty());
}

#[test_log::test]
fn outlier_frame_is_vbr() {
	let mut stream = frame(12, false);
	for _ in 0..10 {
		stream.extend(frame(14, false));
	}

	let result = read(stream, ParseOptions::new());
	let format = result.format();

	assert_eq!(format.bitrate_mode(), Some(BitrateMode::Vbr));
	assert_eq!(format.bitrate(), Some(320_000));
	assert_eq!(format.number_of_channels(), Some(2));

	let properties = format.properties().unwrap();
	assert_eq!(properties.total_frames(), 11);
	assert_eq!(properties.total_audio_bytes(), 731 + 10 * 1044);

	let average = properties.average_bitrate();
	assert!(average > 224_000 && average < 320_000, "{average}");
}

#[test_log::test]
fn leading_junk_is_skipped() {
	let mut stream = vec![0x42; 1000];
	stream.extend(cbr_frames(8));

	let result = read(stream, ParseOptions::new());
	let properties = result.format().properties().unwrap();

	assert_eq!(properties.total_frames(), 8);
	assert_eq!(result.format().duration(), Some(duration_of(8)));
}

#[test_log::test]
fn no_frames_and_no_tags() {
	let err = mpegmeta::read_from(&mut Cursor::new(vec![0; 4096]), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoAudioFrames));

	// Only the first frame is needed without a duration, so nothing is fatal
	let result = read(vec![0; 4096], ParseOptions::new().compute_duration(false));
	assert!(result.format().properties().is_none());
	assert_eq!(result.warnings(), [Warning::NoAudioFrames]);
}

#[test_log::test]
fn tag_without_frames() {
	let stream = id3v2_tag(4, &[text_frame(4, b"TIT2", "Foo title")], 0);

	let result = read(stream, ParseOptions::new());
	assert!(result.format().properties().is_none());
	assert_eq!(result.format().bitrate(), None);
	assert_eq!(result.common().title.as_deref(), Some("Foo title"));
	assert_eq!(result.warnings(), [Warning::NoAudioFrames]);
}

#[test_log::test]
fn reading_is_repeatable() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TPE1", "Foo artist")], 0);
	stream.extend(cbr_frames(5));

	let mut reader = Cursor::new(stream);
	let first = mpegmeta::read_from(&mut reader, ParseOptions::new()).unwrap();

	// The reader is rewound internally
	let second = mpegmeta::read_from(&mut reader, ParseOptions::new()).unwrap();
	assert_eq!(first, second);
}

#[test_log::test]
fn probe_frame_limit() {
	let stream = cbr_frames(100);

	let result = read(stream, ParseOptions::new().probe_frame_limit(Some(10)));
	let properties = result.format().properties().unwrap();

	assert_eq!(properties.scan_extent(), ScanExtent::Truncated);
	assert_eq!(properties.total_frames(), 10);

	// Estimated from the average frame size of the scanned prefix
	let duration = properties.duration().unwrap();
	assert!((duration - duration_of(100)).abs() < 0.05, "{duration}");
}

#[test_log::test]
fn first_frame_only() {
	let stream = cbr_frames(20);

	let result = read(stream, ParseOptions::new().compute_duration(false));
	let properties = result.format().properties().unwrap();

	assert_eq!(properties.scan_extent(), ScanExtent::FirstFrame);
	assert_eq!(properties.total_frames(), 1);
	assert_eq!(properties.sample_rate(), 44100);
	assert_eq!(properties.bitrate(), 128_000);

	// No VBR header to take the frame count from
	assert_eq!(properties.duration(), None);
}

#[test_log::test]
fn free_format() {
	let mut free_format_frame = vec![0; 600];
	free_format_frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x00, 0x64]);
	let stream = free_format_frame.repeat(5);

	let result = read(stream, ParseOptions::new());
	let properties = result.format().properties().unwrap();

	assert_eq!(properties.total_frames(), 5);
	assert_eq!(properties.total_audio_bytes(), 3000);
	assert_eq!(properties.bitrate_mode(), BitrateMode::Cbr);
	// 3000 bytes over 5 * 1152 samples at 44.1 kHz
	assert_eq!(properties.bitrate(), 183_750);
}

#[test_log::test]
fn sample_rate_change() {
	let mut stream = cbr_frames(3);
	for _ in 0..3 {
		// 128 kbps at 48 kHz is 384 bytes
		let mut frame = vec![0; 384];
		frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x94, 0x64]);
		stream.extend(frame);
	}

	let result = read(stream, ParseOptions::new());
	let properties = result.format().properties().unwrap();

	assert_eq!(properties.total_frames(), 6);
	assert_eq!(properties.sample_rate(), 44100);
	assert!(properties.is_malformed());

	let malformed = result
		.warnings()
		.iter()
		.filter(|w| matches!(w, Warning::MalformedStream(_)))
		.count();
	assert_eq!(malformed, 1);
}

#[test_log::test]
fn tags_are_skipped() {
	let mut stream = id3v2_tag(3, &[text_frame(3, b"TIT2", "Foo title")], 0);
	stream.extend(cbr_frames(4));
	stream.extend(id3v1_tag("Bar title", "", "", "", 0, 255));

	let result = read(stream, ParseOptions::new().read_tags(false));

	assert!(result.format().tag_types().is_empty());
	assert!(result.native().is_empty());
	assert!(result.common().title.is_none());

	// The tag regions are still excluded from the audio
	let properties = result.format().properties().unwrap();
	assert_eq!(properties.total_frames(), 4);
	assert_eq!(properties.total_audio_bytes(), 417 + 3 * 418);
}
