//! Contains the errors that can arise within mpegmeta
//!
//! The primary error is [`MetaError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Not every problem in a file is an error. Conditions that only affect a single frame or
//! a single tag container are recovered from locally, and reported as [`Warning`]s alongside
//! the parsed result.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MetaError>`
pub type Result<T> = std::result::Result<T, MetaError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Stream related errors
	/// No valid MPEG frame could be found, and there was nothing else to report
	///
	/// This only surfaces as an error when duration computation was requested and the input
	/// contains no tag containers either. Otherwise, it is reported as [`Warning::NoAudioFrames`].
	NoAudioFrames,

	// File data related errors
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
	TooMuchData,
	/// Errors that occur while decoding a file
	FileDecoding(FileDecodingError),

	// Tag related errors
	/// Arises when a tag is expected (Ex. found "ID3" at the start of a stream), but isn't found
	FakeTag,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while reading ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when an invalid ID3v2 version is found
	BadId3v2Version(u8, u8),
	/// Arises when a compressed ID3v2.2 tag is encountered
	///
	/// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
	/// As such, it is recommended to ignore the tag entirely.
	V2Compression,
	/// Arises when an extended header has an invalid size
	BadExtendedHeaderSize,

	// Frame
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	BadFrameId(Vec<u8>),
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// Arises when a frame claims more bytes than its container has left
	TruncatedFrame {
		/// The ID of the offending frame
		id: String,
		/// The size written in the frame header
		declared: u32,
		/// The number of bytes remaining in the container
		available: u32,
	},
	/// Arises when reading a compressed ID3v2.4 frame with no data length indicator
	MissingDataLengthIndicator,
	/// Arises when a text encoding other than Latin-1 or UTF-16 appear in an ID3v2.2 tag
	V2InvalidTextEncoding,
	/// Arises when an invalid text encoding byte is found
	BadTextEncoding(u8),

	// Compression
	#[cfg(feature = "id3v2_compression_support")]
	/// Arises when a compressed frame is unable to be decompressed
	Decompression(std::io::Error),
	#[cfg(not(feature = "id3v2_compression_support"))]
	/// Arises when a compressed frame is encountered, but support is disabled
	CompressedFrameEncountered,
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::BadId3v2Version(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			Self::V2Compression => write!(f, "Encountered a compressed ID3v2.2 tag"),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},

			// Frame
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::TruncatedFrame {
				id,
				declared,
				available,
			} => write!(
				f,
				"Frame `{id}` declares {declared} bytes, but only {available} remain in the tag"
			),
			Self::MissingDataLengthIndicator => write!(
				f,
				"Encountered a compressed frame without a data length indicator"
			),
			Self::V2InvalidTextEncoding => {
				write!(f, "ID3v2.2 only supports Latin-1 and UTF-16 encodings")
			},
			Self::BadTextEncoding(byte) => write!(f, "Found an invalid text encoding: {byte}"),

			// Compression
			#[cfg(feature = "id3v2_compression_support")]
			Self::Decompression(err) => write!(f, "Failed to decompress frame: {err}"),
			#[cfg(not(feature = "id3v2_compression_support"))]
			Self::CompressedFrameEncountered => write!(
				f,
				"Encountered a compressed ID3v2 frame, support is disabled"
			),
		}
	}
}

/// An error that arises while reading an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// The part of the stream an error or warning originated from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Region {
	/// The MPEG audio frames
	Mpeg,
	/// An ID3v1 trailer
	Id3v1,
	/// An ID3v2 container
	Id3v2,
}

impl Display for Region {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Region::Mpeg => f.write_str("MPEG"),
			Region::Id3v1 => f.write_str("ID3v1"),
			Region::Id3v2 => f.write_str("ID3v2"),
		}
	}
}

/// An error that arises while decoding a file
pub struct FileDecodingError {
	region: Option<Region>,
	description: &'static str,
}

impl FileDecodingError {
	/// Create a `FileDecodingError` from a [`Region`] and description
	#[must_use]
	pub const fn new(region: Region, description: &'static str) -> Self {
		Self {
			region: Some(region),
			description,
		}
	}

	/// Create a `FileDecodingError` without binding it to a [`Region`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			region: None,
			description,
		}
	}

	/// Returns the associated [`Region`], if one exists
	pub fn region(&self) -> Option<Region> {
		self.region
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(region) = self.region {
			write!(f, "{:?}: {:?}", region, self.description)
		} else {
			write!(f, "{:?}", self.description)
		}
	}
}

impl Display for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(region) = self.region {
			write!(f, "{}: {}", region, self.description)
		} else {
			write!(f, "{}", self.description)
		}
	}
}

/// Errors that could occur within mpegmeta
pub struct MetaError {
	pub(crate) kind: ErrorKind,
}

impl MetaError {
	/// Create a `MetaError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::error::{ErrorKind, MetaError};
	///
	/// let no_frames = MetaError::new(ErrorKind::NoAudioFrames);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::error::{ErrorKind, MetaError};
	///
	/// let no_frames = MetaError::new(ErrorKind::NoAudioFrames);
	/// if let ErrorKind::NoAudioFrames = no_frames.kind() {
	/// 	println!("Not an MPEG stream?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for MetaError {}

impl Debug for MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for MetaError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<FileDecodingError> for MetaError {
	fn from(input: FileDecodingError) -> Self {
		Self {
			kind: ErrorKind::FileDecoding(input),
		}
	}
}

impl From<std::io::Error> for MetaError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for MetaError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::NoAudioFrames => {
				write!(f, "NoAudioFrames: no valid MPEG frame was found in the stream")
			},
			ErrorKind::FakeTag => write!(f, "Reading: Expected a tag, found invalid data"),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),

			// Files
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::FileDecoding(ref file_decode_err) => write!(f, "{file_decode_err}"),
		}
	}
}

/// A mid-stream change in a property that is expected to stay constant
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamChange {
	/// The sample rate of a frame differs from the first frame
	SampleRate {
		/// The sample rate of the first frame, which is kept
		expected: u32,
		/// The sample rate that was found
		found: u32,
	},
	/// The channel count of a frame differs from the first frame
	ChannelCount {
		/// The channel count of the first frame, which is kept
		expected: u8,
		/// The channel count that was found
		found: u8,
	},
}

/// A recoverable problem encountered while parsing
///
/// Warnings never abort a parse. The affected unit (a frame, a tag container) is either
/// skipped or kept with the first-seen values, and the rest of the stream is still read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
	/// An ID3v2 frame declared more bytes than its container had left, and was dropped
	TruncatedFrame {
		/// The ID of the dropped frame
		id: String,
		/// The size written in the frame header
		declared: u32,
		/// The number of bytes remaining in the container
		available: u32,
	},
	/// The sample rate or channel count changed mid-stream
	///
	/// The values of the first frame are kept. This is only reported once per stream.
	MalformedStream(StreamChange),
	/// The source ended before a fixed-size structure was complete
	///
	/// The affected container is treated as absent (or, for an ID3v2 body, parsed as far as it goes).
	SourceExhausted(Region),
	/// No MPEG frame was found, so there are no stream statistics
	NoAudioFrames,
	/// An ID3v2 frame could not be decoded
	///
	/// Depending on the [`ParsingMode`](crate::config::ParsingMode), the frame is either kept as
	/// opaque binary or discarded.
	InvalidFrame {
		/// The ID of the frame
		id: String,
		/// Why decoding failed
		reason: String,
	},
	/// A tag container could not be read, and was discarded
	///
	/// Parsing continues after the container header, so audio and any other tags are still found.
	InvalidTag {
		/// The kind of container
		region: Region,
		/// Why reading failed
		reason: String,
	},
}

impl Warning {
	/// The stable condition name of the warning
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::error::Warning;
	///
	/// assert_eq!(Warning::NoAudioFrames.name(), "NoAudioFrames");
	/// ```
	pub fn name(&self) -> &'static str {
		match self {
			Warning::TruncatedFrame { .. } => "TruncatedFrame",
			Warning::MalformedStream(_) => "MalformedStream",
			Warning::SourceExhausted(_) => "SourceExhausted",
			Warning::NoAudioFrames => "NoAudioFrames",
			Warning::InvalidFrame { .. } => "InvalidFrame",
			Warning::InvalidTag { .. } => "InvalidTag",
		}
	}
}

impl Display for Warning {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: ", self.name())?;
		match self {
			Warning::TruncatedFrame {
				id,
				declared,
				available,
			} => write!(
				f,
				"frame `{id}` declares {declared} bytes, but only {available} remain in the tag"
			),
			Warning::MalformedStream(StreamChange::SampleRate { expected, found }) => write!(
				f,
				"sample rate changed from {expected} Hz to {found} Hz, keeping {expected} Hz"
			),
			Warning::MalformedStream(StreamChange::ChannelCount { expected, found }) => write!(
				f,
				"channel count changed from {expected} to {found}, keeping {expected}"
			),
			Warning::SourceExhausted(region) => {
				write!(f, "the source ended inside the {region} region")
			},
			Warning::NoAudioFrames => write!(f, "no valid MPEG frame was found"),
			Warning::InvalidFrame { id, reason } => write!(f, "frame `{id}`: {reason}"),
			Warning::InvalidTag { region, reason } => {
				write!(f, "ignoring the {region} tag: {reason}")
			},
		}
	}
}
