//! Read audio properties and ID3 metadata from MPEG audio streams.
//!
//! An MPEG audio stream (MP1, MP2, MP3) is a run of self-contained frames, optionally preceded
//! by an ID3v2 tag and followed by an ID3v1 trailer. This crate locates the frames (recovering
//! from garbage and false sync matches), aggregates them into stream statistics, decodes both
//! kinds of tag, and maps the tags onto a single set of common fields.
//!
//! # Examples
//!
//! ## Reading from a path
//!
//! ```rust,no_run
//! # fn main() -> mpegmeta::error::Result<()> {
//! use mpegmeta::config::ParseOptions;
//!
//! let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
//!
//! if let Some(duration) = result.format().duration() {
//! 	println!("Duration: {duration:.3}s");
//! }
//!
//! println!("Title: {:?}", result.common().title);
//! # Ok(()) }
//! ```
//!
//! ## Reading from an existing reader
//!
//! ```rust
//! # fn main() -> mpegmeta::error::Result<()> {
//! use mpegmeta::config::ParseOptions;
//! use std::io::Cursor;
//!
//! // Nothing but silence, and no tags
//! let mut reader = Cursor::new(vec![0; 4096]);
//!
//! // Without a duration, a stream with no frames isn't an error
//! let result = mpegmeta::read_from(&mut reader, ParseOptions::new().compute_duration(false))?;
//! assert!(result.format().properties().is_none());
//! assert_eq!(result.warnings()[0].name(), "NoAudioFrames");
//! # Ok(()) }
//! ```
//!
//! ## Using the concrete file
//!
//! [`MpegFile`](mpeg::MpegFile) keeps the tags in their strongly typed forms.
//!
//! ```rust,no_run
//! # fn main() -> mpegmeta::error::Result<()> {
//! use mpegmeta::config::ParseOptions;
//! use mpegmeta::mpeg::MpegFile;
//! use std::fs::File;
//!
//! let mut file = File::open("foo.mp3")?;
//! let mpeg_file = MpegFile::read_from(&mut file, ParseOptions::new())?;
//!
//! if let Some(id3v2) = mpeg_file.id3v2() {
//! 	for comment in id3v2.comments() {
//! 		println!("{}: {}", comment.description, comment.content);
//! 	}
//! }
//! # Ok(()) }
//! ```
//!
//! # Features
//!
//! * `id3v2_compression_support` (default): Decompress zlib compressed ID3v2 frames. Without it,
//!   compressed frames fail to decode, see [`ParsingMode`](config::ParsingMode) for how that is handled.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod mpeg;
pub mod picture;
pub mod result;
pub mod tag;
mod util;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::mpeg::MpegFile;
use crate::result::ParseResult;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Read a [`ParseResult`] from a reader
///
/// The stream is read from the start, regardless of the reader's current position.
///
/// # Errors
///
/// See [`MpegFile::read_from`]
///
/// # Examples
///
/// ```rust
/// use mpegmeta::config::ParseOptions;
/// use std::io::Cursor;
///
/// # fn main() -> mpegmeta::error::Result<()> {
/// let mut reader = Cursor::new(vec![0; 64]);
///
/// // No frames and no tags
/// assert!(mpegmeta::read_from(&mut reader, ParseOptions::new()).is_err());
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<ParseResult>
where
	R: Read + Seek,
{
	let file = MpegFile::read_from(reader, parse_options)?;
	Ok(ParseResult::from_file(file, parse_options))
}

/// Read a [`ParseResult`] from a path
///
/// # Errors
///
/// * `path` could not be opened
/// * See [`MpegFile::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use mpegmeta::config::ParseOptions;
///
/// # fn main() -> mpegmeta::error::Result<()> {
/// let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<ParseResult>
where
	P: AsRef<Path>,
{
	let file = File::open(path)?;
	read_from(&mut BufReader::new(file), parse_options)
}
