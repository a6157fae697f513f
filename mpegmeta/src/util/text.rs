use crate::error::{ErrorKind, MetaError, Result};
use crate::macros::err;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	pub(crate) fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16 | Self::UTF16BE => 2,
		}
	}
}

const BIG_ENDIAN: fn([u8; 2]) -> u16 = u16::from_be_bytes;
const LITTLE_ENDIAN: fn([u8; 2]) -> u16 = u16::from_le_bytes;

/// Decodes the strings of a single ID3v2 frame
///
/// Some encoders only write a byte order mark on the *first* UTF-16 string of a frame
/// (ex. the description of a COMM frame), so the byte order is remembered across calls.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TextDecoder {
	encoding: TextEncoding,
	endianness: Option<fn([u8; 2]) -> u16>,
}

impl TextDecoder {
	pub(crate) fn new(encoding: TextEncoding) -> Self {
		let endianness = match encoding {
			TextEncoding::UTF16BE => Some(BIG_ENDIAN),
			_ => None,
		};

		Self {
			encoding,
			endianness,
		}
	}

	/// Splits `bytes` at the first terminator, returning the text before it and everything after it
	///
	/// If there is no terminator, the entire input is the text.
	pub(crate) fn split_terminated<'a>(&self, bytes: &'a [u8]) -> (&'a [u8], &'a [u8]) {
		let terminator_len = self.encoding.terminator_len();

		let position = if terminator_len == 1 {
			bytes.iter().position(|b| *b == 0)
		} else {
			bytes
				.chunks_exact(2)
				.position(|c| c == [0, 0])
				.map(|index| index * 2)
		};

		match position {
			Some(position) => (&bytes[..position], &bytes[position + terminator_len..]),
			None => (bytes, &[]),
		}
	}

	/// Decodes a terminated string, returning it and the remaining bytes
	pub(crate) fn decode_terminated<'a>(&mut self, bytes: &'a [u8]) -> Result<(String, &'a [u8])> {
		let (text, rest) = self.split_terminated(bytes);
		Ok((self.decode(text)?, rest))
	}

	/// Decodes every string in `bytes`, separated by terminators
	///
	/// A single trailing terminator does not produce an empty value.
	pub(crate) fn decode_values(&mut self, mut bytes: &[u8]) -> Result<Vec<String>> {
		let mut values = Vec::new();

		while !bytes.is_empty() {
			let (text, rest) = self.split_terminated(bytes);
			values.push(self.decode(text)?);
			bytes = rest;
		}

		// Padding after the last value is sometimes written as additional terminators
		while values.len() > 1 && values.last().is_some_and(String::is_empty) {
			values.pop();
		}

		Ok(values)
	}

	/// Decodes a single (unterminated) string
	pub(crate) fn decode(&mut self, bytes: &[u8]) -> Result<String> {
		if bytes.is_empty() {
			return Ok(String::new());
		}

		match self.encoding {
			TextEncoding::Latin1 => Ok(latin1_decode(bytes)),
			TextEncoding::UTF8 => utf8_decode(bytes),
			TextEncoding::UTF16 | TextEncoding::UTF16BE => {
				if bytes.len() % 2 != 0 {
					err!(TextDecode("UTF-16 string has an odd length"));
				}

				let (content, endianness) = match bytes {
					[0xFE, 0xFF, content @ ..] => {
						(content, BIG_ENDIAN)
					},
					[0xFF, 0xFE, content @ ..] => {
						(content, LITTLE_ENDIAN)
					},
					_ => match self.endianness {
						Some(endianness) => (bytes, endianness),
						None => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
					},
				};

				self.endianness = Some(endianness);
				utf16_decode_bytes(content, endianness)
			},
		}
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| char::from(*c)).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

pub(crate) fn utf8_decode(bytes: &[u8]) -> Result<String> {
	std::str::from_utf8(bytes)
		.map(|text| trim_end_nulls_str(text).to_owned())
		.map_err(|_| MetaError::new(ErrorKind::TextDecode("Expected a UTF-8 string")))
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	let words = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect::<Vec<u16>>();

	String::from_utf16(&words)
		.map(|mut text| {
			trim_end_nulls(&mut text);
			text
		})
		.map_err(|_| MetaError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}

pub(crate) fn trim_end_nulls_str(text: &str) -> &str {
	text.trim_end_matches('\0')
}
