//! Helpers for reading from seekable byte sources

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

// TODO: https://github.com/rust-lang/rust/issues/59359
pub(crate) trait SeekStreamLen: Seek {
	fn stream_len_hack(&mut self) -> Result<u64> {
		let current_pos = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;

		self.seek(SeekFrom::Start(current_pos))?;

		Ok(len)
	}
}

impl<T> SeekStreamLen for T where T: Seek {}

pub(crate) trait ReadAtExt: Read + Seek {
	/// Reads a big endian `u32` at `offset`, or `None` if the source ends first
	///
	/// The reader position is left unspecified.
	fn read_u32_at(&mut self, offset: u64) -> Result<Option<u32>> {
		self.seek(SeekFrom::Start(offset))?;

		let mut bytes = [0; 4];
		let mut filled = 0;
		while filled < bytes.len() {
			match self.read(&mut bytes[filled..])? {
				0 => return Ok(None),
				n => filled += n,
			}
		}

		Ok(Some(u32::from_be_bytes(bytes)))
	}

	/// Fills `buf` with up to `len` bytes starting at `offset`, returning the number of bytes read
	fn read_window_at(&mut self, offset: u64, len: u64, buf: &mut Vec<u8>) -> Result<usize> {
		self.seek(SeekFrom::Start(offset))?;

		buf.clear();
		let read = Read::take(&mut *self, len).read_to_end(buf)?;

		Ok(read)
	}
}

impl<T> ReadAtExt for T where T: Read + Seek {}
