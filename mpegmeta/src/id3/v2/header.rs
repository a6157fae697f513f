use super::util::synchsafe::SynchsafeInteger;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether the tag content is unsynchronised
	///
	/// In ID3v2.2 and ID3v2.3 this applies to the entire tag body. In ID3v2.4 it means every
	/// frame is unsynchronised.
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header (ID3v2.3+)
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage (ID3v2.3+)
	pub experimental: bool,
	/// Indicates that the tag ends with a 10 byte footer (ID3v2.4)
	pub footer: bool,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents, including the extended header (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		bytes.read_exact(&mut header)?;

		if &header[..3] != b"ID3" {
			err!(FakeTag);
		}

		// Minor revisions are backwards compatible
		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => {
				return Err(
					Id3v2Error::new(Id3v2ErrorKind::BadId3v2Version(major, header[4])).into(),
				);
			},
		};

		let flags = header[5];

		// ID3v2.2 reserved this bit for a compression scheme that was never decided on,
		// so the tag can't be read.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			return Err(Id3v2Error::new(Id3v2ErrorKind::V2Compression).into());
		}

		let flags = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: version != Id3v2Version::V2 && flags & 0x40 == 0x40,
			experimental: version != Id3v2Version::V2 && flags & 0x20 == 0x20,
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
		};

		let size = BigEndian::read_u32(&header[6..]).unsynch();

		Ok(Id3v2Header {
			version,
			flags,
			size,
		})
	}

	/// The total size of the tag, including the header and footer
	pub(crate) fn full_tag_size(&self) -> u32 {
		self.size + 10 + if self.flags.footer { 10 } else { 0 }
	}
}

/// Skip the extended header at the start of the tag body, returning the remaining content
pub(crate) fn skip_extended_header(body: &[u8], version: Id3v2Version) -> Result<&[u8]> {
	if body.len() < 4 {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
	}

	let size = BigEndian::read_u32(&body[..4]);

	// The ID3v2.3 size excludes itself, and is always 6 or 10.
	// The ID3v2.4 size is synchsafe, and includes itself.
	let total_size = match version {
		Id3v2Version::V4 => {
			let size = size.unsynch();
			if size < 6 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}

			size
		},
		_ => size.saturating_add(4),
	};

	log::debug!("ID3v2: Skipping an extended header of {total_size} bytes");

	match body.get(total_size as usize..) {
		Some(content) => Ok(content),
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into()),
	}
}
