use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

use std::fmt::{Display, Formatter};

/// An ID3v2 frame ID
///
/// ID3v2.2 IDs are 3 characters, ID3v2.3 and ID3v2.4 IDs are 4. Only `'A'..='Z'` and
/// `'0'..='9'` are allowed.
///
/// IDs are kept as written, ID3v2.2 IDs are *not* upgraded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(String);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::id3::v2::FrameId;
	///
	/// assert!(FrameId::new("TIT2").is_ok());
	/// assert!(FrameId::new("TT2").is_ok());
	/// assert!(FrameId::new("tit2").is_err());
	/// ```
	pub fn new(id: &str) -> Result<Self> {
		Self::from_bytes(id.as_bytes())
	}

	pub(crate) fn from_bytes(id: &[u8]) -> Result<Self> {
		let valid_len = id.len() == 3 || id.len() == 4;
		if !valid_len
			|| !id
				.iter()
				.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
		{
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.to_vec())).into());
		}

		Ok(Self(id.iter().map(|c| char::from(*c)).collect()))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether this is a 3 character ID3v2.2 ID
	pub fn is_v2(&self) -> bool {
		self.0.len() == 3
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Various flags to describe the content of an item
///
/// ID3v2.2 frames have no flags.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	pub grouping_identity: Option<u8>,
	/// Frame is zlib compressed
	pub compression: bool,
	/// The encryption method symbol
	pub encryption: Option<u8>,
	/// Frame is unsynchronised (ID3v2.4)
	pub unsynchronisation: bool,
	/// The size of the frame content, before compression or unsynchronisation
	pub data_length_indicator: Option<u32>,
}

impl FrameFlags {
	// The flags with associated data are set to `Some(0)` here, and filled in while reading
	// the frame content.

	/// Parse the flags from an ID3v2.4 frame
	pub(crate) fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: (flags & 0x0040 == 0x0040).then_some(0),
			compression: flags & 0x0008 == 0x0008,
			encryption: (flags & 0x0004 == 0x0004).then_some(0),
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	pub(crate) fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
			compression: flags & 0x0080 == 0x0080,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			unsynchronisation: false,
			data_length_indicator: None,
		}
	}
}

/// An ID3v2 frame header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub(crate) flags: FrameFlags,
}

impl FrameHeader {
	pub(crate) fn new(id: FrameId, flags: FrameFlags) -> Self {
		Self { id, flags }
	}

	/// The frame ID
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The frame flags
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}
}
