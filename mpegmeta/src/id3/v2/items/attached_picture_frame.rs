use super::split_encoding;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::picture::{MimeType, Picture, PictureType};
use crate::util::text::{TextDecoder, TextEncoding, latin1_decode};

/// An `ID3v2` attached picture frame
///
/// This is used for the `APIC` frame (`PIC` in ID3v2.2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The picture contained in the frame
	pub picture: Picture,
}

impl AttachedPictureFrame {
	/// Read an [`AttachedPictureFrame`] from the frame content
	///
	/// # Errors
	///
	/// * The content is too short
	/// * The encoding is invalid
	/// * The description could not be decoded
	pub(crate) fn parse(header: FrameHeader, content: &[u8], version: Id3v2Version) -> Result<Self> {
		let (encoding, content) = split_encoding(content)?;
		let encoding = verify_encoding(encoding, version)?;

		let (mime_type, content) = if version == Id3v2Version::V2 {
			// ID3v2.2 uses a 3 character image format instead of a MIME type
			let Some((format, content)) = content.split_first_chunk::<3>() else {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			};

			(Some(MimeType::from_image_format(format)), content)
		} else {
			let end = content.iter().position(|b| *b == 0).unwrap_or(content.len());
			let mime_type = latin1_decode(&content[..end]);
			let content = content.get(end + 1..).unwrap_or_default();

			let mime_type = (!mime_type.is_empty()).then(|| MimeType::from_str(&mime_type));
			(mime_type, content)
		};

		let Some((&pic_type, content)) = content.split_first() else {
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		};

		let (description, data) = TextDecoder::new(encoding).decode_terminated(content)?;

		let picture = Picture {
			pic_type: PictureType::from_u8(pic_type),
			mime_type,
			description: (!description.is_empty()).then_some(description),
			data: data.to_vec(),
		};

		Ok(AttachedPictureFrame {
			header,
			encoding,
			picture,
		})
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &FrameId {
		&self.header.id
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}
}

#[cfg(test)]
mod tests {
	use super::AttachedPictureFrame;
	use crate::id3::v2::header::Id3v2Version;
	use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
	use crate::picture::{MimeType, PictureType};

	#[test_log::test]
	fn apic() {
		let header = FrameHeader::new(FrameId::new("APIC").unwrap(), FrameFlags::default());
		let content = b"\x00image/png\0\x03Front\0\x89PNG";

		let frame = AttachedPictureFrame::parse(header, content, Id3v2Version::V3).unwrap();
		assert_eq!(frame.picture.mime_type(), Some(&MimeType::Png));
		assert_eq!(frame.picture.pic_type(), PictureType::CoverFront);
		assert_eq!(frame.picture.description(), Some("Front"));
		assert_eq!(frame.picture.data(), b"\x89PNG");
	}

	#[test_log::test]
	fn pic() {
		let header = FrameHeader::new(FrameId::new("PIC").unwrap(), FrameFlags::default());
		let content = b"\x00JPG\x00\0\xFF\xD8";

		let frame = AttachedPictureFrame::parse(header, content, Id3v2Version::V2).unwrap();
		assert_eq!(frame.picture.mime_type(), Some(&MimeType::Jpeg));
		assert_eq!(frame.picture.pic_type(), PictureType::Other);
		assert_eq!(frame.picture.description(), None);
		assert_eq!(frame.picture.data(), b"\xFF\xD8");
	}
}
