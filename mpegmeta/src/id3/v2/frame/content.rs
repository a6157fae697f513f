use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::items::{
	AttachedPictureFrame, BinaryFrame, ExtendedTextFrame, ExtendedUrlFrame, LanguageFrame,
	TextInformationFrame, UrlLinkFrame,
};
use crate::id3::v2::{Frame, FrameHeader};
use crate::util::text::TextEncoding;

/// Decode the content of a frame according to its ID
///
/// `content` has already had unsynchronisation and compression reversed.
#[rustfmt::skip]
pub(super) fn parse_content(
	header: FrameHeader,
	content: &[u8],
	version: Id3v2Version,
) -> Result<Frame> {
	log::trace!("Parsing frame content for ID: {}", header.id);

	Ok(match header.id.as_str() {
		"APIC" | "PIC" => Frame::Picture(AttachedPictureFrame::parse(header, content, version)?),
		"TXXX" | "TXX" => Frame::UserText(ExtendedTextFrame::parse(header, content, version)?),
		"WXXX" | "WXX" => Frame::UserUrl(ExtendedUrlFrame::parse(header, content, version)?),
		"COMM" | "COM" => Frame::Comment(LanguageFrame::parse(header, content, version)?),
		"USLT" | "ULT" => Frame::UnsynchronizedText(LanguageFrame::parse(header, content, version)?),
		i if i.starts_with('T') => Frame::Text(TextInformationFrame::parse(header, content, version)?),
		i if i.starts_with('W') => Frame::Url(UrlLinkFrame::parse(header, content)),
		// PRIV, GEOB, SYLT, and any unknown frames
		_ => Frame::Binary(BinaryFrame::new(header, content.to_vec())),
	})
}

pub(in crate::id3::v2) fn verify_encoding(
	encoding: u8,
	version: Id3v2Version,
) -> Result<TextEncoding> {
	if version == Id3v2Version::V2 && (encoding != 0 && encoding != 1) {
		return Err(Id3v2Error::new(Id3v2ErrorKind::V2InvalidTextEncoding).into());
	}

	match TextEncoding::from_u8(encoding) {
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadTextEncoding(encoding)).into()),
		Some(e) => Ok(e),
	}
}
