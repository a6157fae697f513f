mod attached_picture_frame;
mod binary_frame;
mod extended_text_frame;
mod extended_url_frame;
mod language_frame;
mod text_information_frame;
mod url_link_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use binary_frame::BinaryFrame;
pub use extended_text_frame::ExtendedTextFrame;
pub use extended_url_frame::ExtendedUrlFrame;
pub use language_frame::LanguageFrame;
pub use text_information_frame::TextInformationFrame;
pub use url_link_frame::UrlLinkFrame;

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

// Every decoded frame starts with at least one byte (usually the text encoding)
pub(super) fn split_encoding(content: &[u8]) -> Result<(u8, &[u8])> {
	match content.split_first() {
		Some((encoding, rest)) => Ok((*encoding, rest)),
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into()),
	}
}
