pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	AttachedPictureFrame, BinaryFrame, ExtendedTextFrame, ExtendedUrlFrame, LanguageFrame,
	TextInformationFrame, UrlLinkFrame,
};
pub use header::{FrameFlags, FrameHeader, FrameId};

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
		}

		impl Frame {
			/// Get the frame's header
			pub fn header(&self) -> &FrameHeader {
				match self {
					$(
						Frame::$variant(frame) => &frame.header,
					)*
				}
			}
		}
	};
}

define_frames! {
	/// Represents an ID3v2 frame
	///
	/// Frames are decoded according to their ID. Any frame without a dedicated
	/// representation is kept as a [`BinaryFrame`], so no frame is ever lost.
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum Frame {
		/// Represents a "T..." frame (excluding "TXXX")
		Text(TextInformationFrame),
		/// Represents a "TXXX" frame
		UserText(ExtendedTextFrame),
		/// Represents a "W..." frame (excluding "WXXX")
		Url(UrlLinkFrame),
		/// Represents a "WXXX" frame
		UserUrl(ExtendedUrlFrame),
		/// Represents a "COMM" frame
		Comment(LanguageFrame),
		/// Represents a "USLT" frame
		UnsynchronizedText(LanguageFrame),
		/// Represents an "APIC" (or ID3v2.2 "PIC") frame
		Picture(AttachedPictureFrame),
		/// Binary data
		///
		/// NOTES:
		///
		/// * This is used for any frame that isn't decoded further
		/// * Encrypted frames are always binary
		/// * A frame that failed to decode is kept as binary, see
		///   [`ParsingMode::BestAttempt`](crate::config::ParsingMode::BestAttempt)
		Binary(BinaryFrame),
	}
}

impl Frame {
	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId {
		&self.header().id
	}

	/// Get the ID of the frame as a string
	pub fn id_str(&self) -> &str {
		self.header().id.as_str()
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header().flags
	}
}
