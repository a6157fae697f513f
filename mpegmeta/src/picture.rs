//! Embedded pictures, as found in ID3v2 `APIC`/`PIC` frames

use std::fmt::{Debug, Display, Formatter};

/// The MIME type of an embedded picture
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// PNG image
	Png,
	/// JPEG image
	Jpeg,
	/// TIFF image
	Tiff,
	/// BMP image
	Bmp,
	/// GIF image
	Gif,
	/// Anything else, kept as written
	Unknown(String),
}

impl MimeType {
	/// Get a `MimeType` from a MIME type string
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::picture::MimeType;
	///
	/// assert_eq!(MimeType::from_str("image/jpg"), MimeType::Jpeg);
	/// assert_eq!(
	/// 	MimeType::from_str("image/webp"),
	/// 	MimeType::Unknown(String::from("image/webp"))
	/// );
	/// ```
	#[must_use]
	#[allow(clippy::should_implement_trait)] // Infallible in contrast to FromStr
	pub fn from_str(mime_type: &str) -> Self {
		match &*mime_type.to_ascii_lowercase() {
			"image/jpeg" | "image/jpg" => Self::Jpeg,
			"image/png" => Self::Png,
			"image/tiff" => Self::Tiff,
			"image/bmp" => Self::Bmp,
			"image/gif" => Self::Gif,
			_ => Self::Unknown(mime_type.to_owned()),
		}
	}

	/// Get a `MimeType` from the 3 character image format of an ID3v2.2 `PIC` frame
	pub(crate) fn from_image_format(format: &[u8; 3]) -> Self {
		match format.to_ascii_uppercase().as_slice() {
			b"JPG" => Self::Jpeg,
			b"PNG" => Self::Png,
			b"TIF" => Self::Tiff,
			b"BMP" => Self::Bmp,
			b"GIF" => Self::Gif,
			_ => Self::Unknown(format.iter().map(|c| char::from(*c)).collect()),
		}
	}

	/// The MIME type string
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			MimeType::Jpeg => "image/jpeg",
			MimeType::Png => "image/png",
			MimeType::Tiff => "image/tiff",
			MimeType::Bmp => "image/bmp",
			MimeType::Gif => "image/gif",
			MimeType::Unknown(unknown) => unknown,
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What an embedded picture depicts
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PictureType {
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
	Undefined(u8),
}

// Indexed by the ID3v2 picture type byte
const PICTURE_TYPES: [PictureType; 21] = [
	PictureType::Other,
	PictureType::Icon,
	PictureType::OtherIcon,
	PictureType::CoverFront,
	PictureType::CoverBack,
	PictureType::Leaflet,
	PictureType::Media,
	PictureType::LeadArtist,
	PictureType::Artist,
	PictureType::Conductor,
	PictureType::Band,
	PictureType::Composer,
	PictureType::Lyricist,
	PictureType::RecordingLocation,
	PictureType::DuringRecording,
	PictureType::DuringPerformance,
	PictureType::ScreenCapture,
	PictureType::BrightFish,
	PictureType::Illustration,
	PictureType::BandLogo,
	PictureType::PublisherLogo,
];

impl PictureType {
	/// The ID3v2 picture type byte
	pub fn as_u8(&self) -> u8 {
		if let Self::Undefined(byte) = self {
			return *byte;
		}

		PICTURE_TYPES
			.iter()
			.position(|ty| ty == self)
			.map_or(0, |index| index as u8)
	}

	/// Get a `PictureType` from an ID3v2 picture type byte
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::picture::PictureType;
	///
	/// assert_eq!(PictureType::from_u8(3), PictureType::CoverFront);
	/// assert_eq!(PictureType::from_u8(3).as_u8(), 3);
	/// assert_eq!(PictureType::from_u8(0xAA), PictureType::Undefined(0xAA));
	/// ```
	pub fn from_u8(byte: u8) -> Self {
		PICTURE_TYPES
			.get(usize::from(byte))
			.copied()
			.unwrap_or(Self::Undefined(byte))
	}
}

/// An embedded picture
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Picture {
	pub(crate) pic_type: PictureType,
	pub(crate) mime_type: Option<MimeType>,
	pub(crate) description: Option<String>,
	pub(crate) data: Vec<u8>,
}

impl Debug for Picture {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Picture")
			.field("pic_type", &self.pic_type)
			.field("mime_type", &self.mime_type)
			.field("description", &self.description)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl Picture {
	/// What the picture depicts
	pub fn pic_type(&self) -> PictureType {
		self.pic_type
	}

	/// The picture's MIME type, if one was written
	pub fn mime_type(&self) -> Option<&MimeType> {
		self.mime_type.as_ref()
	}

	/// The picture's description, if it isn't empty
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// The picture data
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Consumes the picture, returning its data
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}
