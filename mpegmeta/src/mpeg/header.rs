use super::constants::{BITRATES, PADDING_SIZES, SAMPLE_RATES, SAMPLES, SIDE_INFORMATION_SIZES};
use crate::error::Result;
use crate::macros::decode_err;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

// Searches for a frame sync (11 set bits) in the buffer, returning the index of the first match.
//
// Note that the search searches in 8 bit steps, i.e. the first 8 bits need to be byte aligned.
pub(crate) fn search_for_frame_sync(buf: &[u8]) -> Option<usize> {
	buf.windows(2)
		.position(|pair| verify_frame_sync([pair[0], pair[1]]))
}

// Used to compare the versions, layers, and sample rates of two frame headers.
// A candidate frame is only confirmed if its successor matches under this mask.
pub(crate) const HEADER_MASK: u32 = 0xFFFE_0C00;

// Sync, version and layer. Frames reached by walking from a confirmed frame only need to match this.
//
// The sample rate is left out so that a mid-stream change is seen by the statistics,
// rather than silently breaking the chain.
pub(crate) const CHAIN_MASK: u32 = 0xFFFE_0000;

// `HEADER_MASK` plus the bitrate index, used to find the successor of a free format frame
pub(crate) const FREE_FORMAT_MASK: u32 = HEADER_MASK | 0x0000_F000;

/// The reason a 32-bit word is not a valid MPEG frame header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidHeader {
	/// The 11 sync bits are not all set
	BadSync,
	/// The version bits are `01` (reserved)
	BadVersion,
	/// The layer bits are `00` (reserved)
	BadLayer,
	/// The bitrate index is `1111` (reserved)
	BadBitrate,
	/// The sample rate index is `11` (reserved)
	BadSampleRate,
	/// The emphasis bits are `10` (reserved)
	BadEmphasis,
}

impl Display for InvalidHeader {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			InvalidHeader::BadSync => write!(f, "MPEG frame header is missing its sync bits"),
			InvalidHeader::BadVersion => write!(f, "Invalid MPEG frame version"),
			InvalidHeader::BadLayer => write!(f, "Invalid MPEG frame layer"),
			InvalidHeader::BadBitrate => write!(f, "MPEG frame has an invalid bitrate index"),
			InvalidHeader::BadSampleRate => {
				write!(f, "MPEG frame has an invalid sample rate index")
			},
			InvalidHeader::BadEmphasis => write!(f, "MPEG frame uses a reserved emphasis"),
		}
	}
}

impl core::error::Error for InvalidHeader {}

/// MPEG Audio version
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum MpegVersion {
	#[default]
	V1,
	V2,
	V2_5,
}

/// MPEG layer
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	#[default]
	Layer3 = 3,
}

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

impl ChannelMode {
	/// The number of channels this mode carries
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::mpeg::ChannelMode;
	///
	/// assert_eq!(ChannelMode::SingleChannel.channels(), 1);
	/// assert_eq!(ChannelMode::JointStereo.channels(), 2);
	/// ```
	pub fn channels(self) -> u8 {
		match self {
			ChannelMode::SingleChannel => 1,
			_ => 2,
		}
	}
}

/// A rarely-used decoder hint that the file must be de-emphasized
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs, non_camel_case_types)]
pub enum Emphasis {
	/// 50/15 ms
	MS5015,
	/// CCIT J.17
	CCIT_J17,
}

/// A decoded MPEG audio frame header
///
/// # Examples
///
/// ```rust
/// use mpegmeta::mpeg::{FrameHeader, Layer, MpegVersion};
///
/// // MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding, joint stereo
/// let header = FrameHeader::parse(0xFFFB_9064).unwrap();
///
/// assert_eq!(header.version(), MpegVersion::V1);
/// assert_eq!(header.layer(), Layer::Layer3);
/// assert_eq!(header.bitrate(), 128_000);
/// assert_eq!(header.sample_rate(), 44100);
/// assert_eq!(header.len(), 417);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	pub(crate) version: MpegVersion,
	pub(crate) layer: Layer,
	pub(crate) bitrate_index: u8,
	pub(crate) sample_rate_index: u8,
	pub(crate) padding: bool,
	pub(crate) protected: bool,
	pub(crate) channel_mode: ChannelMode,
	pub(crate) mode_extension: Option<u8>,
	pub(crate) copyright: bool,
	pub(crate) original: bool,
	pub(crate) emphasis: Option<Emphasis>,
	/// kbps, 0 for free format
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) samples: u16,
	pub(crate) len: u32,
	pub(crate) data_start: u32,
}

#[allow(clippy::len_without_is_empty)]
impl FrameHeader {
	/// Decode a big endian 32-bit frame header
	///
	/// # Errors
	///
	/// Any field resolves to a reserved value, see [`InvalidHeader`]
	pub fn parse(data: u32) -> std::result::Result<Self, InvalidHeader> {
		if data >> 21 != 0x7FF {
			return Err(InvalidHeader::BadSync);
		}

		let version = match (data >> 19) & 0b11 {
			0b00 => MpegVersion::V2_5,
			0b10 => MpegVersion::V2,
			0b11 => MpegVersion::V1,
			_ => return Err(InvalidHeader::BadVersion),
		};

		let version_index = usize::from(version != MpegVersion::V1);

		let layer = match (data >> 17) & 0b11 {
			0b01 => Layer::Layer3,
			0b10 => Layer::Layer2,
			0b11 => Layer::Layer1,
			_ => return Err(InvalidHeader::BadLayer),
		};

		let layer_index = (layer as usize).saturating_sub(1);

		let bitrate_index = ((data >> 12) & 0xF) as u8;
		if bitrate_index == 0xF {
			return Err(InvalidHeader::BadBitrate);
		}

		let sample_rate_index = ((data >> 10) & 0b11) as u8;
		if sample_rate_index == 0b11 {
			return Err(InvalidHeader::BadSampleRate);
		}

		let emphasis = match data & 0b11 {
			0b00 => None,
			0b01 => Some(Emphasis::MS5015),
			0b11 => Some(Emphasis::CCIT_J17),
			_ => return Err(InvalidHeader::BadEmphasis),
		};

		let channel_mode = match (data >> 6) & 0b11 {
			0b00 => ChannelMode::Stereo,
			0b01 => ChannelMode::JointStereo,
			0b10 => ChannelMode::DualChannel,
			_ => ChannelMode::SingleChannel,
		};

		let mode_extension = if channel_mode == ChannelMode::JointStereo {
			Some(((data >> 4) & 3) as u8)
		} else {
			None
		};

		let protected = (data >> 16) & 1 == 0;

		let mut header = FrameHeader {
			version,
			layer,
			bitrate_index,
			sample_rate_index,
			padding: (data >> 9) & 1 == 1,
			protected,
			channel_mode,
			mode_extension,
			copyright: (data >> 3) & 1 == 1,
			original: (data >> 2) & 1 == 1,
			emphasis,
			bitrate: BITRATES[version_index][layer_index][usize::from(bitrate_index)],
			sample_rate: SAMPLE_RATES[version as usize][usize::from(sample_rate_index)],
			samples: SAMPLES[layer_index][version_index],
			len: 0,
			data_start: SIDE_INFORMATION_SIZES[version_index][channel_mode as usize]
				+ 4 + if protected { 2 } else { 0 },
		};

		if header.bitrate > 0 {
			header.len = match layer {
				// Layer I is measured in 4 byte slots
				Layer::Layer1 => (12 * header.bitrate * 1000 / header.sample_rate) * 4,
				_ => u32::from(header.samples) * header.bitrate * 125 / header.sample_rate,
			} + header.padding_size();
		}

		Ok(header)
	}

	/// Size of the padding slot for this frame, 0 if the padding bit is unset
	pub(crate) fn padding_size(&self) -> u32 {
		if self.padding {
			u32::from(PADDING_SIZES[(self.layer as usize).saturating_sub(1)])
		} else {
			0
		}
	}

	/// Set the length of a free format frame from the measured unpadded length
	pub(crate) fn set_free_format_len(&mut self, unpadded_len: u32) {
		self.len = unpadded_len + self.padding_size();
	}

	/// MPEG version
	pub fn version(&self) -> MpegVersion {
		self.version
	}

	/// MPEG layer
	pub fn layer(&self) -> Layer {
		self.layer
	}

	/// The raw bitrate index, 0 for free format
	pub fn bitrate_index(&self) -> u8 {
		self.bitrate_index
	}

	/// The raw sample rate index
	pub fn sample_rate_index(&self) -> u8 {
		self.sample_rate_index
	}

	/// Bitrate (bps) from the lookup table, 0 for free format frames
	pub fn bitrate(&self) -> u32 {
		self.bitrate * 1000
	}

	/// Whether this frame uses the free format bitrate
	pub fn is_free_format(&self) -> bool {
		self.bitrate_index == 0
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Whether the padding bit is set
	pub fn padding(&self) -> bool {
		self.padding
	}

	/// Whether the frame is protected by a CRC
	pub fn is_protected(&self) -> bool {
		self.protected
	}

	/// MPEG channel mode
	pub fn channel_mode(&self) -> ChannelMode {
		self.channel_mode
	}

	/// A channel mode extension specifically for [`ChannelMode::JointStereo`]
	pub fn mode_extension(&self) -> Option<u8> {
		self.mode_extension
	}

	/// Whether the audio is copyrighted
	pub fn is_copyright(&self) -> bool {
		self.copyright
	}

	/// Whether the media is original or a copy
	pub fn is_original(&self) -> bool {
		self.original
	}

	/// See [`Emphasis`]
	pub fn emphasis(&self) -> Option<Emphasis> {
		self.emphasis
	}

	/// Number of samples (per channel) in the frame
	pub fn samples(&self) -> u16 {
		self.samples
	}

	/// Length of the frame in bytes, including the header
	///
	/// This is 0 for a free format frame that hasn't been measured against its successor.
	pub fn len(&self) -> u32 {
		self.len
	}
}

/// The kind of VBR information header found in the first frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbrHeaderType {
	/// A Xing header, written for VBR streams
	Xing,
	/// The "Info" variant of a Xing header, written for CBR streams
	Info,
	/// A Fraunhofer VBRI header
	Vbri,
}

// VBRI headers are always 32 bytes after the frame header
pub(crate) const VBRI_OFFSET: u32 = 36;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct VbrHeader {
	pub ty: VbrHeaderType,
	pub frames: u32,
	pub size: u32,
}

impl VbrHeader {
	pub(crate) fn read(reader: &mut &[u8]) -> Result<Option<Self>> {
		let reader_len = reader.len();
		if reader_len < 4 {
			return Ok(None);
		}

		let mut header = [0; 4];
		reader.read_exact(&mut header)?;

		match &header {
			b"Xing" | b"Info" => {
				if reader_len < 8 {
					decode_err!(@BAIL Mpeg, "Xing header has an invalid size (< 8)");
				}

				let flags = reader.read_u32::<BigEndian>()?;

				let mut frames = 0;
				if flags & 0x01 == 0x01 {
					frames = reader.read_u32::<BigEndian>()?;
				}

				let mut size = 0;
				if flags & 0x02 == 0x02 {
					size = reader.read_u32::<BigEndian>()?;
				}

				let ty = if &header == b"Xing" {
					VbrHeaderType::Xing
				} else {
					VbrHeaderType::Info
				};

				Ok(Some(Self { ty, frames, size }))
			},
			b"VBRI" => {
				if reader_len < 18 {
					decode_err!(@BAIL Mpeg, "VBRI header has an invalid size (< 18)");
				}

				// Skip 6 bytes
				// Version ID (2)
				// Delay float (2)
				// Quality indicator (2)
				let _info = reader.read_uint::<BigEndian>(6)?;

				let size = reader.read_u32::<BigEndian>()?;
				let frames = reader.read_u32::<BigEndian>()?;

				Ok(Some(Self {
					ty: VbrHeaderType::Vbri,
					frames,
					size,
				}))
			},
			_ => Ok(None),
		}
	}

	pub(crate) fn is_valid(&self) -> bool {
		self.frames > 0
	}
}
