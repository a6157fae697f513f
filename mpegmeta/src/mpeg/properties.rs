use super::header::{ChannelMode, FrameHeader, Layer, MpegVersion, VbrHeader, VbrHeaderType};
use crate::error::{StreamChange, Warning};

/// Whether every frame of a stream uses the same bitrate
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitrateMode {
	/// Constant bitrate
	Cbr,
	/// Variable bitrate
	Vbr,
}

/// How much of the stream was walked to produce the statistics
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanExtent {
	/// Every frame up to the end of the audio was visited
	Full,
	/// The scan stopped at [`ParseOptions::probe_frame_limit`](crate::config::ParseOptions::probe_frame_limit),
	/// the duration is an estimate
	Truncated,
	/// Only the first audio frame was decoded, see [`ParseOptions::compute_duration`](crate::config::ParseOptions::compute_duration)
	FirstFrame,
}

/// An MPEG stream's audio properties
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct MpegProperties {
	pub(crate) version: MpegVersion,
	pub(crate) layer: Layer,
	pub(crate) channel_mode: ChannelMode,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u8,
	pub(crate) bitrate_mode: BitrateMode,
	pub(crate) bitrate: u32,
	pub(crate) average_bitrate: u32,
	pub(crate) total_frames: u64,
	pub(crate) padded_frames: u64,
	pub(crate) unpadded_frames: u64,
	pub(crate) total_audio_bytes: u64,
	pub(crate) number_of_samples: Option<u64>,
	pub(crate) duration: Option<f64>,
	pub(crate) scan_extent: ScanExtent,
	pub(crate) vbr_header: Option<VbrHeaderType>,
	pub(crate) malformed: bool,
}

impl MpegProperties {
	/// MPEG version of the first audio frame
	pub fn version(&self) -> MpegVersion {
		self.version
	}

	/// MPEG layer of the first audio frame
	pub fn layer(&self) -> Layer {
		self.layer
	}

	/// MPEG channel mode of the first audio frame
	pub fn channel_mode(&self) -> ChannelMode {
		self.channel_mode
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// See [`BitrateMode`]
	pub fn bitrate_mode(&self) -> BitrateMode {
		self.bitrate_mode
	}

	/// Nominal bitrate (bps)
	///
	/// For a constant bitrate stream this is the bitrate of every frame. For a variable bitrate
	/// stream it is the bitrate used by the most frames.
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Average bitrate (bps)
	///
	/// For a constant bitrate stream this equals [`MpegProperties::bitrate`]. Otherwise, it is derived
	/// from the number of audio bytes and the duration.
	pub fn average_bitrate(&self) -> u32 {
		self.average_bitrate
	}

	/// Number of audio frames visited
	///
	/// A Xing/Info/VBRI frame carries no audio, and is not counted.
	pub fn total_frames(&self) -> u64 {
		self.total_frames
	}

	/// Number of visited frames with the padding bit set
	pub fn padded_frames(&self) -> u64 {
		self.padded_frames
	}

	/// Number of visited frames without the padding bit set
	pub fn unpadded_frames(&self) -> u64 {
		self.unpadded_frames
	}

	/// Number of bytes in the visited frames
	pub fn total_audio_bytes(&self) -> u64 {
		self.total_audio_bytes
	}

	/// Total samples (per channel) in the stream
	///
	/// This is an estimate unless the [`ScanExtent`] is [`ScanExtent::Full`].
	pub fn number_of_samples(&self) -> Option<u64> {
		self.number_of_samples
	}

	/// Duration of the audio in seconds
	///
	/// This is an estimate unless the [`ScanExtent`] is [`ScanExtent::Full`], and is
	/// `None` if it could not be determined from the frames that were read.
	pub fn duration(&self) -> Option<f64> {
		self.duration
	}

	/// See [`ScanExtent`]
	pub fn scan_extent(&self) -> ScanExtent {
		self.scan_extent
	}

	/// The VBR information header in the first frame, if any
	pub fn vbr_header(&self) -> Option<VbrHeaderType> {
		self.vbr_header
	}

	/// Whether the sample rate or channel count changed mid-stream
	///
	/// The values of the first frame are reported.
	pub fn is_malformed(&self) -> bool {
		self.malformed
	}
}

/// Accumulates the frames accepted by the synchronizer
#[derive(Debug, Default)]
pub(super) struct StreamStatistics {
	first: Option<FrameHeader>,
	total_frames: u64,
	padded_frames: u64,
	total_audio_bytes: u64,
	total_samples: u64,
	// (kbps, frame count) in order of first appearance
	bitrates: Vec<(u32, u64)>,
	malformed: bool,
}

impl StreamStatistics {
	pub(super) fn total_frames(&self) -> u64 {
		self.total_frames
	}

	pub(super) fn total_audio_bytes(&self) -> u64 {
		self.total_audio_bytes
	}

	/// Record a frame, `bytes` being the number of bytes actually present in the stream
	pub(super) fn push(&mut self, header: &FrameHeader, bytes: u32) -> Option<Warning> {
		self.total_frames += 1;
		if header.padding {
			self.padded_frames += 1;
		}

		self.total_audio_bytes += u64::from(bytes);
		self.total_samples += u64::from(header.samples);

		if !header.is_free_format() {
			match self.bitrates.iter_mut().find(|(b, _)| *b == header.bitrate) {
				Some((_, count)) => *count += 1,
				None => self.bitrates.push((header.bitrate, 1)),
			}
		}

		let Some(first) = self.first else {
			self.first = Some(*header);
			return None;
		};

		let change = if header.sample_rate != first.sample_rate {
			Some(StreamChange::SampleRate {
				expected: first.sample_rate,
				found: header.sample_rate,
			})
		} else if header.channel_mode.channels() != first.channel_mode.channels() {
			Some(StreamChange::ChannelCount {
				expected: first.channel_mode.channels(),
				found: header.channel_mode.channels(),
			})
		} else {
			None
		};

		let change = change?;
		log::warn!("MPEG: Stream properties changed mid-stream: {change:?}");

		// Only the first change is reported
		if self.malformed {
			return None;
		}

		self.malformed = true;
		Some(Warning::MalformedStream(change))
	}

	/// Produce the final properties
	///
	/// * `audio_len` - the number of bytes between the first counted frame and the end of the audio
	pub(super) fn finish(
		self,
		scan_extent: ScanExtent,
		vbr_header: Option<VbrHeader>,
		audio_len: u64,
	) -> Option<MpegProperties> {
		let first = self.first?;

		let sample_rate = u64::from(first.sample_rate);
		let samples_per_frame = u64::from(first.samples);

		let valid_vbr_header = vbr_header.filter(VbrHeader::is_valid);

		let number_of_samples = match scan_extent {
			ScanExtent::Full => Some(self.total_samples),
			ScanExtent::Truncated => match valid_vbr_header {
				Some(vbr_header) => Some(u64::from(vbr_header.frames) * samples_per_frame),
				None if self.total_audio_bytes > 0 => {
					log::debug!("MPEG: Estimating the frame count from the average frame size");

					let estimated_frames = (u128::from(audio_len) * u128::from(self.total_frames))
						.div_ceil(u128::from(self.total_audio_bytes));
					Some(u64::try_from(estimated_frames).unwrap_or(u64::MAX).saturating_mul(samples_per_frame))
				},
				None => None,
			},
			ScanExtent::FirstFrame => {
				valid_vbr_header.map(|vbr_header| u64::from(vbr_header.frames) * samples_per_frame)
			},
		};

		#[allow(clippy::cast_precision_loss)]
		let duration = number_of_samples.map(|samples| samples as f64 / sample_rate as f64);

		#[allow(clippy::cast_precision_loss)]
		let scanned_duration = self.total_samples as f64 / sample_rate as f64;

		// Byte counted, used whenever the frames disagree or carry no table bitrate
		let byte_counted_bitrate = bitrate_from_bytes(self.total_audio_bytes, scanned_duration);

		let mut bitrate_mode = if self.bitrates.len() > 1 {
			BitrateMode::Vbr
		} else {
			BitrateMode::Cbr
		};

		// A partial scan can't see the whole stream, trust the encoder instead
		if scan_extent != ScanExtent::Full
			&& matches!(
				vbr_header.map(|h| h.ty),
				Some(VbrHeaderType::Xing | VbrHeaderType::Vbri)
			) {
			bitrate_mode = BitrateMode::Vbr;
		}

		let most_frequent = self
			.bitrates
			.iter()
			.fold(None::<(u32, u64)>, |best, &(bitrate, count)| match best {
				Some((_, best_count)) if best_count >= count => best,
				_ => Some((bitrate, count)),
			})
			.map(|(bitrate, _)| bitrate * 1000);

		let (bitrate, average_bitrate) = match (bitrate_mode, most_frequent) {
			(BitrateMode::Cbr, Some(bitrate)) => (bitrate, bitrate),
			(BitrateMode::Vbr, Some(bitrate)) => {
				let average = match (valid_vbr_header, duration) {
					(Some(vbr_header), Some(duration))
						if scan_extent == ScanExtent::FirstFrame
							&& vbr_header.size > 0
							&& duration > 0.0 =>
					{
						bitrate_from_bytes(u64::from(vbr_header.size), duration)
					},
					_ => byte_counted_bitrate,
				};

				(bitrate, average)
			},
			// Free format, the frames carry no table bitrate
			(_, None) => (byte_counted_bitrate, byte_counted_bitrate),
		};

		Some(MpegProperties {
			version: first.version,
			layer: first.layer,
			channel_mode: first.channel_mode,
			sample_rate: first.sample_rate,
			channels: first.channel_mode.channels(),
			bitrate_mode,
			bitrate,
			average_bitrate,
			total_frames: self.total_frames,
			padded_frames: self.padded_frames,
			unpadded_frames: self.total_frames - self.padded_frames,
			total_audio_bytes: self.total_audio_bytes,
			number_of_samples,
			duration,
			scan_extent,
			vbr_header: vbr_header.map(|h| h.ty),
			malformed: self.malformed,
		})
	}
}

#[allow(
	clippy::cast_precision_loss,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss
)]
fn bitrate_from_bytes(bytes: u64, seconds: f64) -> u32 {
	if seconds <= 0.0 {
		return 0;
	}

	((bytes * 8) as f64 / seconds).round() as u32
}
