/// The parsing strictness mode
///
/// # Examples
///
/// ```rust,no_run
/// use mpegmeta::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> mpegmeta::error::Result<()> {
/// // We only want to read spec-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let result = mpegmeta::read_from_path("foo.mp3", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * An ID3v2 frame runs past the end of its tag - The parser will error and the entire input is discarded
	/// * Unable to decode frame text - The parser will error and the entire input is discarded
	/// * The ID3v1 year isn't 4 ASCII digits - The parser will error
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * An ID3v2 frame runs past the end of its tag - The frame is dropped, and a
	///   [`Warning::TruncatedFrame`](crate::error::Warning::TruncatedFrame) is attached
	/// * Unable to decode frame text - The frame is kept as opaque binary, and a
	///   [`Warning::InvalidFrame`](crate::error::Warning::InvalidFrame) is attached
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode frame text - The entire frame is discarded and the parser moves on
	Relaxed,
}

/// Options to control how mpegmeta parses a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) compute_duration: bool,
	pub(crate) decode_native_tags: bool,
	pub(crate) probe_frame_limit: Option<u32>,
	pub(crate) confirm_frame_sync: bool,
	pub(crate) read_tags: bool,
	pub(crate) read_cover_art: bool,
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	compute_duration: true,
	/// 	decode_native_tags: true,
	/// 	probe_frame_limit: None,
	/// 	confirm_frame_sync: true,
	/// 	read_tags: true,
	/// 	read_cover_art: true,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			compute_duration: true,
			decode_native_tags: true,
			probe_frame_limit: None,
			confirm_frame_sync: true,
			read_tags: true,
			read_cover_art: true,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// Whether or not to walk the MPEG frames to compute the duration and bitrate
	///
	/// When disabled, only the first frame is decoded. The duration is then only available
	/// if the stream starts with a Xing/Info/VBRI header.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// // I only care about the tags and the sample rate
	/// let parsing_options = ParseOptions::new().compute_duration(false);
	/// ```
	pub fn compute_duration(&mut self, compute_duration: bool) -> Self {
		self.compute_duration = compute_duration;
		*self
	}

	/// Whether or not to keep the native tag containers in the result
	///
	/// When disabled, [`ParseResult::native`](crate::ParseResult::native) is empty. The common
	/// metadata and the list of tag types are populated either way.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new().decode_native_tags(false);
	/// ```
	pub fn decode_native_tags(&mut self, decode_native_tags: bool) -> Self {
		self.decode_native_tags = decode_native_tags;
		*self
	}

	/// The maximum number of MPEG frames to walk when computing the stream statistics
	///
	/// Once the limit is hit, the scan stops and the duration is estimated from the frames seen so far.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// // Huge files, I'm fine with an estimate
	/// let parsing_options = ParseOptions::new().probe_frame_limit(Some(1000));
	/// ```
	pub fn probe_frame_limit(&mut self, probe_frame_limit: Option<u32>) -> Self {
		self.probe_frame_limit = probe_frame_limit;
		*self
	}

	/// Whether or not a frame found by searching for a sync pattern must be confirmed
	///
	/// When enabled, a candidate frame is only accepted if another matching frame header
	/// follows it at `offset + frame length`. This avoids misreading junk as audio.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// // My streams are clean, accept the first valid header
	/// let parsing_options = ParseOptions::new().confirm_frame_sync(false);
	/// ```
	pub fn confirm_frame_sync(&mut self, confirm_frame_sync: bool) -> Self {
		self.confirm_frame_sync = confirm_frame_sync;
		*self
	}

	/// Whether or not to read the tags
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// // By default, `read_tags` is enabled. Here, we don't want to read them.
	/// let parsing_options = ParseOptions::new().read_tags(false);
	/// ```
	pub fn read_tags(&mut self, read_tags: bool) -> Self {
		self.read_tags = read_tags;
		*self
	}

	/// Whether or not to read cover art
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}
