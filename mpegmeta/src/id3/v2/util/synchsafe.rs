//! Utilities for working with unsynchronised ID3v2 content
//!
//! ID3v2 avoids false MPEG frame syncs in two ways:
//!
//! * Sizes are stored as *synchsafe* integers, where the most significant bit of every byte is
//!   always 0. A 32-bit synchsafe integer holds 28 bits of information.
//! * Content may be *unsynchronised*, where a `0x00` is inserted after every `0xFF`.

use crate::error::Result;
use crate::macros::err;

/// Reverse the unsynchronisation scheme, removing any `0x00` that follows a `0xFF`
///
/// # Examples
///
/// ```rust
/// use mpegmeta::id3::v2::util::synchsafe::remove_unsynchronisation;
///
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let mut content = vec![0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
/// remove_unsynchronisation(&mut content);
///
/// assert_eq!(content, [0xFF, 0x1A, 0xFF, 0x15]);
/// ```
pub fn remove_unsynchronisation(content: &mut Vec<u8>) {
	let mut previous = 0;
	content.retain(|&byte| {
		let keep = !(previous == 0xFF && byte == 0);

		// A removed zero can't start another pair
		previous = if keep { byte } else { 0 };
		keep
	});
}

/// An integer that can be converted to and from its synchsafe form
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 7 bits per byte
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> mpegmeta::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// assert!(0x1000_0000_u32.synch().is_err());
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Decode a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use mpegmeta::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// // The size bytes of a 257 byte tag
	/// let size = u32::from_be_bytes([0x00, 0x00, 0x02, 0x01]);
	/// assert_eq!(size.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > 0x0FFF_FFFF {
			err!(TooMuchData);
		}

		Ok((self & 0x7F)
			| ((self & 0x3F80) << 1)
			| ((self & 0x001F_C000) << 2)
			| ((self & 0x0FE0_0000) << 3))
	}

	fn unsynch(self) -> Self {
		(self & 0x7F)
			| ((self & 0x7F00) >> 1)
			| ((self & 0x007F_0000) >> 2)
			| ((self & 0x7F00_0000) >> 3)
	}
}

#[cfg(test)]
mod tests {
	use super::{SynchsafeInteger, remove_unsynchronisation};

	#[test_log::test]
	fn unsynchronisation() {
		let mut content = vec![0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0xE0, 0xFF];
		remove_unsynchronisation(&mut content);

		// Only the zero directly after each 0xFF is removed
		assert_eq!(content, [0xFF, 0x00, 0xFF, 0xFF, 0xE0, 0xFF]);
	}

	#[test_log::test]
	fn synchsafe_round_trip() {
		let mut size = 0u32;
		while size < 1 << 28 {
			let synch = size.synch().unwrap();
			assert_eq!(synch & 0x8080_8080, 0, "high bit set for {size:#x}");
			assert_eq!(synch.unsynch(), size);

			// Spread across the whole 28-bit range
			size = size * 3 + 1;
		}

		for size in [0, 1, 0x7F, 0x80, 0x3FFF, 0x4000, 0x0FFF_FFFF] {
			assert_eq!(size.synch().unwrap().unsynch(), size);
		}
	}

	#[test_log::test]
	fn synchsafe_is_not_plain() {
		// A plain big-endian read of these bytes would be 0x0201 (513)
		assert_eq!(0x0000_0201_u32.unsynch(), 257);
		assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0x0FFF_FFFF);
	}
}
