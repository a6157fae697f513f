use crate::picture::Picture;

/// Text with a language and a content descriptor
///
/// This is the value of ID3v2 `COMM` and `USLT` frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageText {
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Short content description
	pub description: String,
	/// The actual text
	pub text: String,
}

impl LanguageText {
	/// The language code as a string
	///
	/// Codes that aren't valid UTF-8 are returned as an empty string.
	pub fn language_str(&self) -> &str {
		std::str::from_utf8(&self.language).unwrap_or_default()
	}
}

/// A value with a user-defined description
///
/// This is the value of ID3v2 `TXXX` and `WXXX` frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserText {
	/// The description, used as a secondary key
	pub description: String,
	/// The text or URL
	pub value: String,
}

/// Represents a tag item's value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ItemValue {
	/// Any UTF-8 encoded text
	Text(String),
	/// A number, only used where the container stores one natively (ex. the ID3v1 track number)
	Number(u32),
	/// Any UTF-8 encoded locator of external information
	Locator(String),
	/// Text with a language and description
	Language(LanguageText),
	/// A value with a user-defined description
	UserText(UserText),
	/// An embedded picture
	Picture(Picture),
	/// Binary information, for anything that isn't decoded further
	Binary(Vec<u8>),
}

impl ItemValue {
	/// Returns the value if the variant is `Text`
	pub fn text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the value if the variant is `Number`
	pub fn number(&self) -> Option<u32> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Returns the value if the variant is `Locator`
	pub fn locator(&self) -> Option<&str> {
		match self {
			Self::Locator(locator) => Some(locator),
			_ => None,
		}
	}

	/// Returns the value if the variant is `Language`
	pub fn language_text(&self) -> Option<&LanguageText> {
		match self {
			Self::Language(language_text) => Some(language_text),
			_ => None,
		}
	}

	/// Returns the value if the variant is `UserText`
	pub fn user_text(&self) -> Option<&UserText> {
		match self {
			Self::UserText(user_text) => Some(user_text),
			_ => None,
		}
	}

	/// Returns the value if the variant is `Picture`
	pub fn picture(&self) -> Option<&Picture> {
		match self {
			Self::Picture(picture) => Some(picture),
			_ => None,
		}
	}

	/// Returns the value if the variant is `Binary`
	pub fn binary(&self) -> Option<&[u8]> {
		match self {
			Self::Binary(bin) => Some(bin),
			_ => None,
		}
	}
}

/// A single key/value pair of a [`Tag`](super::Tag)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagItem {
	pub(crate) key: String,
	pub(crate) value: ItemValue,
}

impl TagItem {
	/// Create a new `TagItem`
	pub fn new(key: impl Into<String>, value: ItemValue) -> Self {
		Self {
			key: key.into(),
			value,
		}
	}

	/// The item's key, in the vocabulary of its container (ex. "TPE1" or "artist")
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The item's value
	pub fn value(&self) -> &ItemValue {
		&self.value
	}

	/// Consumes the item, returning its value
	pub fn into_value(self) -> ItemValue {
		self.value
	}
}
