//! Native tag containers
//!
//! A [`Tag`] holds the entries of a single container in its own vocabulary (ex. "TPE1" for
//! an ID3v2 artist), in the order they were read. Keys may repeat, each occurrence of a
//! multi-valued field being a separate [`TagItem`].

mod item;
mod tag_type;

pub use item::{ItemValue, LanguageText, TagItem, UserText};
pub use tag_type::TagType;

/// An ordered multi-map of a tag container's entries
///
/// # Examples
///
/// ```rust,no_run
/// use mpegmeta::config::ParseOptions;
///
/// # fn main() -> mpegmeta::error::Result<()> {
/// let result = mpegmeta::read_from_path("foo.mp3", ParseOptions::new())?;
///
/// for tag in result.native() {
/// 	println!("{}:", tag.tag_type());
/// 	for item in tag.items() {
/// 		println!("\t{} = {:?}", item.key(), item.value());
/// 	}
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
	tag_type: TagType,
	pub(crate) items: Vec<TagItem>,
}

impl Tag {
	/// Create an empty `Tag`
	pub fn new(tag_type: TagType) -> Self {
		Self {
			tag_type,
			items: Vec::new(),
		}
	}

	/// The type and version of the container the items came from
	pub fn tag_type(&self) -> TagType {
		self.tag_type
	}

	/// Every item, in the order they were read
	pub fn items(&self) -> &[TagItem] {
		&self.items
	}

	/// Every value stored under `key`, in order
	pub fn get<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ItemValue> + 'a {
		self.items
			.iter()
			.filter(move |item| item.key == key)
			.map(TagItem::value)
	}

	/// Every text value stored under `key`, in order
	pub fn get_strings<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.get(key).filter_map(ItemValue::text)
	}

	/// The first text value stored under `key`
	pub fn get_string(&self, key: &str) -> Option<&str> {
		self.items
			.iter()
			.filter(|item| item.key == key)
			.find_map(|item| item.value().text())
	}

	/// Append an item, keeping any existing items with the same key
	pub fn push(&mut self, item: TagItem) {
		self.items.push(item);
	}

	pub(crate) fn push_value(&mut self, key: impl Into<String>, value: ItemValue) {
		self.items.push(TagItem::new(key, value));
	}

	/// The number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the tag has no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl IntoIterator for Tag {
	type Item = TagItem;
	type IntoIter = std::vec::IntoIter<TagItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a Tag {
	type Item = &'a TagItem;
	type IntoIter = std::slice::Iter<'a, TagItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
