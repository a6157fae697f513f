#![allow(missing_docs)]

mod id3v1;
mod id3v2;
mod mpeg;
pub(crate) mod util;
