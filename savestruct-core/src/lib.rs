//! # Savestruct Core
//!
//! Runtime support for code generated by savestruct.
//!
//! Records are saved as tag-delimited text:
//!
//! ```text
//! <pos>
//! <x>1.5</x>
//! <y>-2</y>
//! </pos>
//! ```
//!
//! This crate provides:
//! - [`TagWriter`], the growable buffer save routines append to
//! - [`find_container`], the substring lookup read routines are built on
//! - `save_*`/`read_*` routines for integers, strings and arrays
//! - The [`Persist`] trait implemented by generated records
//! - [`FixedString`] for fixed-capacity character buffers
//!
//! No escaping is performed. A value containing the literal text of a tag
//! confuses lookup. The same holds for a record field that shares its name
//! with a field of its own nested record: saving gives
//! `<a>\n<a>5</a>\n</a>`, the outer lookup ends at the inner `</a>`, and
//! the nested read fails with `MissingCloseTag`. Generated code ignores
//! per-field read errors, so that field keeps its previous value.

pub mod error;
pub mod persist;
pub mod primitives;
pub mod reader;
pub mod string;
pub mod writer;

pub use error::{ReadError, ReadResult};
pub use persist::Persist;
pub use primitives::{
    read_array, read_i8, read_i16, read_i32, read_string, read_u8, read_u16, read_u32,
    save_array, save_i8, save_i16, save_i32, save_string, save_u8, save_u16, save_u32,
};
pub use reader::{element_tag, find_container, read_value};
pub use string::FixedString;
pub use writer::TagWriter;

/// Saves `value` under `tag` into a fresh string.
#[must_use]
pub fn to_container<T: Persist + ?Sized>(tag: &str, value: &T) -> String {
    let mut out = TagWriter::new();
    value.save(&mut out, tag);
    out.into_string()
}
