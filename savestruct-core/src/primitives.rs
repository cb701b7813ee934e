//! Save and read routines called by generated code.
//!
//! Every routine takes the tag to write or look up. Read routines only
//! assign on success, so a field missing from an older save keeps its
//! current value.

use crate::error::ReadResult;
use crate::persist::Persist;
use crate::reader::{element_tag, find_container, read_value};
use crate::string::FixedString;
use crate::writer::TagWriter;

macro_rules! int_routines {
    ($($save:ident, $read:ident, $ty:ty);* $(;)?) => {
        $(
            #[doc = concat!("Saves a `", stringify!($ty), "` under `tag`.")]
            pub fn $save(out: &mut TagWriter, tag: &str, value: &$ty) {
                out.field(tag, value);
            }

            #[doc = concat!("Reads a `", stringify!($ty), "` tagged `tag` into `target`.")]
            ///
            /// # Errors
            /// Returns a `ReadError` if the tag is missing or the value does
            /// not fit the type.
            pub fn $read(buffer: &str, tag: &str, target: &mut $ty) -> ReadResult {
                *target = read_value(buffer, tag)?;
                Ok(())
            }
        )*
    };
}

int_routines! {
    save_i8, read_i8, i8;
    save_u8, read_u8, u8;
    save_i16, read_i16, i16;
    save_u16, read_u16, u16;
    save_i32, read_i32, i32;
    save_u32, read_u32, u32;
}

/// Saves a fixed-capacity string as one run of text.
pub fn save_string<const N: usize>(out: &mut TagWriter, tag: &str, value: &FixedString<N>) {
    out.field(tag, value);
}

/// Reads a string tagged `tag` into `target`, truncated to `N` bytes.
///
/// The text between the tags is taken as is, whitespace included.
///
/// # Errors
/// Returns a `ReadError` if the tag is missing.
pub fn read_string<const N: usize>(
    buffer: &str,
    tag: &str,
    target: &mut FixedString<N>,
) -> ReadResult {
    target.set(find_container(buffer, tag)?);
    Ok(())
}

/// Saves every element of `values`, element `i` tagged `tag[i]`, inside a
/// `tag` container.
pub fn save_array<T: Persist>(out: &mut TagWriter, tag: &str, values: &[T]) {
    out.open(tag);
    for (i, value) in values.iter().enumerate() {
        value.save(out, &element_tag(tag, i));
    }
    out.close(tag);
}

/// Reads the `tag` container into `values` element by element.
///
/// Elements that are missing or invalid keep their current value; extra
/// elements in the buffer are ignored.
///
/// # Errors
/// Returns a `ReadError` only if the `tag` container itself is missing or
/// unterminated.
pub fn read_array<T: Persist>(buffer: &str, tag: &str, values: &mut [T]) -> ReadResult {
    let body = find_container(buffer, tag)?;
    for (i, value) in values.iter_mut().enumerate() {
        let _ = value.read(body, &element_tag(tag, i));
    }
    Ok(())
}
