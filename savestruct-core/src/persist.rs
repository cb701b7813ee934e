//! The [`Persist`] trait.

use crate::error::ReadResult;
use crate::primitives::{read_array, read_string, save_array, save_string};
use crate::reader::read_value;
use crate::string::FixedString;
use crate::writer::TagWriter;

/// A value that can be saved to and read from a tagged container.
///
/// Generated records implement this by delegating to their generated
/// `save_<name>`/`read_<name>` functions. Types named in a header but not
/// generated (for example a hand-written vector type) implement it by hand.
///
/// # Example
/// ```
/// use savestruct_core::{Persist, ReadResult, TagWriter};
///
/// #[derive(Default)]
/// struct Angle(f32);
///
/// impl Persist for Angle {
///     fn save(&self, out: &mut TagWriter, tag: &str) {
///         self.0.save(out, tag);
///     }
///
///     fn read(&mut self, buffer: &str, tag: &str) -> ReadResult {
///         self.0.read(buffer, tag)
///     }
/// }
/// ```
pub trait Persist {
    /// Appends `self` to `out` under `tag`.
    fn save(&self, out: &mut TagWriter, tag: &str);

    /// Reads the value tagged `tag` in `buffer` into `self`.
    ///
    /// On error `self` keeps whatever value it had.
    ///
    /// # Errors
    /// Returns a `ReadError` if the tag is missing or its text is invalid.
    fn read(&mut self, buffer: &str, tag: &str) -> ReadResult;
}

macro_rules! persist_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Persist for $ty {
                fn save(&self, out: &mut TagWriter, tag: &str) {
                    out.field(tag, self);
                }

                fn read(&mut self, buffer: &str, tag: &str) -> ReadResult {
                    *self = read_value(buffer, tag)?;
                    Ok(())
                }
            }
        )*
    };
}

persist_display!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, bool);

impl<const N: usize> Persist for FixedString<N> {
    fn save(&self, out: &mut TagWriter, tag: &str) {
        save_string(out, tag, self);
    }

    fn read(&mut self, buffer: &str, tag: &str) -> ReadResult {
        read_string(buffer, tag, self)
    }
}

impl<T: Persist, const N: usize> Persist for [T; N] {
    fn save(&self, out: &mut TagWriter, tag: &str) {
        save_array(out, tag, self);
    }

    fn read(&mut self, buffer: &str, tag: &str) -> ReadResult {
        read_array(buffer, tag, self)
    }
}
