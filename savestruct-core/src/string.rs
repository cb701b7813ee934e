//! Fixed-capacity strings.

use std::fmt;
use std::ops::Deref;

/// Text with at most `N` bytes, the counterpart of a C `char name[N]`.
///
/// Longer input is truncated at the last character boundary that fits.
///
/// # Example
/// ```
/// use savestruct_core::FixedString;
///
/// let name = FixedString::<4>::new("Tuxedo");
/// assert_eq!(name, "Tuxe");
/// assert_eq!(name.capacity(), 4);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedString<const N: usize> {
    value: String,
}

impl<const N: usize> FixedString<N> {
    /// Creates a string from `text`, truncated to `N` bytes.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            value: truncate(text, N).to_string(),
        }
    }

    /// Replaces the contents with `text`, truncated to `N` bytes.
    pub fn set(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(truncate(text, N));
    }

    /// Returns the contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the maximum length in bytes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Empties the string.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl<const N: usize> Deref for FixedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl<const N: usize> AsRef<str> for FixedString<N> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
