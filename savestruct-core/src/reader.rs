//! Container lookup.
//!
//! Lookup is a plain substring search: the first `<tag>` in the buffer wins,
//! and the container ends at the first `</tag>` after it.

use crate::error::{ReadError, ReadResult};
use std::str::FromStr;

/// Returns the text between `<tag>` and the next `</tag>`.
///
/// # Errors
/// `MissingOpenTag` if `<tag>` does not occur, `MissingCloseTag` if no
/// `</tag>` follows it.
///
/// # Example
/// ```
/// use savestruct_core::{ReadError, find_container};
///
/// let buffer = "<gps>\n<x>1</x>\n</gps>\n";
/// assert_eq!(find_container(buffer, "x"), Ok("1"));
/// assert_eq!(find_container(buffer, "z"), Err(ReadError::missing_open("z")));
/// ```
pub fn find_container<'a>(buffer: &'a str, tag: &str) -> ReadResult<&'a str> {
    let open = format!("<{tag}>");
    let start = buffer
        .find(&open)
        .ok_or_else(|| ReadError::missing_open(tag))?
        + open.len();

    let close = format!("</{tag}>");
    let end = buffer[start..]
        .find(&close)
        .ok_or_else(|| ReadError::missing_close(tag))?
        + start;

    Ok(&buffer[start..end])
}

/// Finds `tag` and parses its trimmed text.
///
/// # Errors
/// The lookup errors of [`find_container`], or `InvalidValue` if the text
/// does not parse.
pub fn read_value<T: FromStr>(buffer: &str, tag: &str) -> ReadResult<T> {
    let text = find_container(buffer, tag)?.trim();
    text.parse()
        .map_err(|_| ReadError::invalid_value(tag, text))
}

/// Returns the tag of array element `index`.
///
/// `[` cannot appear in a C identifier, so element tags never collide with
/// field tags.
#[must_use]
pub fn element_tag(tag: &str, index: usize) -> String {
    format!("{tag}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_container() {
        let buffer = "<a>\n<b>12</b>\n</a>\n";
        assert_eq!(find_container(buffer, "a"), Ok("\n<b>12</b>\n"));
        assert_eq!(find_container(buffer, "b"), Ok("12"));
    }

    #[test]
    fn test_missing_open_vs_close() {
        assert_eq!(
            find_container("<other>1</other>", "a"),
            Err(ReadError::missing_open("a"))
        );
        assert_eq!(
            find_container("<a>1 and then nothing", "a"),
            Err(ReadError::missing_close("a"))
        );
    }

    #[test]
    fn test_close_before_open_is_missing_close() {
        assert_eq!(
            find_container("</a> <a>1", "a"),
            Err(ReadError::missing_close("a"))
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(find_container("<v>1</v><v>2</v>", "v"), Ok("1"));
    }

    #[test]
    fn test_prefix_tags_do_not_collide() {
        let buffer = "<xy>9</xy>\n<x>1</x>\n";
        assert_eq!(find_container(buffer, "x"), Ok("1"));
    }

    #[test]
    fn test_nested_same_tag_closes_early() {
        let buffer = "<outer>\n<a>\n<a>5</a>\n</a>\n</outer>\n";
        let body = find_container(buffer, "a");
        assert_eq!(body, Ok("\n<a>5"));
        assert_eq!(
            body.and_then(|inner| find_container(inner, "a")),
            Err(ReadError::missing_close("a"))
        );
    }

    #[test]
    fn test_read_value() {
        assert_eq!(read_value::<i32>("<n> -42 </n>", "n"), Ok(-42));
        assert_eq!(
            read_value::<u8>("<n>300</n>", "n"),
            Err(ReadError::invalid_value("n", "300"))
        );
        assert_eq!(read_value::<f32>("<f>0.5</f>", "f"), Ok(0.5));
    }

    #[test]
    fn test_element_tag() {
        assert_eq!(element_tag("slots", 3), "slots[3]");
        let buffer = "<slots[1]>a</slots[1]>\n<slots[10]>b</slots[10]>\n";
        assert_eq!(find_container(buffer, &element_tag("slots", 1)), Ok("a"));
        assert_eq!(find_container(buffer, &element_tag("slots", 10)), Ok("b"));
    }
}
