//! Comment stripping for C source text.
//!
//! Removes `//` line comments and `/* ... */` block comments while keeping
//! one output line per input line, so positions in the cleaned text map
//! back to the same line numbers in the original header.

/// Line-at-a-time comment remover.
///
/// Tracks whether a block comment is still open between calls to
/// [`CommentScanner::scan_line`]. An unterminated block comment swallows
/// the rest of the input.
#[derive(Debug, Default, Clone)]
pub struct CommentScanner {
    in_block: bool,
}

impl CommentScanner {
    /// Creates a scanner outside of any comment.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_block: false }
    }

    /// Returns true if a block comment is open.
    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.in_block
    }

    /// Strips comments from a single line.
    ///
    /// Text before a block opener and after a block closer is kept. A
    /// removed block comment leaves a single space behind so the tokens
    /// around it stay separated.
    pub fn scan_line(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(end) => {
                        self.in_block = false;
                        rest = &rest[end + 2..];
                    }
                    None => return out,
                }
            } else {
                let line_comment = rest.find("//");
                let block_comment = rest.find("/*");
                match (line_comment, block_comment) {
                    (Some(l), Some(b)) if l < b => {
                        out.push_str(&rest[..l]);
                        return out;
                    }
                    (Some(l), None) => {
                        out.push_str(&rest[..l]);
                        return out;
                    }
                    (_, Some(b)) => {
                        out.push_str(&rest[..b]);
                        out.push(' ');
                        self.in_block = true;
                        rest = &rest[b + 2..];
                    }
                    (None, None) => {
                        out.push_str(rest);
                        return out;
                    }
                }
            }
        }
    }

    /// Strips comments from every line of `text`.
    pub fn scan_lines(&mut self, text: &str) -> Vec<String> {
        text.lines().map(|line| self.scan_line(line)).collect()
    }
}

/// Removes all comments from `text`, keeping its line structure.
///
/// The result has exactly as many lines as the input.
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let mut scanner = CommentScanner::new();
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&scanner.scan_line(line));
    }
    out
}
