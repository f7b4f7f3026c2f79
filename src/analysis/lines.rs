//! Line splitting for input files.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
//! start an extra empty line. Bytes that are not valid UTF-8 are decoded as
//! U+FFFD instead of failing the read.

use std::io::{self, Read};

/// Read everything from `reader`, replacing invalid UTF-8 sequences.
pub fn read_lossy<R: Read>(mut reader: R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Split text into lines on `\n`, `\r\n` and `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_all_line_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a b\rc d\r"), vec!["a b", "c d"]);
    }

    #[test]
    fn test_trailing_and_blank_lines() {
        assert_eq!(split_lines("one\n"), vec!["one"]);
        assert_eq!(split_lines("one\n\ntwo"), vec!["one", "", "two"]);
        assert_eq!(split_lines("\r\n\r"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_lossy_replaces_invalid_bytes() {
        let text = read_lossy(Cursor::new(b"caf\xe9 au lait".to_vec())).unwrap();
        assert_eq!(text, "caf\u{FFFD} au lait");
    }
}
