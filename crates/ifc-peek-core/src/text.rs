// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of `\X2\...\X0\` escape runs in IFC text values
//!
//! STEP files are 7-bit; IFC encodes characters outside ISO 8859-1 as
//! hexadecimal UTF-16BE code units between `\X2\` and `\X0\`, e.g.
//! `\X2\58C1\X0\` for 壁. Runs are found with `memchr`'s substring search,
//! the same way the entity scanner walks a file.

use ifc_peek_model::DecodeError;
use memchr::memmem;

const OPEN: &[u8] = b"\\X2\\";
const CLOSE: &[u8] = b"\\X0\\";

/// One escape run located in the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EscapeRun {
    /// Byte offset of the opening `\X2\`
    start: usize,
    /// Byte offset just past the closing `\X0\`
    end: usize,
}

impl EscapeRun {
    fn payload<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start + OPEN.len()..self.end - CLOSE.len()]
    }
}

/// Iterator over non-overlapping escape runs, left to right
///
/// Each run ends at the first `\X0\` after its opening delimiter. An opening
/// delimiter without a closing one ends the scan.
struct EscapeRuns<'a> {
    bytes: &'a [u8],
    pos: usize,
    open: memmem::Finder<'static>,
    close: memmem::Finder<'static>,
}

impl<'a> EscapeRuns<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            open: memmem::Finder::new(OPEN),
            close: memmem::Finder::new(CLOSE),
        }
    }
}

impl Iterator for EscapeRuns<'_> {
    type Item = EscapeRun;

    fn next(&mut self) -> Option<EscapeRun> {
        let start = self.pos + self.open.find(&self.bytes[self.pos..])?;
        let body = start + OPEN.len();
        let end = body + self.close.find(&self.bytes[body..])? + CLOSE.len();
        self.pos = end;
        Some(EscapeRun { start, end })
    }
}

/// Decode a hex payload of UTF-16BE code units
fn decode_payload(hex: &str) -> Result<String, DecodeError> {
    if hex.len() % 2 != 0 {
        return Err(DecodeError::OddLength(hex.len()));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
        let hi = hex_digit(hex, i * 2, pair[0])?;
        let lo = hex_digit(hex, i * 2 + 1, pair[1])?;
        bytes.push(hi << 4 | lo);
    }

    if bytes.len() % 2 != 0 {
        return Err(DecodeError::PartialCodeUnit { bytes: bytes.len() });
    }

    let units = bytes
        .chunks_exact(2)
        .map(|unit| u16::from_be_bytes([unit[0], unit[1]]));

    Ok(char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect())
}

fn hex_digit(hex: &str, position: usize, b: u8) -> Result<u8, DecodeError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(DecodeError::InvalidHex {
            position,
            found: char_containing(hex, position),
        }),
    }
}

/// The char whose UTF-8 encoding covers byte `position`
fn char_containing(s: &str, position: usize) -> char {
    let start = (0..=position)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    s[start..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Decode every escape run, failing on the first malformed payload
pub fn try_decode_ifc_text(input: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for run in EscapeRuns::new(input) {
        out.push_str(&input[last..run.start]);
        out.push_str(&decode_payload(run.payload(input))?);
        last = run.end;
    }

    out.push_str(&input[last..]);
    Ok(out)
}

/// Decode every escape run, leaving malformed runs untouched
///
/// A bad payload only affects its own run; it is logged and copied through
/// verbatim while the rest of the string is still decoded.
pub fn decode_ifc_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for run in EscapeRuns::new(input) {
        out.push_str(&input[last..run.start]);
        match decode_payload(run.payload(input)) {
            Ok(decoded) => out.push_str(&decoded),
            Err(e) => {
                log::warn!(
                    "Leaving malformed escape run {:?} as is: {}",
                    &input[run.start..run.end],
                    e
                );
                out.push_str(&input[run.start..run.end]);
            }
        }
        last = run.end;
    }

    out.push_str(&input[last..]);
    out
}

/// [`decode_ifc_text`] for values that may be absent
pub fn decode_optional(input: Option<&str>) -> Option<String> {
    input.map(decode_ifc_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        for s in ["", "Wall-001", "Basic Wall:Interior - 138mm", "a\\b\\X\\c", "\\X2\\0042"] {
            assert_eq!(decode_ifc_text(s), s);
            assert_eq!(try_decode_ifc_text(s).unwrap(), s);
        }
    }

    #[test]
    fn test_single_code_unit() {
        assert_eq!(decode_ifc_text("\\X2\\0042\\X0\\"), "B");
        assert_eq!(decode_ifc_text("x\\X2\\0042\\X0\\y"), "xBy");
    }

    #[test]
    fn test_japanese_name() {
        // 壁 (U+58C1) followed by ASCII
        assert_eq!(decode_ifc_text("\\X2\\58C1\\X0\\-001"), "壁-001");
        // 床スラブ, lower-case hex
        assert_eq!(
            decode_ifc_text("\\X2\\5e8a30b930e930d6\\X0\\"),
            "床スラブ"
        );
    }

    #[test]
    fn test_distinct_and_repeated_runs() {
        let input = "\\X2\\0041\\X0\\-\\X2\\0042\\X0\\-\\X2\\0041\\X0\\";
        assert_eq!(decode_ifc_text(input), "A-B-A");
    }

    #[test]
    fn test_lazy_match_ends_at_first_close() {
        let input = "\\X2\\0041\\X0\\ and \\X0\\";
        assert_eq!(decode_ifc_text(input), "A and \\X0\\");
    }

    #[test]
    fn test_surrogate_pair() {
        // U+1F3E0 HOUSE BUILDING
        assert_eq!(decode_ifc_text("\\X2\\D83CDFE0\\X0\\"), "\u{1F3E0}");
    }

    #[test]
    fn test_unpaired_surrogate_is_replaced() {
        assert_eq!(decode_ifc_text("\\X2\\D83C\\X0\\"), "\u{FFFD}");
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(decode_ifc_text("a\\X2\\\\X0\\b"), "ab");
    }

    #[test]
    fn test_strict_errors() {
        assert_eq!(
            try_decode_ifc_text("\\X2\\004\\X0\\"),
            Err(DecodeError::OddLength(3))
        );
        assert_eq!(
            try_decode_ifc_text("\\X2\\00G2\\X0\\"),
            Err(DecodeError::InvalidHex {
                position: 2,
                found: 'G'
            })
        );
        assert_eq!(
            try_decode_ifc_text("\\X2\\00\\X0\\"),
            Err(DecodeError::PartialCodeUnit { bytes: 1 })
        );
    }

    #[test]
    fn test_invalid_hex_reports_whole_char() {
        // 壁 is three UTF-8 bytes; with one more digit the payload length is even
        assert_eq!(
            try_decode_ifc_text("\\X2\\00壁0\\X0\\"),
            Err(DecodeError::InvalidHex {
                position: 2,
                found: '壁'
            })
        );
        assert_eq!(char_containing("a壁", 2), '壁');
        assert_eq!(char_containing("a壁", 3), '壁');
    }

    #[test]
    fn test_lenient_keeps_only_bad_run() {
        let input = "\\X2\\0041\\X0\\|\\X2\\zz\\X0\\|\\X2\\0042\\X0\\";
        assert_eq!(decode_ifc_text(input), "A|\\X2\\zz\\X0\\|B");
    }

    #[test]
    fn test_optional() {
        assert_eq!(decode_optional(None), None);
        assert_eq!(decode_optional(Some("")), Some(String::new()));
        assert_eq!(
            decode_optional(Some("\\X2\\0042\\X0\\")),
            Some("B".to_string())
        );
    }
}
