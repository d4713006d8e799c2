//! # Clip File Format
//!
//! A `.clip` file is a small length-prefixed binary container:
//!
//! ```text
//! ┌───────┬──────────┬────┬────────┬──────────┬─────────┬──────────┬──────────┐
//! │ 99 69 │ "0000"   │ SL │ suffix │ CL       │ content │ VL       │ vars     │
//! │ magic │ reserved │ 2  │ SL     │ 8        │ CL      │ 8        │ VL       │
//! └───────┴──────────┴────┴────────┴──────────┴─────────┴──────────┴──────────┘
//! ```
//!
//! Length fields are lowercase hexadecimal ASCII, zero-padded to their fixed
//! width. The variables blob is the `k1=v1,k2=v2` form from
//! [`crate::variables::format_variables`].
//!
//! Content is stored verbatim, but CRLF pairs are folded to LF when decoding so
//! clips saved on Windows paste identically everywhere.

use crate::error::{ClipError, Result};
use crate::variables::{self, Variables};

/// Identifies a clip file.
pub const MAGIC: [u8; 2] = [0x99, 0x69];

/// Reserved header region, currently always ASCII zeros.
pub const RESERVED: &[u8; 4] = b"0000";

pub const SUFFIX_LEN_WIDTH: u32 = 2;
pub const CONTENT_LEN_WIDTH: u32 = 8;
pub const VARIABLES_LEN_WIDTH: u32 = 8;

/// The persisted parts of a clip. The name is not stored; it is the file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    pub suffix: String,
    pub content: Vec<u8>,
    pub variables: Variables,
}

/// Formats the length of `datum` as a `width`-digit lowercase hex string.
///
/// Fails when the length does not fit in `width` hex digits. Widths of 16 or
/// more can hold any `usize`.
pub fn header_for(datum: &[u8], width: u32) -> Result<String> {
    let size = datum.len();
    if let Some(limit) = 16u64.checked_pow(width) {
        if size as u64 >= limit {
            return Err(ClipError::SizeLimitExceeded { size });
        }
    }
    Ok(format!("{:0width$x}", size, width = width as usize))
}

/// Serializes a record into the on-disk byte layout.
///
/// Variables are written in key order, since [`Variables`] is ordered by key.
/// Clips written by older releases list them in discovery order instead, so
/// the blob bytes can differ for the same content while decoding to the same
/// mapping.
pub fn encode(suffix: &str, content: &[u8], vars: &Variables) -> Result<Vec<u8>> {
    let var_list = variables::format_variables(vars);

    let mut out = Vec::with_capacity(
        MAGIC.len() + RESERVED.len() + 18 + suffix.len() + content.len() + var_list.len(),
    );
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(RESERVED);

    out.extend_from_slice(header_for(suffix.as_bytes(), SUFFIX_LEN_WIDTH)?.as_bytes());
    out.extend_from_slice(suffix.as_bytes());

    out.extend_from_slice(header_for(content, CONTENT_LEN_WIDTH)?.as_bytes());
    out.extend_from_slice(content);

    out.extend_from_slice(header_for(var_list.as_bytes(), VARIABLES_LEN_WIDTH)?.as_bytes());
    out.extend_from_slice(var_list.as_bytes());

    Ok(out)
}

/// Parses the on-disk byte layout.
pub fn decode(data: &[u8]) -> Result<ClipRecord> {
    if data.get(..MAGIC.len()) != Some(&MAGIC[..]) {
        return Err(ClipError::UnsupportedFile);
    }

    let mut cursor = Cursor::new(&data[MAGIC.len()..]);
    cursor.take(RESERVED.len(), "reserved header")?;

    let size = cursor.take_len(SUFFIX_LEN_WIDTH, "suffix length")?;
    let suffix = String::from_utf8(cursor.take(size, "suffix")?.to_vec())?;

    let size = cursor.take_len(CONTENT_LEN_WIDTH, "content length")?;
    let content = normalize_line_endings(cursor.take(size, "content")?);

    let size = cursor.take_len(VARIABLES_LEN_WIDTH, "variables length")?;
    let variables = if size == 0 {
        Variables::new()
    } else {
        let body = String::from_utf8(cursor.take(size, "variables")?.to_vec())?;
        variables::parse_variables(&body)?
    };

    Ok(ClipRecord {
        suffix,
        content,
        variables,
    })
}

/// Replaces every `\r\n` pair with `\n`.
pub fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().peekable();
    while let Some(&b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

/// Forward-only reader over the bytes after the magic.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                ClipError::Format(format!(
                    "{} truncated: expected {} bytes, found {}",
                    what,
                    n,
                    self.data.len() - self.pos
                ))
            })?;
        let data: &'a [u8] = self.data;
        let slice = &data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_len(&mut self, width: u32, what: &str) -> Result<usize> {
        let digits = self.take(width as usize, what)?;
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(ClipError::Format(format!(
                "{} is not a hex number: {:?}",
                what,
                String::from_utf8_lossy(digits)
            )));
        }
        // Only ASCII hex digits reach this point
        let text = std::str::from_utf8(digits).map_err(|e| ClipError::Format(e.to_string()))?;
        usize::from_str_radix(text, 16).map_err(|e| ClipError::Format(format!("{}: {}", what, e)))
    }
}
