//! Front-matter extraction
//!
//! A document may open with a block of `key: value` lines fenced by two
//! lines holding exactly `---`. This is the only front-matter reader in
//! the crate: the build path and the display fallback both go through
//! [`extract`].

use indexmap::IndexMap;

/// Ordered `key -> value` pairs read from a front-matter block
pub type Metadata = IndexMap<String, String>;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Split a raw document into its metadata and the remaining body.
///
/// Returns empty metadata and the untouched input when the document does
/// not start with a well-formed block. Lines inside the block without a
/// `:` are skipped. A leading byte-order mark is ignored.
pub fn extract(raw: &str) -> (Metadata, &str) {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    match find_block(text) {
        Some((block, body)) => (parse_block(block), body),
        None => (Metadata::new(), raw),
    }
}

/// Locate the block; returns (inner block text, body)
fn find_block(raw: &str) -> Option<(&str, &str)> {
    let (first, mut rest) = split_line(raw)?;
    if first != DELIMITER {
        return None;
    }

    let block_start = raw.len() - rest.len();
    loop {
        let line_start = raw.len() - rest.len();
        let (line, after) = split_line(rest)?;
        if line == DELIMITER {
            return Some((&raw[block_start..line_start], after));
        }
        rest = after;
    }
}

/// Take one line off the front, without its terminator.
///
/// Returns `None` once the input is exhausted.
fn split_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    let (line, rest) = match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    };
    Some((line.strip_suffix('\r').unwrap_or(line), rest))
}

fn parse_block(block: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        metadata.insert(key.to_string(), value.trim().to_string());
    }
    metadata
}
