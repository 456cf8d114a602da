/*!
 * Character reference decoding for caption markup.
 *
 * Timed-XML captions and track lists escape a handful of characters. Only
 * the five named references below plus numeric references are decoded;
 * anything else (e.g. `&nbsp;`) is left verbatim.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// @const: Named references, applied in this order before numeric ones
const NAMED_REFERENCES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

static DECIMAL_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#([0-9]+);").unwrap());

static HEX_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());

/// Decode named and numeric character references in caption text
///
/// The order is fixed: `&amp;` first, so `&amp;#39;` ends up as `'`. The
/// upstream double-escapes apostrophes that way in auto-generated tracks.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (reference, replacement) in NAMED_REFERENCES {
        if decoded.contains(reference) {
            decoded = decoded.replace(reference, replacement);
        }
    }

    let decoded = DECIMAL_REFERENCE.replace_all(&decoded, |caps: &Captures| {
        codepoint_to_string(u32::from_str_radix(&caps[1], 10).ok())
    });

    HEX_REFERENCE
        .replace_all(&decoded, |caps: &Captures| {
            codepoint_to_string(u32::from_str_radix(&caps[1], 16).ok())
        })
        .into_owned()
}

// Out-of-range and surrogate codepoints decode to U+0000
fn codepoint_to_string(codepoint: Option<u32>) -> String {
    codepoint
        .and_then(char::from_u32)
        .unwrap_or('\0')
        .to_string()
}

