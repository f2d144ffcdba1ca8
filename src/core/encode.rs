//! core::encode
//!
//! JSON encoders for the two outputs of a metadata update.
//!
//! # Log line
//!
//! The stdout line is the document serialized twice. The inner pass uses
//! `", "` and `": "` separators and escapes every non-ASCII character as
//! `\uXXXX`, so the resulting line is plain ASCII. The outer pass encodes
//! that text as a JSON string literal.
//!
//! # File layout
//!
//! The metadata file is written with 4-space indentation and non-ASCII
//! characters kept literally.
//!
//! Both encoders sort object keys at every depth, regardless of how the
//! underlying map orders them.

use std::collections::BTreeMap;
use std::io;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;

/// Indentation used for the metadata file.
pub const FILE_INDENT: &[u8] = b"    ";

/// Serialization view of a [`Value`] with object keys in sorted order.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => {
                let sorted: BTreeMap<&str, Sorted<'_>> =
                    map.iter().map(|(k, v)| (k.as_str(), Sorted(v))).collect();
                sorted.serialize(serializer)
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Sorted(item))?;
                }
                seq.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

/// Single-line formatter with spaced separators and ASCII-only output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLineFormatter;

impl Formatter for LogLineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn serialize_with<F: Formatter>(value: &Value, formatter: F) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Sorted(value).serialize(&mut ser)?;
    // Both formatters only ever emit valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize a value on one line with spaced separators and ASCII escapes.
///
/// # Example
///
/// ```
/// use prepare_metadata::core::encode::to_log_json;
///
/// let value = serde_json::json!({"name": "Hü", "a": [1, 2]});
/// assert_eq!(to_log_json(&value).unwrap(), r#"{"a": [1, 2], "name": "H\u00fc"}"#);
/// ```
pub fn to_log_json(value: &Value) -> serde_json::Result<String> {
    serialize_with(value, LogLineFormatter)
}

/// Serialize a value twice: first as log JSON, then as a JSON string literal.
pub fn to_double_encoded(value: &Value) -> serde_json::Result<String> {
    let inner = to_log_json(value)?;
    serde_json::to_string(&inner)
}

/// Serialize a value for the metadata file.
pub fn to_file_json(value: &Value) -> serde_json::Result<String> {
    serialize_with(value, PrettyFormatter::with_indent(FILE_INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_json_uses_spaced_separators() {
        let value = json!({"b": 1, "a": [true, null, "x"]});
        assert_eq!(
            to_log_json(&value).unwrap(),
            r#"{"a": [true, null, "x"], "b": 1}"#
        );
    }

    #[test]
    fn log_json_escapes_non_ascii() {
        let value = json!({"text": "café ☕"});
        assert_eq!(
            to_log_json(&value).unwrap(),
            r#"{"text": "caf\u00e9 \u2615"}"#
        );
    }

    #[test]
    fn log_json_escapes_astral_as_surrogate_pair() {
        let value = json!("🎉");
        assert_eq!(to_log_json(&value).unwrap(), r#""\ud83c\udf89""#);
    }

    #[test]
    fn log_json_keeps_standard_escapes() {
        let value = json!("line\n\"quoted\"\\");
        assert_eq!(to_log_json(&value).unwrap(), r#""line\n\"quoted\"\\""#);
    }

    #[test]
    fn nested_keys_are_sorted() {
        let value = json!({"z": {"y": 1, "x": [{"d": 0, "c": 0}]}, "a": 0});
        assert_eq!(
            to_log_json(&value).unwrap(),
            r#"{"a": 0, "z": {"x": [{"c": 0, "d": 0}], "y": 1}}"#
        );
    }

    #[test]
    fn double_encoding_parses_back() {
        let value = json!({"changelog": "Fixed bug\n", "name": "Hue"});
        let line = to_double_encoded(&value).unwrap();

        let inner: String = serde_json::from_str(&line).unwrap();
        let parsed: Value = serde_json::from_str(&inner).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn file_json_keeps_non_ascii_literal() {
        let value = json!({"name": "Hü"});
        assert_eq!(to_file_json(&value).unwrap(), "{\n    \"name\": \"Hü\"\n}");
    }

    #[test]
    fn file_json_empty_containers() {
        let value = json!({"list": [], "map": {}});
        insta::assert_snapshot!(to_file_json(&value).unwrap(), @r###"
        {
            "list": [],
            "map": {}
        }
        "###);
    }
}
