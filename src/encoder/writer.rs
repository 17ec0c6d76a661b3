//! Recursive writer for the variables grammar.
//!
//! Grammar (informal):
//!
//! ```text
//! value  := bare | text | int | bool | list | record
//! list   := "List(" [value ("," value)*] ")"
//! record := "(" [key ":" value ("," key ":" value)*] ")"
//! ```
//!
//! Structural characters are never escaped. Only [`Value::Text`] leaves go
//! through [`escape_text`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::value::{Record, Value};

/// Everything except RFC 3986 unreserved characters.
const TEXT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a free-text leaf. Space becomes `%20`, never `+`.
pub fn escape_text(text: &str) -> String {
    utf8_percent_encode(text, TEXT_ESCAPE).to_string()
}

/// Render a value tree to its textual form.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Bare(s) => out.push_str(s),
        Value::Text(s) => out.push_str(&escape_text(s)),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::List(items) => {
            out.push_str("List(");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(')');
        }
        Value::Record(record) => write_record(out, record),
    }
}

fn write_record(out: &mut String, record: &Record) {
    out.push('(');
    for (i, (key, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(key);
        out.push(':');
        write_value(out, value);
    }
    out.push(')');
}
