use std::io;

use color_eyre::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Renders the urls as one line of JSON, `["http://a", "http://b"]`.
///
/// Items are separated by `", "` and anything outside ASCII is written as a
/// `\uXXXX` escape, which is the layout most JSON tooling prints by default.
pub fn url_list(urls: &[String]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    urls.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
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

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
