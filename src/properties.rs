use crate::error::Error;
use crate::result::Result;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;

/// Robocode version the generated descriptors declare
pub const ROBOCODE_VERSION: &str = "1.9.2.1";

pub const KEY_CLASSNAME: &str = "robot.classname";
pub const KEY_AUTHOR: &str = "robot.author";
pub const KEY_VERSION: &str = "robocode.version";
pub const KEY_DESCRIPTION: &str = "robot.description";

/// Contents of the `<Robot>.properties` descriptor Robocode reads from the jar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub classname: String,
    pub author: String,
    pub version: String,
    pub description: String,
}

impl MetadataRecord {
    pub fn new(classname: impl Into<String>, author: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            classname: classname.into(),
            author: author.into(),
            version: ROBOCODE_VERSION.to_string(),
            description: description.into(),
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (KEY_CLASSNAME, &self.classname),
            (KEY_AUTHOR, &self.author),
            (KEY_VERSION, &self.version),
            (KEY_DESCRIPTION, &self.description),
        ]
    }

    /// Render in `java.util.Properties` store format: an empty comment, a
    /// timestamp comment, then one escaped `key=value` line per entry.
    pub fn render(&self, timestamp: OffsetDateTime) -> Result<String> {
        let stamp = timestamp.format(format_description!(
            "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] UTC [year]"
        ))?;

        let mut out = String::new();
        out.push_str("#\n");
        let _ = writeln!(out, "#{stamp}");
        for (key, value) in self.entries() {
            let _ = writeln!(out, "{}={}", escape(key, true), escape(value, false));
        }
        Ok(out)
    }

    /// Write `<dir>/<short_name>.properties` and return its path. The
    /// rendered text is read back first and must yield this record again.
    pub fn write_to(&self, dir: &Path, short_name: &str) -> Result<PathBuf> {
        let text = self.render(OffsetDateTime::now_utc())?;
        self.check_rendered(&text)?;

        let path = dir.join(format!("{short_name}.properties"));
        fs::write(&path, text)?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }

    fn check_rendered(&self, text: &str) -> Result<()> {
        let parsed = Self::parse(text)?;
        if parsed != *self {
            return Err(Error::custom(format!(
                "rendered properties do not read back: expected {self:?}, got {parsed:?}"
            )));
        }
        Ok(())
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut map = parse(content);
        let mut take = |key: &str| {
            map.remove(key)
                .ok_or_else(|| Error::custom(format!("missing property '{key}'")))
        };

        Ok(Self {
            classname: take(KEY_CLASSNAME)?,
            author: take(KEY_AUTHOR)?,
            version: take(KEY_VERSION)?,
            description: take(KEY_DESCRIPTION)?,
        })
    }
}

/// Escape a key or value so the output stays printable ASCII.
fn escape(input: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.chars().enumerate() {
        match c {
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Parse single-line `key=value` / `key: value` / `key value` entries.
/// Line continuations are not supported; `render` never produces them.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut split = chars.len();
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '\\' => i += 1,
                '=' | ':' | ' ' | '\t' | '\x0c' => {
                    split = i;
                    break;
                }
                _ => {}
            }
            i += 1;
        }

        let key: String = chars[..split.min(chars.len())].iter().collect();
        let mut rest = chars.get(split..).unwrap_or(&[]);
        while let Some((first, tail)) = rest.split_first() {
            if matches!(first, ' ' | '\t' | '\x0c') {
                rest = tail;
            } else {
                break;
            }
        }
        if let Some((first, tail)) = rest.split_first()
            && matches!(first, '=' | ':')
        {
            rest = tail;
            while let Some((first, tail)) = rest.split_first() {
                if matches!(first, ' ' | '\t' | '\x0c') {
                    rest = tail;
                } else {
                    break;
                }
            }
        }
        let value: String = rest.iter().collect();

        map.insert(unescape(&key), unescape(&value));
    }

    map
}

fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = input.chars().peekable();

    let flush = |units: &mut Vec<u16>, out: &mut String| {
        if !units.is_empty() {
            out.push_str(&String::from_utf16_lossy(units));
            units.clear();
        }
    };

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush(&mut units, &mut out);
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u16::from_str_radix(&hex, 16) {
                    Ok(unit) => units.push(unit),
                    Err(_) => {
                        flush(&mut units, &mut out);
                        out.push_str(&hex);
                    }
                }
                continue;
            }
            Some('t') => {
                flush(&mut units, &mut out);
                out.push('\t');
            }
            Some('n') => {
                flush(&mut units, &mut out);
                out.push('\n');
            }
            Some('r') => {
                flush(&mut units, &mut out);
                out.push('\r');
            }
            Some('f') => {
                flush(&mut units, &mut out);
                out.push('\x0c');
            }
            Some(other) => {
                flush(&mut units, &mut out);
                out.push(other);
            }
            None => flush(&mut units, &mut out),
        }
    }
    flush(&mut units, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record() -> MetadataRecord {
        MetadataRecord::new("com.netcompany.robocode.MyBot", "Alice", "test bot")
    }

    #[test]
    fn test_render_matches_java_store_layout() {
        let text = record().render(datetime!(2026-10-05 09:03:07 UTC)).unwrap();
        assert_eq!(
            text,
            "#\n\
             #Mon Oct 05 09:03:07 UTC 2026\n\
             robot.classname=com.netcompany.robocode.MyBot\n\
             robot.author=Alice\n\
             robocode.version=1.9.2.1\n\
             robot.description=test bot\n"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape("a b", false), "a b");
        assert_eq!(escape(" lead", false), "\\ lead");
        assert_eq!(escape("a b", true), "a\\ b");
        assert_eq!(escape("x=y:z#!", false), "x\\=y\\:z\\#\\!");
        assert_eq!(escape("back\\slash", false), "back\\\\slash");
        assert_eq!(escape("line\nbreak\ttab", false), "line\\nbreak\\ttab");
        assert_eq!(escape("Knut Nekså", false), "Knut Neks\\u00E5");
        assert_eq!(escape("🤖", false), "\\uD83E\\uDD16");
    }

    #[test]
    fn test_parse_recovers_record() {
        let original = MetadataRecord::new(
            "com.netcompany.robocode.MyBot",
            " Knut Esten Melandsø Nekså",
            "shoots first: asks = later\n🤖",
        );
        let text = original.render(OffsetDateTime::now_utc()).unwrap();
        assert!(text.is_ascii());
        assert_eq!(MetadataRecord::parse(&text).unwrap(), original);
    }

    #[test]
    fn test_parse_separators_and_comments() {
        let map = parse("! comment\n# other\n\na=1\nb : 2\nc 3\n  d=\n");
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
        assert_eq!(map["c"], "3");
        assert_eq!(map["d"], "");
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_check_rendered_detects_mismatch() {
        let text = record().render(OffsetDateTime::now_utc()).unwrap();
        assert!(record().check_rendered(&text).is_ok());

        let other = MetadataRecord::new("com.netcompany.robocode.MyBot", "Bob", "test bot");
        let err = other.check_rendered(&text).unwrap_err();
        assert!(err.to_string().contains("do not read back"));
    }

    #[test]
    fn test_parse_missing_key() {
        let err = MetadataRecord::parse("robot.author=Alice\n").unwrap_err();
        assert!(err.to_string().contains("robot.classname"));
    }

    #[test]
    fn test_write_to() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = record().write_to(tmp.path(), "MyBot").unwrap();
        assert_eq!(path, tmp.path().join("MyBot.properties"));
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(MetadataRecord::parse(&text).unwrap(), record());
    }
}
