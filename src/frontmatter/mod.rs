//! Frontmatter allow-list validation for Markdown pages.
//!
//! A page may open with a YAML block fenced by `---` lines. Only the keys in
//! [`PERMITTED_KEYS`] are accepted there; anything else stops the build.
//! Pages without a leading block are always valid.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};

use crate::error::{self, Result};


/// Keys a page is allowed to declare in its frontmatter.
pub const PERMITTED_KEYS: &[&str] = &["title", "description", "hide"];

/// Leading `---` line, body, closing `---` line. The lazy body stops at the
/// first closing delimiter, and the closing line must end in a newline.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("frontmatter pattern is valid")
});

/// Return the body of the leading frontmatter block, if the page has one.
pub fn extract_block(source: &str) -> Option<&str> {
    FRONTMATTER_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a frontmatter body into a mapping.
///
/// A repeated key keeps its last value. An empty body, or one holding a
/// false-like value (`null`, `false`, `0`, `''`, `[]`), is the empty mapping.
/// Any other non-mapping document is rejected, as is malformed YAML.
pub fn parse_block(path: &str, body: &str) -> Result<Mapping> {
    if body.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let LastWins(value) = serde_yaml::from_str(body)
        .map_err(|e| error::frontmatter::parse_failed(path, e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other if is_falsy(&other) => Ok(Mapping::new()),
        other => Err(error::frontmatter::not_mapping(path, value_kind(&other))),
    }
}

/// Keys present in `mapping` that are not permitted, sorted and deduplicated.
///
/// Non-string keys can never be permitted; they are reported in YAML form.
pub fn unknown_keys(mapping: &Mapping) -> Vec<String> {
    let mut unknown: Vec<String> = mapping
        .keys()
        .filter_map(|key| match key {
            Value::String(s) if PERMITTED_KEYS.contains(&s.as_str()) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(render_key(other)),
        })
        .collect();
    unknown.sort();
    unknown.dedup();
    unknown
}

/// Validate a page's source text. `path` is only used in error messages.
pub fn validate_source(path: &str, source: &str) -> Result<()> {
    let Some(body) = extract_block(source) else {
        return Ok(());
    };

    let mapping = parse_block(path, body)?;
    let unknown = unknown_keys(&mapping);
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(error::frontmatter::unknown_keys(path, unknown))
    }
}

/// Validate the page stored at `path`.
///
/// A file that cannot be read as UTF-8 text passes: reporting that is left to
/// whatever loads the page afterwards.
pub fn validate_file(path: &Path) -> Result<()> {
    let Ok(source) = std::fs::read_to_string(path) else {
        return Ok(());
    };
    validate_source(&path.display().to_string(), &source)
}

fn render_key(key: &Value) -> String {
    serde_yaml::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{key:?}"))
}

#[allow(clippy::float_cmp)]
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Tagged(_) => false,
    }
}

/// A YAML value whose mappings keep the last of any repeated key, at every
/// nesting level. `serde_yaml::Value` rejects repeated keys outright.
struct LastWins(Value);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LastWinsVisitor)
    }
}

struct LastWinsVisitor;

impl<'de> Visitor<'de> for LastWinsVisitor {
    type Value = LastWins;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Bool(v)))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Number(v.into())))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Number(v.into())))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Number(v.into())))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::String(v.to_owned())))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::String(v)))
    }

    fn visit_unit<E>(self) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Null))
    }

    fn visit_none<E>(self) -> std::result::Result<LastWins, E>
    where
        E: de::Error,
    {
        Ok(LastWins(Value::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<LastWins, D::Error>
    where
        D: Deserializer<'de>,
    {
        LastWins::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<LastWins, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(LastWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(LastWins(Value::Sequence(items)))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<LastWins, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((LastWins(key), LastWins(value))) = map.next_entry()? {
            mapping.insert(key, value);
        }
        Ok(LastWins(Value::Mapping(mapping)))
    }

    fn visit_enum<A>(self, data: A) -> std::result::Result<LastWins, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, variant) = data.variant::<String>()?;
        let LastWins(value) = variant.newtype_variant()?;
        Ok(LastWins(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        }))))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
