use std::{collections::BTreeMap, fmt};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

key_newtype!(LanguageCode);
key_newtype!(CategoryKey);

pub type TranslationTable = BTreeMap<LanguageCode, TranslationTree>;
pub type ProgramCatalog = BTreeMap<CategoryKey, Vec<ProgramEntry>>;

/// Nested translation object for one language, addressed by dotted key paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(pub Value);

impl TranslationTree {
    /// Walks `path` segment by segment. Array nodes accept numeric segments.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.0, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Resolves `path` to a string leaf. Objects, arrays, numbers and missing
    /// segments all resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// String items of the array at `path`; non-string items are skipped.
    pub fn string_list(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Every dotted path that ends on a string leaf, in map key order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaf_paths(&self.0, String::new(), &mut out);
        out
    }
}

fn collect_leaf_paths(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::String(_) if !prefix.is_empty() => out.push(prefix),
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaf_paths(child, path, out);
            }
        }
        _ => {}
    }
}

/// Wall-clock time of an agenda entry. Keeps the source text for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    raw: String,
    time: NaiveTime,
}

impl ClockTime {
    pub const DEFAULT: &'static str = "00:00";

    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|err| format!("invalid clock time '{raw}': {err}"))?;
        Ok(Self {
            raw: trimmed.to_string(),
            time,
        })
    }

    pub fn midnight() -> Self {
        Self {
            raw: Self::DEFAULT.to_string(),
            time: NaiveTime::MIN,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.raw
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    pub date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "blank_time_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<ClockTime>,
    pub city: String,
    pub venue: String,
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A blank `time` means the same as a missing one.
fn blank_time_as_none<'de, D>(deserializer: D) -> Result<Option<ClockTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => Ok(Some(ClockTime::parse(trimmed).map_err(de::Error::custom)?)),
    }
}

impl AgendaEntry {
    /// Time of day, `00:00` when the record has none.
    pub fn clock_time(&self) -> ClockTime {
        self.time.clone().unwrap_or_else(ClockTime::midnight)
    }

    /// Combined date and time used for ordering and spotlight selection.
    pub fn starts_at(&self) -> NaiveDateTime {
        let time = self.time.as_ref().map_or(NaiveTime::MIN, ClockTime::time);
        self.date.and_time(time)
    }

    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// The three resources of a successful load, handed over as one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    pub translations: TranslationTable,
    pub agenda: Vec<AgendaEntry>,
    pub programs: ProgramCatalog,
}
