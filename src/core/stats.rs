use super::ordered::OrderedEntries;
use crate::errors::{ReportError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const N_IMAGES: &str = "n_images";
pub const N_DOGS_IMG: &str = "n_dogs_img";
pub const N_NOTDOGS_IMG: &str = "n_notdogs_img";
pub const N_CORRECT_DOGS: &str = "n_correct_dogs";
pub const N_CORRECT_NOTDOGS: &str = "n_correct_notdogs";
pub const N_CORRECT_BREED: &str = "n_correct_breed";

/// Every count the reporter reads.
pub const REQUIRED_COUNTS: [&str; 6] = [
    N_IMAGES,
    N_DOGS_IMG,
    N_NOTDOGS_IMG,
    N_CORRECT_DOGS,
    N_CORRECT_NOTDOGS,
    N_CORRECT_BREED,
];

const PERCENT_PREFIX: &str = "pct";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Real(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Count(n) => n as f64,
            Self::Real(x) => x,
        }
    }

    fn as_count(&self) -> Option<u64> {
        match *self {
            Self::Count(n) => Some(n),
            Self::Real(x) if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 => Some(x as u64),
            Self::Real(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Real(x) => write!(f, "{x}"),
        }
    }
}

/// Aggregate statistics keyed by name, kept in insertion order.
///
/// Names starting with `n_` hold counts, names starting with `pct` hold
/// percentages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsTable {
    entries: Vec<(String, StatValue)>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a statistic. Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: StatValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with_count(mut self, key: impl Into<String>, value: u64) -> Self {
        self.insert(key, StatValue::Count(value));
        self
    }

    pub fn with_percent(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, StatValue::Real(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<StatValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    /// Read a required integer count.
    pub fn count(&self, key: &str) -> Result<u64> {
        let value = self.get(key).ok_or_else(|| ReportError::missing(key))?;
        value.as_count().ok_or_else(|| ReportError::InvalidStatistic {
            key: key.to_string(),
            value: value.as_f64(),
        })
    }

    /// Statistics whose name starts with `pct`, in table order.
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.starts_with(PERCENT_PREFIX))
            .map(|(key, value)| (key.as_str(), value.as_f64()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StatValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for StatsTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedEntries(raw) = OrderedEntries::<StatValue>::deserialize(deserializer)?;
        let mut table = StatsTable::new();
        for (key, value) in raw {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl Serialize for StatsTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        OrderedEntries(self.entries.clone()).serialize(serializer)
    }
}
