use crate::errors::{ReportError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

const RECORD_FIELDS: usize = 5;

/// Outcome of classifying a single pet image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Ground-truth label taken from the image filename.
    pub pet_label: String,
    /// Label produced by the classifier.
    pub classifier_label: String,
    pub labels_match: bool,
    pub pet_is_dog: bool,
    pub classifier_says_dog: bool,
}

impl ResultRecord {
    pub fn new(
        pet_label: impl Into<String>,
        classifier_label: impl Into<String>,
        labels_match: bool,
        pet_is_dog: bool,
        classifier_says_dog: bool,
    ) -> Self {
        Self {
            pet_label: pet_label.into(),
            classifier_label: classifier_label.into(),
            labels_match,
            pet_is_dog,
            classifier_says_dog,
        }
    }

    /// Build a record from the pipeline's positional representation:
    /// `[pet_label, classifier_label, labels_match, pet_is_dog, classifier_says_dog]`.
    ///
    /// Flags may be booleans or the integers `0`/`1`.
    pub fn from_fields(filename: &str, fields: &[Value]) -> Result<Self> {
        if fields.len() != RECORD_FIELDS {
            return Err(ReportError::malformed(
                filename,
                format!("expected {RECORD_FIELDS} fields, found {}", fields.len()),
            ));
        }

        Ok(Self {
            pet_label: label_field(filename, "pet_label", &fields[0])?,
            classifier_label: label_field(filename, "classifier_label", &fields[1])?,
            labels_match: flag_field(filename, "labels_match", &fields[2])?,
            pet_is_dog: flag_field(filename, "pet_is_dog", &fields[3])?,
            classifier_says_dog: flag_field(filename, "classifier_says_dog", &fields[4])?,
        })
    }

    /// The image and the classifier disagree on whether this is a dog.
    pub fn is_dog_mismatch(&self) -> bool {
        self.pet_is_dog != self.classifier_says_dog
    }

    /// Both sides agree it is a dog but the breed labels differ.
    pub fn is_breed_mismatch(&self) -> bool {
        self.pet_is_dog && self.classifier_says_dog && !self.labels_match
    }
}

fn label_field(filename: &str, name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ReportError::malformed(filename, format!("{name} must be a string, got {value}"))
        })
}

fn flag_field(filename: &str, name: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(ReportError::malformed(
                filename,
                format!("{name} must be 0 or 1, got {n}"),
            )),
        },
        other => Err(ReportError::malformed(
            filename,
            format!("{name} must be a boolean or 0/1, got {other}"),
        )),
    }
}

/// Per-image results keyed by filename, in pipeline order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResultsTable {
    entries: Vec<(String, ResultRecord)>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, rejecting a filename that is already present.
    pub fn insert(&mut self, filename: impl Into<String>, record: ResultRecord) -> Result<()> {
        let filename = filename.into();
        if self.get(&filename).is_some() {
            return Err(ReportError::malformed(filename, "duplicate filename"));
        }
        self.entries.push((filename, record));
        Ok(())
    }

    /// Build a table from raw positional records, validating every one.
    pub fn from_raw(raw: Vec<(String, Value)>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(raw.len());
        let mut entries = Vec::with_capacity(raw.len());
        for (filename, value) in raw {
            if !seen.insert(filename.clone()) {
                return Err(ReportError::malformed(filename, "duplicate filename"));
            }
            let fields = value.as_array().ok_or_else(|| {
                ReportError::malformed(
                    &filename,
                    format!("expected an array of {RECORD_FIELDS} fields, got {value}"),
                )
            })?;
            let record = ResultRecord::from_fields(&filename, fields)?;
            entries.push((filename, record));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, filename: &str) -> Option<&ResultRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
