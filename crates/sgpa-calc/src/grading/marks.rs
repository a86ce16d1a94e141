use super::domain::Rubric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Component key whose value replaces the rubric computation entirely.
pub const TOTAL_CIE_KEY: &str = "totalCIE";

/// A mark as typed by the student: a JSON number or the raw text of an input box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkValue {
    Number(f64),
    Text(String),
}

impl MarkValue {
    /// Numeric value, or `None` when the entry is blank or not a finite number.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            MarkValue::Number(value) => *value,
            MarkValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Coerced value: blank, invalid and non-finite entries count as 0.
    pub fn value(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }

    pub fn is_blank(&self) -> bool {
        match self {
            MarkValue::Number(_) => false,
            MarkValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for MarkValue {
    fn from(value: f64) -> Self {
        MarkValue::Number(value)
    }
}

impl From<&str> for MarkValue {
    fn from(value: &str) -> Self {
        MarkValue::Text(value.to_string())
    }
}

/// Raw CIE components keyed by rubric-specific names (`quiz1`, `test2`, `labRecord`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CieMarks {
    entries: BTreeMap<String, MarkValue>,
}

impl CieMarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<MarkValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<MarkValue>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Coerced component value; absent keys read as 0.
    pub fn value(&self, key: &str) -> f64 {
        self.entries.get(key).map(MarkValue::value).unwrap_or(0.0)
    }

    /// Student-entered CIE total. Present only when the `totalCIE` entry is non-blank.
    pub fn total_override(&self) -> Option<f64> {
        self.entries
            .get(TOTAL_CIE_KEY)
            .filter(|entry| !entry.is_blank())
            .map(MarkValue::value)
    }

    /// Whether anything at all was typed for this course.
    pub fn has_entries(&self) -> bool {
        self.entries.values().any(|entry| !entry.is_blank())
    }
}

/// Raw SEE marks. Simple courses fill `see`; integrated courses fill the theory/lab pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeeMarks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see: Option<MarkValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see_theory: Option<MarkValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see_lab: Option<MarkValue>,
}

impl SeeMarks {
    pub fn simple(see: impl Into<MarkValue>) -> Self {
        Self {
            see: Some(see.into()),
            ..Self::default()
        }
    }

    pub fn integrated(theory: impl Into<MarkValue>, lab: impl Into<MarkValue>) -> Self {
        Self {
            see: None,
            see_theory: Some(theory.into()),
            see_lab: Some(lab.into()),
        }
    }

    pub fn see(&self) -> f64 {
        coerce(&self.see)
    }

    pub fn theory(&self) -> f64 {
        coerce(&self.see_theory)
    }

    pub fn lab(&self) -> f64 {
        coerce(&self.see_lab)
    }

    /// Whether SEE marks exist for the course shape. Missing SEE still grades (as 0) but
    /// switches the course into "what do I need" mode.
    pub fn is_entered(&self, rubric: &Rubric) -> bool {
        if rubric.is_integrated() {
            entered(&self.see_theory) || entered(&self.see_lab)
        } else {
            entered(&self.see)
        }
    }
}

fn coerce(value: &Option<MarkValue>) -> f64 {
    value.as_ref().map(MarkValue::value).unwrap_or(0.0)
}

fn entered(value: &Option<MarkValue>) -> bool {
    value.as_ref().map(|entry| !entry.is_blank()).unwrap_or(false)
}
