use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressParseError {
    #[error("progress payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("progress payload must be a JSON object")]
    NotAnObject,
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Set of completed item ids.
///
/// Persisted as a JSON object mapping each completed id to `true`. Absence
/// means "not completed"; `false` is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    completed: BTreeSet<ItemId>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted payload.
    ///
    /// Entries whose value is not truthy (`false`, `null`, `0`, `""`) are
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` if the payload is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, ProgressParseError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|err| ProgressParseError::InvalidJson(err.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(ProgressParseError::NotAnObject);
        };

        let completed = map
            .into_iter()
            .filter(|(_, value)| is_truthy(value))
            .map(|(key, _)| ItemId::new(key))
            .collect();
        Ok(Self { completed })
    }

    /// Serialize as `{"<id>": true, ...}` with keys in sorted order.
    #[must_use]
    pub fn to_json(&self) -> String {
        let map: BTreeMap<&str, bool> = self
            .completed
            .iter()
            .map(|id| (id.as_str(), true))
            .collect();
        // A map of string keys to booleans always serializes.
        serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.completed.contains(id)
    }

    /// Insert or remove `id`. Returns `true` if the record changed.
    pub fn set(&mut self, id: &ItemId, complete: bool) -> bool {
        if complete {
            self.completed.insert(id.clone())
        } else {
            self.completed.remove(id)
        }
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.completed.iter()
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Label shown once every item is completed.
pub const CELEBRATION_LABEL: &str = "100% - HACKER MODE UNLOCKED";

/// Aggregate completion for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// `round(100 * completed / total)` clamped to `[0, 100]`; `0` when there
    /// are no items.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let completed = self.completed.min(self.total);
        // Integer form of round-half-up on a non-negative ratio.
        let pct = (completed * 200 + self.total) / (self.total * 2);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percentage() == 100
    }

    #[must_use]
    pub fn label(&self) -> String {
        if self.is_complete() {
            CELEBRATION_LABEL.to_string()
        } else {
            format!("{}%", self.percentage())
        }
    }
}
