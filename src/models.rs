use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// SerpAPI field holding the LinkedIn profile records.
pub const PROFILES_FIELD: &str = "linkedin_profiles";

/// Outcome of one DeHashed query.
///
/// Serializes untagged: a success is the response body verbatim, a failure is
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Failed { error: String },
    Found(Value),
}

impl LookupResult {
    pub fn status_failure(name: &str, status: u16) -> Self {
        LookupResult::Failed {
            error: format!("Failed query for {}, Status Code: {}", name, status),
        }
    }

    pub fn request_failure(name: &str, reason: impl std::fmt::Display) -> Self {
        LookupResult::Failed {
            error: format!("Failed query for {}, Request Error: {}", name, reason),
        }
    }

    pub fn invalid_response(name: &str, reason: impl std::fmt::Display) -> Self {
        LookupResult::Failed {
            error: format!("Failed query for {}, Invalid Response: {}", name, reason),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LookupResult::Failed { .. })
    }

    pub fn into_value(self) -> Value {
        match self {
            LookupResult::Found(body) => body,
            LookupResult::Failed { error } => {
                let mut record = Map::new();
                record.insert("error".to_string(), Value::String(error));
                Value::Object(record)
            }
        }
    }
}

/// Employee name -> lookup result. Re-inserting a name replaces its entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMapping {
    entries: Map<String, Value>,
    failed: BTreeSet<String>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, result: LookupResult) {
        if result.is_failure() {
            self.failed.insert(name.clone());
        } else {
            self.failed.remove(&name);
        }
        self.entries.insert(name, result.into_value());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose current value is an error record.
    pub fn failures(&self) -> usize {
        self.failed.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl Serialize for ResultMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub names_found: usize,
    pub entries: usize,
    pub failed_lookups: usize,
    pub output: std::path::PathBuf,
}
