use anyhow::Context;
use serde_json::Value;

/// Ordered, read-only record store backing one lookup endpoint.
///
/// Loaded once at startup before the listener binds and never mutated
/// afterwards, so handlers can share it without locking. Records are kept
/// as opaque JSON objects; the output shape is enforced at projection time,
/// not at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Value>,
}

impl Dataset {
    /// Reads a JSON file containing a top-level array of records.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {}", path))?;
        let parsed: Value = serde_json::from_str(&raw)
            .with_context(|| format!("dataset file {} is not valid JSON", path))?;
        match parsed {
            Value::Array(records) => Ok(Self { records }),
            _ => anyhow::bail!("dataset file {} must contain a top-level JSON array", path),
        }
    }

    /// Builds a dataset from in-memory records. Used by tests.
    pub fn from_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
