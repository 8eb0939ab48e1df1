use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Raw survey responses keyed by question identifier.
///
/// Values are kept as submitted (numbers or numeric strings); scoring decides
/// what counts as a usable response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, Value>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&Value> {
        self.entries.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(question_id, value)| (question_id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a JSON object mapping question identifiers to responses.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, AnswerSourceError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads `question_id,value` rows. A repeated identifier keeps the last row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnswerSourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = Self::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            if row.question_id.is_empty() {
                continue;
            }
            answers.insert(row.question_id, Value::String(row.value));
        }

        Ok(answers)
    }

    /// Loads an answer file, choosing the parser from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnswerSourceError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?),
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?),
            _ => Err(AnswerSourceError::UnsupportedFormat { extension }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = Self::new();
        for (question_id, value) in iter {
            answers.insert(question_id, value);
        }
        answers
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    #[serde(default)]
    value: String,
}

/// Failure to load an answer file; scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum AnswerSourceError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid answer CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported answer file extension '{extension}' (expected .json or .csv)")]
    UnsupportedFormat { extension: String },
}
