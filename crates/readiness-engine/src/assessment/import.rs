use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::catalog::QuestionCatalog;
use super::ledger::{AnswerLedger, AnswerValidationError};

#[derive(Debug)]
pub enum LedgerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Answer(AnswerValidationError),
}

impl std::fmt::Display for LedgerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            LedgerImportError::Csv(err) => write!(f, "invalid answers CSV data: {}", err),
            LedgerImportError::Answer(err) => write!(f, "answers rejected: {}", err),
        }
    }
}

impl std::error::Error for LedgerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerImportError::Io(err) => Some(err),
            LedgerImportError::Csv(err) => Some(err),
            LedgerImportError::Answer(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LedgerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LedgerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<AnswerValidationError> for LedgerImportError {
    fn from(err: AnswerValidationError) -> Self {
        Self::Answer(err)
    }
}

/// Builds answer ledgers from `Question ID,Answer` CSV exports.
pub struct LedgerImporter;

impl LedgerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerLedger, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Blank answers are skipped; a repeated question id keeps the last row.
    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerLedger, LedgerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut ledger = AnswerLedger::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            if let Some(answer) = row.answer {
                ledger.record(row.question_id, answer);
            }
        }

        Ok(ledger)
    }

    pub fn from_reader_strict<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<AnswerLedger, LedgerImportError> {
        let ledger = Self::from_reader(reader)?;
        ledger.validate(catalog)?;
        Ok(ledger)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Answer", default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
