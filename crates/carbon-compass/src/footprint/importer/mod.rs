mod parser;

use super::domain::ActivityInput;
use super::validation::InputError;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ActivityImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { row: usize, source: InputError },
}

impl std::fmt::Display for ActivityImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityImportError::Io(err) => write!(f, "failed to read activity export: {}", err),
            ActivityImportError::Csv(err) => write!(f, "invalid activity CSV data: {}", err),
            ActivityImportError::InvalidRow { row, source } => {
                write!(f, "row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for ActivityImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityImportError::Io(err) => Some(err),
            ActivityImportError::Csv(err) => Some(err),
            ActivityImportError::InvalidRow { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ActivityImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ActivityImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One validated household from a batch export.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedHousehold {
    pub label: String,
    pub input: ActivityInput,
}

pub struct ActivityCsvImporter;

impl ActivityCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedHousehold>, ActivityImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedHousehold>, ActivityImportError> {
        let records = parser::parse_records(reader)?;
        let mut households = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            if let Err(source) = record.input.validate() {
                tracing::warn!(row, %source, "rejecting activity row");
                return Err(ActivityImportError::InvalidRow { row, source });
            }

            households.push(ImportedHousehold {
                label: record
                    .household
                    .unwrap_or_else(|| format!("household-{row}")),
                input: record.input,
            });
        }

        tracing::debug!(count = households.len(), "imported activity rows");
        Ok(households)
    }
}
