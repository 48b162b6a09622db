//! Error types for nda-core.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A form field that must be filled in before an agreement can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    CompanyName,
    CompanyRegistration,
    CompanyAddress,
    CounterpartyName,
}

impl RequiredField {
    /// Label of the field as it appears on the form.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::CompanyName => "Company Name",
            RequiredField::CompanyRegistration => "Registration Number",
            RequiredField::CompanyAddress => "Registered Address",
            RequiredField::CounterpartyName => "Receiving Party Name",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One or more required fields were empty. No record is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please fill in all required fields: {}", join_labels(.missing_fields))]
pub struct ValidationError {
    /// Missing fields, in form order.
    pub missing_fields: Vec<RequiredField>,
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from reading or writing submission files.
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (sample scaffold path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed submission file, with serde_yaml's line context.
    #[error("failed to parse submission at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Refused to overwrite an existing file.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> InputError {
    InputError::Io { path: path.into(), source }
}
