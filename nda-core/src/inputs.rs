//! Raw form inputs and the submission-file boundary.
//!
//! [`RawInputs`] mirrors the form one field at a time, already typed. It is
//! deliberately permissive: fields that only apply to some contract types are
//! accepted for all of them and ignored by the builder where irrelevant.
//!
//! A submission file is YAML (JSON also parses):
//!
//! ```yaml
//! contract_type: employee
//! company_name: ABC (Pty) Ltd
//! company_registration: 2023/123456/07
//! company_address: 123 Main Street, Johannesburg, 2001
//! company_representative: John Smith
//! company_position: Managing Director
//! counterparty_name: Jane Doe
//! counterparty_id: "8501015800083"
//! counterparty_address: 789 Residential St, Durban, 4001
//! job_title: Software Developer
//! start_date: 2024-03-15
//! confidential_categories:
//!   - Technical information and trade secrets
//! duration: 2
//! ```

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{io_err, InputError};
use crate::types::{
    ConfidentialCategory, ContractType, Duration, EntityKind, GeographicScope,
    PersonalDataCategory,
};

/// Amount pre-filled on the form when the liquidated-damages box is ticked.
pub const DEFAULT_DAMAGES_AMOUNT: u64 = 50_000;

/// Field values as delivered by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    #[serde(default)]
    pub contract_type: ContractType,

    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_registration: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub company_representative: String,
    #[serde(default)]
    pub company_position: String,

    /// Only consulted for mutual agreements; the other types always bind an individual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_kind: Option<EntityKind>,
    #[serde(default)]
    pub counterparty_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_registration: Option<String>,
    #[serde(default)]
    pub counterparty_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// The form's date picker starts on today's date.
    #[serde(default = "today")]
    pub start_date: NaiveDate,

    #[serde(default = "ConfidentialCategory::defaults")]
    pub confidential_categories: Vec<ConfidentialCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(default)]
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographic_scope: Option<GeographicScope>,
    #[serde(default = "default_true")]
    pub survives_post_termination: bool,

    #[serde(default)]
    pub liquidated_damages: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damages_amount: Option<u64>,
    #[serde(default = "default_true")]
    pub interdict_relief: bool,

    #[serde(default)]
    pub involves_personal_data: bool,
    #[serde(default)]
    pub personal_data_categories: Vec<PersonalDataCategory>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn default_true() -> bool {
    true
}

impl RawInputs {
    /// A blank form of the given type, with the form's default selections.
    pub fn blank(contract_type: ContractType) -> Self {
        RawInputs {
            contract_type,
            company_name: String::new(),
            company_registration: String::new(),
            company_address: String::new(),
            company_representative: String::new(),
            company_position: String::new(),
            counterparty_kind: None,
            counterparty_name: String::new(),
            counterparty_id: None,
            counterparty_registration: None,
            counterparty_address: String::new(),
            job_title: None,
            start_date: today(),
            confidential_categories: ConfidentialCategory::defaults(),
            additional_information: None,
            duration: Duration::default(),
            geographic_scope: None,
            survives_post_termination: true,
            liquidated_damages: false,
            damages_amount: None,
            interdict_relief: true,
            involves_personal_data: false,
            personal_data_categories: Vec::new(),
        }
    }

    /// A filled-in example using the form's placeholder values.
    pub fn sample(contract_type: ContractType) -> Self {
        let mut raw = RawInputs::blank(contract_type);
        raw.company_name = "ABC (Pty) Ltd".to_string();
        raw.company_registration = "2023/123456/07".to_string();
        raw.company_address = "123 Main Street, Johannesburg, 2001".to_string();
        raw.company_representative = "John Smith".to_string();
        raw.company_position = "Managing Director".to_string();
        match contract_type {
            ContractType::Mutual => {
                raw.counterparty_kind = Some(EntityKind::Company);
                raw.counterparty_name = "XYZ (Pty) Ltd".to_string();
                raw.counterparty_registration = Some("2023/654321/07".to_string());
                raw.counterparty_address = "456 Business Ave, Cape Town, 8001".to_string();
            }
            ContractType::Employee | ContractType::Contractor => {
                raw.counterparty_name = "Jane Doe".to_string();
                raw.counterparty_id = Some("8501015800083".to_string());
                raw.counterparty_address = "789 Residential St, Durban, 4001".to_string();
            }
        }
        if contract_type == ContractType::Employee {
            raw.job_title = Some("Software Developer".to_string());
        }
        raw
    }
}

// ---------------------------------------------------------------------------
// Submission files
// ---------------------------------------------------------------------------

/// Load a submission from a YAML (or JSON) file.
///
/// Returns `InputError::Io` if unreadable and `InputError::Parse` (with path
/// and line context) if malformed.
pub fn load_inputs_at(path: &Path) -> Result<RawInputs, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let raw = parse_inputs(&contents).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), contract_type = %raw.contract_type, "loaded submission");
    Ok(raw)
}

/// Parse a submission from YAML text.
pub fn parse_inputs(contents: &str) -> Result<RawInputs, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

/// Write a sample submission of `contract_type` to `path`.
///
/// Refuses to overwrite. Write flow: serialize → `.tmp` sibling → `rename`.
pub fn write_sample_at(path: &Path, contract_type: ContractType) -> Result<RawInputs, InputError> {
    if path.exists() {
        return Err(InputError::AlreadyExists { path: path.to_path_buf() });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let sample = RawInputs::sample(contract_type);
    let yaml = serde_yaml::to_string(&sample)?;
    let mut tmp_name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| io_err(path, e))?;
    Ok(sample)
}
