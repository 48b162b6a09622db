//! Domain types for a single NDA submission.
//!
//! [`ContractRecord`] is only constructed by [`crate::builder::build`]; its
//! fields are private so the derived-field invariants cannot be bypassed.
//! Conditional data lives in tagged unions ([`Engagement`], [`Counterparty`])
//! rather than in loose optional fields.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::amount_in_words;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The three agreement flavours offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    #[default]
    Employee,
    Contractor,
    Mutual,
}

impl ContractType {
    /// All contract types in form order.
    pub fn all() -> &'static [ContractType] {
        &[ContractType::Employee, ContractType::Contractor, ContractType::Mutual]
    }

    /// Label shown on the form ("Employee NDA", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Employee => "Employee NDA",
            ContractType::Contractor => "Contractor NDA",
            ContractType::Mutual => "Mutual NDA",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractType::Employee => write!(f, "employee"),
            ContractType::Contractor => write!(f, "contractor"),
            ContractType::Mutual => write!(f, "mutual"),
        }
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" | "employee nda" => Ok(ContractType::Employee),
            "contractor" | "contractor nda" => Ok(ContractType::Contractor),
            "mutual" | "mutual nda" => Ok(ContractType::Mutual),
            other => Err(format!(
                "unknown contract type '{other}'; expected: employee, contractor, mutual"
            )),
        }
    }
}

/// Whether the receiving party is a natural person or a juristic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Individual,
    #[default]
    Company,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Individual => write!(f, "individual"),
            EntityKind::Company => write!(f, "company"),
        }
    }
}

/// Predefined categories of confidential information, in form order.
///
/// The serialized form is the exact label that appears in the agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidentialCategory {
    #[serde(rename = "Technical information and trade secrets")]
    TechnicalInformation,
    #[serde(rename = "Business strategies and plans")]
    BusinessStrategies,
    #[serde(rename = "Customer lists and client information")]
    CustomerLists,
    #[serde(rename = "Financial information and pricing")]
    FinancialInformation,
    #[serde(rename = "Software source code and algorithms")]
    SourceCode,
    #[serde(rename = "Marketing strategies and campaigns")]
    MarketingStrategies,
    #[serde(rename = "Supplier and vendor information")]
    SupplierInformation,
    #[serde(rename = "Research and development data")]
    ResearchAndDevelopment,
    #[serde(rename = "Personnel information (subject to POPIA)")]
    PersonnelInformation,
    #[serde(rename = "Manufacturing processes and methods")]
    ManufacturingProcesses,
}

impl ConfidentialCategory {
    pub fn all() -> &'static [ConfidentialCategory] {
        &[
            ConfidentialCategory::TechnicalInformation,
            ConfidentialCategory::BusinessStrategies,
            ConfidentialCategory::CustomerLists,
            ConfidentialCategory::FinancialInformation,
            ConfidentialCategory::SourceCode,
            ConfidentialCategory::MarketingStrategies,
            ConfidentialCategory::SupplierInformation,
            ConfidentialCategory::ResearchAndDevelopment,
            ConfidentialCategory::PersonnelInformation,
            ConfidentialCategory::ManufacturingProcesses,
        ]
    }

    /// Categories pre-selected on a fresh form.
    pub fn defaults() -> Vec<ConfidentialCategory> {
        vec![
            ConfidentialCategory::TechnicalInformation,
            ConfidentialCategory::BusinessStrategies,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidentialCategory::TechnicalInformation => "Technical information and trade secrets",
            ConfidentialCategory::BusinessStrategies => "Business strategies and plans",
            ConfidentialCategory::CustomerLists => "Customer lists and client information",
            ConfidentialCategory::FinancialInformation => "Financial information and pricing",
            ConfidentialCategory::SourceCode => "Software source code and algorithms",
            ConfidentialCategory::MarketingStrategies => "Marketing strategies and campaigns",
            ConfidentialCategory::SupplierInformation => "Supplier and vendor information",
            ConfidentialCategory::ResearchAndDevelopment => "Research and development data",
            ConfidentialCategory::PersonnelInformation => "Personnel information (subject to POPIA)",
            ConfidentialCategory::ManufacturingProcesses => "Manufacturing processes and methods",
        }
    }
}

impl fmt::Display for ConfidentialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Predefined kinds of personal information for the POPIA section of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalDataCategory {
    #[serde(rename = "Employee personal data")]
    Employee,
    #[serde(rename = "Customer personal data")]
    Customer,
    #[serde(rename = "Supplier personal data")]
    Supplier,
    #[serde(rename = "Other personal data")]
    Other,
}

impl PersonalDataCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PersonalDataCategory::Employee => "Employee personal data",
            PersonalDataCategory::Customer => "Customer personal data",
            PersonalDataCategory::Supplier => "Supplier personal data",
            PersonalDataCategory::Other => "Other personal data",
        }
    }
}

impl fmt::Display for PersonalDataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Territory the confidentiality undertaking covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GeographicScope {
    #[default]
    #[serde(rename = "South Africa only")]
    SouthAfricaOnly,
    #[serde(rename = "Africa")]
    Africa,
    #[serde(rename = "Global")]
    Global,
}

impl GeographicScope {
    pub fn label(&self) -> &'static str {
        match self {
            GeographicScope::SouthAfricaOnly => "South Africa only",
            GeographicScope::Africa => "Africa",
            GeographicScope::Global => "Global",
        }
    }
}

impl fmt::Display for GeographicScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

/// How long the confidentiality obligation survives.
///
/// Deserializes from either a year count (`2`) or the word `indefinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DurationRepr", into = "DurationRepr")]
pub enum Duration {
    Years(u32),
    Indefinite,
}

impl Duration {
    /// A period of `n` years; zero is not a period.
    pub fn years(n: u32) -> Result<Self, String> {
        if n == 0 {
            return Err("duration must be at least 1 year or 'indefinite'".to_string());
        }
        Ok(Duration::Years(n))
    }
}

impl Default for Duration {
    fn default() -> Self {
        Duration::Years(2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Years(u32),
    Word(String),
}

impl TryFrom<DurationRepr> for Duration {
    type Error = String;

    fn try_from(repr: DurationRepr) -> Result<Self, Self::Error> {
        match repr {
            DurationRepr::Years(n) => Duration::years(n),
            DurationRepr::Word(word) => word.parse(),
        }
    }
}

impl From<Duration> for DurationRepr {
    fn from(d: Duration) -> Self {
        match d {
            Duration::Years(n) => DurationRepr::Years(n),
            Duration::Indefinite => DurationRepr::Word("indefinite".to_string()),
        }
    }
}

impl FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("indefinite") {
            return Ok(Duration::Indefinite);
        }
        let n = s
            .parse::<u32>()
            .map_err(|_| format!("invalid duration '{s}'; expected a number of years or 'indefinite'"))?;
        Duration::years(n)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Years(1) => write!(f, "1 year"),
            Duration::Years(n) => write!(f, "{n} years"),
            Duration::Indefinite => write!(f, "indefinite"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record components
// ---------------------------------------------------------------------------

/// The disclosing party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub registration_number: String,
    pub address: String,
    pub representative_name: String,
    pub representative_position: String,
}

/// The receiving party. Only individuals carry an ID number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Counterparty {
    Individual {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id_number: Option<String>,
        address: String,
    },
    Company {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        registration_number: Option<String>,
        address: String,
    },
}

impl Counterparty {
    pub fn name(&self) -> &str {
        match self {
            Counterparty::Individual { name, .. } | Counterparty::Company { name, .. } => name,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Counterparty::Individual { address, .. } | Counterparty::Company { address, .. } => {
                address
            }
        }
    }

    pub fn id_number(&self) -> Option<&str> {
        match self {
            Counterparty::Individual { id_number, .. } => id_number.as_deref(),
            Counterparty::Company { .. } => None,
        }
    }

    pub fn registration_number(&self) -> Option<&str> {
        match self {
            Counterparty::Individual { .. } => None,
            Counterparty::Company { registration_number, .. } => registration_number.as_deref(),
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Counterparty::Individual { .. } => EntityKind::Individual,
            Counterparty::Company { .. } => EntityKind::Company,
        }
    }
}

/// Employment terms, present only on employee agreements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentDetail {
    pub job_title: String,
    pub start_date: NaiveDate,
}

/// Contract type together with the data only some types carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Engagement {
    Employee(EmploymentDetail),
    Contractor,
    Mutual,
}

impl Engagement {
    pub fn contract_type(&self) -> ContractType {
        match self {
            Engagement::Employee(_) => ContractType::Employee,
            Engagement::Contractor => ContractType::Contractor,
            Engagement::Mutual => ContractType::Mutual,
        }
    }

    pub fn employment(&self) -> Option<&EmploymentDetail> {
        match self {
            Engagement::Employee(detail) => Some(detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidentiality {
    /// Selected categories in selection order, without duplicates.
    pub categories: Vec<ConfidentialCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<String>,
    pub duration: Duration,
    pub geographic_scope: GeographicScope,
    pub survives_post_termination: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedies {
    /// Amount in ZAR; `None` when the clause was not selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidated_damages: Option<u64>,
    pub interdict_relief: bool,
}

impl Remedies {
    /// Liquidated damages amount, zero when the clause was not selected.
    pub fn damages_amount(&self) -> u64 {
        self.liquidated_damages.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popia {
    pub applies: bool,
    pub personal_data_categories: Vec<PersonalDataCategory>,
}

// ---------------------------------------------------------------------------
// ContractRecord
// ---------------------------------------------------------------------------

/// A validated NDA submission, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRecord {
    pub(crate) engagement: Engagement,
    pub(crate) company: Company,
    pub(crate) counterparty: Counterparty,
    pub(crate) confidentiality: Confidentiality,
    pub(crate) remedies: Remedies,
    pub(crate) popia: Popia,
}

impl ContractRecord {
    pub fn contract_type(&self) -> ContractType {
        self.engagement.contract_type()
    }

    pub fn engagement(&self) -> &Engagement {
        &self.engagement
    }

    pub fn employment(&self) -> Option<&EmploymentDetail> {
        self.engagement.employment()
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn counterparty(&self) -> &Counterparty {
        &self.counterparty
    }

    pub fn confidentiality(&self) -> &Confidentiality {
        &self.confidentiality
    }

    pub fn remedies(&self) -> &Remedies {
        &self.remedies
    }

    pub fn popia(&self) -> &Popia {
        &self.popia
    }

    /// Notes on collected inputs that no clause of the agreement renders.
    pub fn unrendered_inputs(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(amount) = self.remedies.liquidated_damages {
            notes.push(format!(
                "liquidated damages of R{amount} ({} Rand) are not rendered into any clause",
                amount_in_words(amount)
            ));
        }
        if self.contract_type() != ContractType::Mutual {
            notes.push(format!(
                "geographic scope '{}' is not rendered into any clause",
                self.confidentiality.geographic_scope
            ));
        }
        if self.remedies.interdict_relief {
            notes.push("interdict relief is not rendered into any clause".to_string());
        }
        if self.popia.applies && !self.popia.personal_data_categories.is_empty() {
            let labels: Vec<&str> = self
                .popia
                .personal_data_categories
                .iter()
                .map(|c| c.label())
                .collect();
            notes.push(format!(
                "POPIA data categories ({}) are not rendered into any clause",
                labels.join(", ")
            ));
        }
        notes
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_type_parses_form_labels() {
        assert_eq!("Employee NDA".parse::<ContractType>().unwrap(), ContractType::Employee);
        assert_eq!("mutual".parse::<ContractType>().unwrap(), ContractType::Mutual);
        assert!("partnership".parse::<ContractType>().is_err());
    }

    #[test]
    fn duration_deserializes_from_number_or_word() {
        let years: Duration = serde_yaml::from_str("5").expect("years");
        assert_eq!(years, Duration::Years(5));
        let forever: Duration = serde_yaml::from_str("Indefinite").expect("word");
        assert_eq!(forever, Duration::Indefinite);
        assert!(serde_yaml::from_str::<Duration>("forever").is_err());
    }

    #[test]
    fn zero_year_duration_is_rejected() {
        assert!(serde_yaml::from_str::<Duration>("0").is_err());
        assert!("0".parse::<Duration>().is_err());
        assert_eq!("1".parse::<Duration>().unwrap().to_string(), "1 year");
    }

    #[test]
    fn duration_display_pluralizes() {
        assert_eq!(Duration::Years(1).to_string(), "1 year");
        assert_eq!(Duration::Years(10).to_string(), "10 years");
    }

    #[test]
    fn category_serializes_as_label() {
        let yaml = serde_yaml::to_string(&ConfidentialCategory::SourceCode).expect("serialize");
        assert_eq!(yaml.trim(), "Software source code and algorithms");
        for category in ConfidentialCategory::all() {
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn company_counterparty_has_no_id() {
        let party = Counterparty::Company {
            name: "XYZ (Pty) Ltd".to_string(),
            registration_number: Some("2023/654321/07".to_string()),
            address: "456 Business Ave".to_string(),
        };
        assert_eq!(party.id_number(), None);
        assert_eq!(party.entity_kind(), EntityKind::Company);
        assert_eq!(party.registration_number(), Some("2023/654321/07"));
    }
}
