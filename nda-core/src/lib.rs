//! nda-core — submission model for the South African NDA generator.
//!
//! - [`types`] — [`ContractRecord`] and its parts
//! - [`inputs`] — [`RawInputs`] and submission-file loading
//! - [`builder`] — [`build`]: validate + derive
//! - [`amount`] — [`amount_in_words`]
//! - [`error`] — [`ValidationError`], [`InputError`]

pub mod amount;
pub mod builder;
pub mod error;
pub mod inputs;
pub mod types;

pub use amount::amount_in_words;
pub use builder::build;
pub use error::{InputError, RequiredField, ValidationError};
pub use inputs::{load_inputs_at, write_sample_at, RawInputs};
pub use types::{
    Company, ConfidentialCategory, Confidentiality, ContractRecord, ContractType, Counterparty,
    Duration, EmploymentDetail, Engagement, EntityKind, GeographicScope, PersonalDataCategory,
    Popia, Remedies,
};
