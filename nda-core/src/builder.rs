//! Contract model builder: validate raw inputs and derive a [`ContractRecord`].
//!
//! `build` is pure. Either every required field is present and a complete
//! record comes back, or a [`ValidationError`] names every missing field.

use crate::error::{RequiredField, ValidationError};
use crate::inputs::{RawInputs, DEFAULT_DAMAGES_AMOUNT};
use crate::types::{
    Company, Confidentiality, ContractRecord, ContractType, Counterparty, EmploymentDetail,
    Engagement, EntityKind, GeographicScope, Popia, Remedies,
};

/// Validate `raw` and assemble the record every renderer consumes.
pub fn build(raw: &RawInputs) -> Result<ContractRecord, ValidationError> {
    let missing = missing_fields(raw);
    if !missing.is_empty() {
        tracing::debug!(?missing, "submission rejected");
        return Err(ValidationError { missing_fields: missing });
    }

    let contract_type = raw.contract_type;
    let engagement = match contract_type {
        ContractType::Employee => Engagement::Employee(EmploymentDetail {
            job_title: clean(raw.job_title.as_deref()).unwrap_or_default(),
            start_date: raw.start_date,
        }),
        ContractType::Contractor => Engagement::Contractor,
        ContractType::Mutual => Engagement::Mutual,
    };

    let company = Company {
        name: raw.company_name.trim().to_string(),
        registration_number: raw.company_registration.trim().to_string(),
        address: raw.company_address.trim().to_string(),
        representative_name: raw.company_representative.trim().to_string(),
        representative_position: raw.company_position.trim().to_string(),
    };

    let confidentiality = Confidentiality {
        categories: dedup_in_order(&raw.confidential_categories),
        additional_text: clean(raw.additional_information.as_deref()),
        duration: raw.duration,
        geographic_scope: match contract_type {
            ContractType::Mutual => GeographicScope::SouthAfricaOnly,
            _ => raw.geographic_scope.unwrap_or_default(),
        },
        survives_post_termination: match contract_type {
            ContractType::Mutual => true,
            _ => raw.survives_post_termination,
        },
    };

    let remedies = Remedies {
        liquidated_damages: raw
            .liquidated_damages
            .then(|| raw.damages_amount.unwrap_or(DEFAULT_DAMAGES_AMOUNT)),
        interdict_relief: raw.interdict_relief,
    };

    let popia = Popia {
        applies: raw.involves_personal_data,
        personal_data_categories: if raw.involves_personal_data {
            dedup_in_order(&raw.personal_data_categories)
        } else {
            Vec::new()
        },
    };

    let record = ContractRecord {
        engagement,
        company,
        counterparty: counterparty(raw),
        confidentiality,
        remedies,
        popia,
    };
    tracing::debug!(
        contract_type = %record.contract_type(),
        counterparty = %record.counterparty().entity_kind(),
        categories = record.confidentiality().categories.len(),
        "contract record built"
    );
    Ok(record)
}

/// Required fields that are empty or whitespace-only, in form order.
pub fn missing_fields(raw: &RawInputs) -> Vec<RequiredField> {
    [
        (RequiredField::CompanyName, &raw.company_name),
        (RequiredField::CompanyRegistration, &raw.company_registration),
        (RequiredField::CompanyAddress, &raw.company_address),
        (RequiredField::CounterpartyName, &raw.counterparty_name),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

fn counterparty(raw: &RawInputs) -> Counterparty {
    // Employee and contractor forms only offer the individual fields.
    let kind = match raw.contract_type {
        ContractType::Mutual => raw.counterparty_kind.unwrap_or_default(),
        ContractType::Employee | ContractType::Contractor => {
            if raw.counterparty_kind == Some(EntityKind::Company) {
                tracing::debug!(
                    contract_type = %raw.contract_type,
                    "company counterparty ignored; binding an individual"
                );
            }
            EntityKind::Individual
        }
    };

    let name = raw.counterparty_name.trim().to_string();
    let address = raw.counterparty_address.trim().to_string();
    match kind {
        EntityKind::Individual => Counterparty::Individual {
            name,
            id_number: clean(raw.counterparty_id.as_deref()),
            address,
        },
        EntityKind::Company => Counterparty::Company {
            name,
            registration_number: clean(raw.counterparty_registration.as_deref()),
            address,
        },
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn dedup_in_order<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}
