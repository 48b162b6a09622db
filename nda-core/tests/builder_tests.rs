//! Contract model builder: required fields, derived fields, type-specific data.

use chrono::NaiveDate;
use nda_core::{
    build, ConfidentialCategory, ContractType, Counterparty, Duration, EntityKind,
    GeographicScope, PersonalDataCategory, RawInputs, RequiredField,
};
use rstest::rstest;

fn employee() -> RawInputs {
    let mut raw = RawInputs::sample(ContractType::Employee);
    raw.start_date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    raw.confidential_categories = vec![ConfidentialCategory::TechnicalInformation];
    raw
}

// ---------------------------------------------------------------------------
// 1. Required fields
// ---------------------------------------------------------------------------

#[rstest]
#[case::company_name(|r: &mut RawInputs| r.company_name.clear(), vec![RequiredField::CompanyName])]
#[case::registration(|r: &mut RawInputs| r.company_registration.clear(), vec![RequiredField::CompanyRegistration])]
#[case::address(|r: &mut RawInputs| r.company_address = "   ".to_string(), vec![RequiredField::CompanyAddress])]
#[case::counterparty(|r: &mut RawInputs| r.counterparty_name.clear(), vec![RequiredField::CounterpartyName])]
#[case::all(
    |r: &mut RawInputs| {
        r.company_name.clear();
        r.company_registration.clear();
        r.company_address.clear();
        r.counterparty_name.clear();
    },
    vec![
        RequiredField::CompanyName,
        RequiredField::CompanyRegistration,
        RequiredField::CompanyAddress,
        RequiredField::CounterpartyName,
    ]
)]
fn missing_fields_are_named_exactly(
    #[case] clear: fn(&mut RawInputs),
    #[case] expected: Vec<RequiredField>,
) {
    for contract_type in ContractType::all() {
        let mut raw = RawInputs::sample(*contract_type);
        clear(&mut raw);
        let err = build(&raw).unwrap_err();
        assert_eq!(err.missing_fields, expected, "{contract_type}");
    }
}

#[test]
fn optional_fields_are_not_required() {
    let mut raw = employee();
    raw.company_representative.clear();
    raw.company_position.clear();
    raw.counterparty_id = None;
    raw.counterparty_address.clear();
    raw.job_title = None;
    raw.confidential_categories.clear();
    build(&raw).expect("only the four required fields are checked");
}

#[test]
fn validation_message_lists_labels() {
    let err = build(&RawInputs::blank(ContractType::Mutual)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Company Name"), "{msg}");
    assert!(msg.contains("Registration Number"), "{msg}");
    assert!(msg.contains("Registered Address"), "{msg}");
    assert!(msg.contains("Receiving Party Name"), "{msg}");
}

// ---------------------------------------------------------------------------
// 2. Derived fields
// ---------------------------------------------------------------------------

#[test]
fn employee_record_carries_employment_detail() {
    let record = build(&employee()).expect("build");
    assert_eq!(record.contract_type(), ContractType::Employee);
    let detail = record.employment().expect("employment detail");
    assert_eq!(detail.job_title, "Software Developer");
    assert_eq!(detail.start_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(record.counterparty().id_number(), Some("8501015800083"));
}

#[rstest]
#[case(ContractType::Contractor)]
#[case(ContractType::Mutual)]
fn non_employee_records_have_no_employment_detail(#[case] contract_type: ContractType) {
    let mut raw = RawInputs::sample(contract_type);
    raw.job_title = Some("Ignored".to_string());
    let record = build(&raw).expect("build");
    assert!(record.employment().is_none());
}

#[test]
fn mutual_company_counterparty_drops_id() {
    let mut raw = RawInputs::sample(ContractType::Mutual);
    raw.counterparty_id = Some("8501015800083".to_string());
    let record = build(&raw).expect("build");
    assert_eq!(record.counterparty().entity_kind(), EntityKind::Company);
    assert_eq!(record.counterparty().id_number(), None);
    assert_eq!(record.counterparty().registration_number(), Some("2023/654321/07"));
}

#[test]
fn mutual_individual_counterparty_keeps_id() {
    let mut raw = RawInputs::sample(ContractType::Mutual);
    raw.counterparty_kind = Some(EntityKind::Individual);
    raw.counterparty_id = Some("8501015800083".to_string());
    let record = build(&raw).expect("build");
    assert!(matches!(
        record.counterparty(),
        Counterparty::Individual { id_number: Some(id), .. } if id == "8501015800083"
    ));
}

#[test]
fn contractor_counterparty_is_always_individual() {
    let mut raw = RawInputs::sample(ContractType::Contractor);
    raw.counterparty_kind = Some(EntityKind::Company);
    let record = build(&raw).expect("build");
    assert_eq!(record.counterparty().entity_kind(), EntityKind::Individual);
}

#[test]
fn mutual_forces_scope_and_survival() {
    let mut raw = RawInputs::sample(ContractType::Mutual);
    raw.geographic_scope = Some(GeographicScope::Global);
    raw.survives_post_termination = false;
    let record = build(&raw).expect("build");
    assert_eq!(record.confidentiality().geographic_scope, GeographicScope::SouthAfricaOnly);
    assert!(record.confidentiality().survives_post_termination);
}

#[test]
fn employee_scope_defaults_to_south_africa() {
    let record = build(&employee()).expect("build");
    assert_eq!(record.confidentiality().geographic_scope, GeographicScope::SouthAfricaOnly);

    let mut raw = employee();
    raw.geographic_scope = Some(GeographicScope::Africa);
    let record = build(&raw).expect("build");
    assert_eq!(record.confidentiality().geographic_scope, GeographicScope::Africa);
}

#[rstest]
#[case(false, Some(75_000), None, 0)]
#[case(true, Some(75_000), Some(75_000), 75_000)]
#[case(true, None, Some(50_000), 50_000)]
fn liquidated_damages_follow_flag(
    #[case] flag: bool,
    #[case] amount: Option<u64>,
    #[case] expected: Option<u64>,
    #[case] effective: u64,
) {
    let mut raw = employee();
    raw.liquidated_damages = flag;
    raw.damages_amount = amount;
    let record = build(&raw).expect("build");
    assert_eq!(record.remedies().liquidated_damages, expected);
    assert_eq!(record.remedies().damages_amount(), effective);
}

#[test]
fn popia_categories_cleared_when_not_applicable() {
    let mut raw = employee();
    raw.involves_personal_data = false;
    raw.personal_data_categories = vec![PersonalDataCategory::Customer];
    let record = build(&raw).expect("build");
    assert!(!record.popia().applies);
    assert!(record.popia().personal_data_categories.is_empty());
}

#[test]
fn blank_additional_information_is_absent() {
    let mut raw = employee();
    raw.additional_information = Some("  ".to_string());
    let record = build(&raw).expect("build");
    assert_eq!(record.confidentiality().additional_text, None);
}

#[test]
fn duration_is_carried_through() {
    let mut raw = employee();
    raw.duration = Duration::Indefinite;
    let record = build(&raw).expect("build");
    assert_eq!(record.confidentiality().duration, Duration::Indefinite);
}

#[test]
fn unrendered_inputs_mention_damages_in_words() {
    let mut raw = employee();
    raw.liquidated_damages = true;
    raw.damages_amount = Some(1_500_000);
    let record = build(&raw).expect("build");
    let notes = record.unrendered_inputs();
    assert!(
        notes.iter().any(|n| n.contains("1 Million 500 Thousand")),
        "notes: {notes:?}"
    );
    assert!(notes.iter().any(|n| n.contains("geographic scope")));
}

#[test]
fn building_twice_yields_equal_records() {
    let raw = employee();
    assert_eq!(build(&raw).unwrap(), build(&raw).unwrap());
}
