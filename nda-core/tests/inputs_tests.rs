//! Submission-file loading and sample scaffolding.

use std::fs;

use assert_fs::prelude::*;
use nda_core::{
    build, inputs, load_inputs_at, write_sample_at, ContractType, InputError,
};
use predicates::prelude::predicate;

#[test]
fn load_missing_file_returns_io_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.yaml");
    let err = load_inputs_at(&path).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }), "got: {err}");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("broken.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed").expect("write");

    let err = load_inputs_at(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn load_wrong_shape_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("list.yaml");
    file.write_str("- this is a list, not a mapping\n").expect("write");
    let err = load_inputs_at(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }), "got: {err}");
}

#[test]
fn sample_is_written_and_builds() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("nested").child("employee.yaml");

    write_sample_at(file.path(), ContractType::Employee).expect("write sample");
    file.assert(predicate::path::is_file());
    file.assert(predicate::str::contains("company_name: ABC (Pty) Ltd"));
    dir.child("nested").child("employee.yaml.tmp").assert(predicate::path::missing());

    let raw = load_inputs_at(file.path()).expect("load");
    let record = build(&raw).expect("sample must be valid");
    assert_eq!(record.contract_type(), ContractType::Employee);
}

#[test]
fn sample_refuses_to_overwrite() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mutual.yaml");
    file.write_str("keep me\n").expect("write");

    let err = write_sample_at(file.path(), ContractType::Mutual).unwrap_err();
    assert!(matches!(err, InputError::AlreadyExists { .. }), "got: {err}");
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "keep me\n");
}

#[test]
fn handwritten_submission_builds() {
    let yaml = r#"
contract_type: mutual
company_name: ABC (Pty) Ltd
company_registration: 2023/123456/07
company_address: 123 Main Street, Johannesburg, 2001
company_representative: John Smith
company_position: Managing Director
counterparty_kind: company
counterparty_name: XYZ (Pty) Ltd
counterparty_registration: 2023/654321/07
counterparty_address: 456 Business Ave, Cape Town, 8001
confidential_categories:
  - Customer lists and client information
  - Financial information and pricing
additional_information: Pricing models for the 2025 tender
duration: Indefinite
liquidated_damages: true
damages_amount: 250000
involves_personal_data: true
personal_data_categories:
  - Customer personal data
"#;
    let raw = inputs::parse_inputs(yaml).expect("parse");
    let record = build(&raw).expect("build");
    assert_eq!(record.contract_type(), ContractType::Mutual);
    assert_eq!(record.confidentiality().categories.len(), 2);
    assert_eq!(record.remedies().liquidated_damages, Some(250_000));
    assert_eq!(record.popia().personal_data_categories.len(), 1);
}
