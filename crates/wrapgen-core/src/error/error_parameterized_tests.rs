#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized error code mapping tests
// ============================================================================

#[test_case(WrapgenError::Scan(ScanError::UnknownType("t".into())), 1 ; "scan")]
#[test_case(WrapgenError::Catalog(CatalogError::DuplicateEntry("int".into())), 2 ; "catalog")]
#[test_case(WrapgenError::Config(ConfigError::Invalid("x".into())), 3 ; "config")]
#[test_case(WrapgenError::Registry(RegistryError::DuplicateKey("k".into())), 4 ; "registry")]
#[test_case(WrapgenError::Field(FieldError::EmptyAccessorName("?".into())), 5 ; "field")]
#[test_case(WrapgenError::MissingInput { kind: "doc", message_type: "m".into() }, 6 ; "missing input")]
#[test_case(WrapgenError::Serialization("bad".into()), 7 ; "serialization")]
fn WrapgenError___variant___maps_to_correct_code(error: WrapgenError, expected_code: u32) {
    assert_eq!(error.error_code(), expected_code);
}

// ============================================================================
// Parameterized message preservation tests
// ============================================================================

#[test_case(CatalogError::Malformed("line 3".into()), "malformed modifier table: line 3")]
#[test_case(CatalogError::DuplicateEntry("int".into()), "duplicate modifier for runtime type: int")]
#[test_case(
    CatalogError::EmptyValue { runtime_type: "int".into(), field: "accessor" },
    "modifier for 'int' has an empty accessor"
)]
fn CatalogError___display___includes_detail(error: CatalogError, expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test_case(ConfigError::Parse("eof".into()), "failed to parse configuration: eof")]
#[test_case(ConfigError::Invalid("empty package".into()), "invalid configuration: empty package")]
#[test_case(
    ConfigError::Read { path: "a.toml".into(), message: "denied".into() },
    "failed to read a.toml: denied"
)]
fn ConfigError___display___includes_detail(error: ConfigError, expected: &str) {
    assert_eq!(error.to_string(), expected);
}
