use super::id::*;
use rstest::rstest;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_equipment_id_creation() {
    let id = EquipmentId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_equipment_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = EquipmentId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_equipment_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = EquipmentId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
    assert!(EquipmentId::from_str("invalid").is_err());
}

#[rstest]
#[case("1", 1)]
#[case("42", 42)]
#[case(" 7 ", 7)]
fn test_master_id_parses(#[case] input: &str, #[case] expected: i32) {
    assert_eq!(CategoryId::from_str(input).unwrap(), CategoryId::new(expected));
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("0")]
#[case("-3")]
#[case("1.5")]
fn test_master_id_rejects_malformed(#[case] input: &str) {
    let err = SubcategoryId::from_str(input).unwrap_err();
    assert_eq!(err.kind, "subcategory");
    assert_eq!(err.input, input);
}

#[test]
fn test_master_id_error_display() {
    let err = LocationId::from_str("x1").unwrap_err();
    assert_eq!(err.to_string(), "Invalid location id: \"x1\"");
}

#[test]
fn test_master_id_serde_transparent() {
    let id: CategoryId = serde_json::from_str("12").unwrap();
    assert_eq!(id, CategoryId::new(12));
    assert_eq!(serde_json::to_string(&id).unwrap(), "12");
}
