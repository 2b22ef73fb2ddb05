//! Tests for ResistanceManager: validate → construct → register

use std::sync::Arc;

use rstest::rstest;

use resist::application::{ApplicationError, ResistanceManager, ResistanceModel};
use resist::domain::DomainError;
use resist::infrastructure::geocoder::ZipGazetteer;
use resist::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn manager() -> ResistanceManager {
    ResistanceManager::new(Arc::new(ZipGazetteer))
}

#[test]
fn given_valid_input_when_adding_member_then_registered_under_trimmed_name() {
    // Arrange
    let mgr = manager();
    let mut model = ResistanceModel::new();

    // Act
    let name = mgr
        .add_member(&mut model, "  Alice Smith ", "alice@x.com", "10001-4356")
        .unwrap();

    // Assert
    assert_eq!(name, "Alice Smith");
    assert!(model.has_member("alice smith"));
}

#[rstest]
#[case("", "alice@x.com", "10001")] // empty name
#[case("Alice", "not-an-email", "10001")] // implausible email
#[case("Alice", "alice@x.com", "abcde")] // malformed zip
#[case("Alice", "alice@x.com", "99999")] // unresolvable zip
fn given_bad_input_when_adding_member_then_nothing_registered(
    #[case] name: &str,
    #[case] email: &str,
    #[case] zip: &str,
) {
    // Arrange
    let mgr = manager();
    let mut model = ResistanceModel::new();

    // Act
    let result = mgr.add_member(&mut model, name, email, zip);

    // Assert: atomic failure, model untouched
    assert!(result.unwrap_err().is_validation());
    assert_eq!(model.member_count(), 0);
}

#[test]
fn given_registered_member_when_adding_same_name_then_duplicate_rejected() {
    let mgr = manager();
    let mut model = ResistanceModel::new();
    mgr.add_member(&mut model, "Alice", "alice@x.com", "10001")
        .unwrap();

    let result = mgr.add_member(&mut model, "ALICE", "other@x.com", "10002");

    assert!(matches!(
        result,
        Err(ApplicationError::DuplicateName { kind: "member", .. })
    ));
    assert_eq!(model.member_count(), 1);
}

#[test]
fn given_valid_input_when_adding_protest_then_time_and_location_resolved() {
    // Arrange
    let mgr = manager();
    let mut model = ResistanceModel::new();

    // Act
    let name = mgr
        .add_protest(&mut model, "March", "10002", "Jan 21 2017 13:00 PST")
        .unwrap();

    // Assert
    assert_eq!(name, "March");
    assert!(model.has_protest("march"));
}

#[test]
fn given_unparsable_date_when_adding_protest_then_invalid_date_error() {
    let mgr = manager();
    let mut model = ResistanceModel::new();

    let result = mgr.add_protest(&mut model, "March", "10002", "whenever");

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidDate(_)))
    ));
    assert_eq!(model.protest_count(), 0);
}

#[test]
fn given_movement_name_when_adding_twice_then_second_rejected() {
    let mgr = manager();
    let mut model = ResistanceModel::new();

    assert_eq!(mgr.add_movement(&mut model, "Climate").unwrap(), "Climate");
    assert!(mgr.add_movement(&mut model, "climate").is_err());
    assert!(mgr.add_movement(&mut model, "  ").is_err());
    assert_eq!(model.movement_count(), 1);
}
