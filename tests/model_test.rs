//! Tests for ResistanceModel: search, linking, queries

use std::sync::Arc;

use resist::application::{ApplicationError, ResistanceManager, ResistanceModel};
use resist::infrastructure::geocoder::ZipGazetteer;
use resist::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn manager() -> ResistanceManager {
    ResistanceManager::new(Arc::new(ZipGazetteer))
}

/// Model with Alice (10001), the "March" protest (10002) and one movement.
fn populated_model() -> ResistanceModel {
    let mgr = manager();
    let mut model = ResistanceModel::new();
    mgr.add_member(&mut model, "Alice Smith", "alice@x.com", "10001")
        .unwrap();
    mgr.add_protest(&mut model, "March", "10002", "Jan 21 2017 13:00 PST")
        .unwrap();
    mgr.add_movement(&mut model, "Climate").unwrap();
    model
}

#[test]
fn given_overlapping_names_when_searching_then_all_matches_returned_in_order() {
    // Arrange
    let mgr = manager();
    let mut model = ResistanceModel::new();
    mgr.add_protest(&mut model, "Marathon", "10001", "Feb 01 2017 09:00 EST")
        .unwrap();
    mgr.add_protest(&mut model, "March", "10002", "Jan 21 2017 13:00 PST")
        .unwrap();

    // Act
    let hits = model.find_protest_names("mar");

    // Assert: case-insensitive substring match, ascending canonical order
    assert_eq!(hits, vec!["Marathon".to_string(), "March".to_string()]);
    assert!(model.find_protest_names("xyz").is_empty());
}

#[test]
fn given_empty_query_when_searching_then_everything_matches() {
    let model = populated_model();
    assert_eq!(model.find_member_names(""), vec!["Alice Smith".to_string()]);
    assert_eq!(model.find_movement_names(""), vec!["Climate".to_string()]);
}

#[test]
fn given_member_and_protest_when_linking_then_roster_lists_member_once() {
    // Arrange
    let mut model = populated_model();

    // Act
    let first = model.add_member_to_protest("Alice Smith", "March").unwrap();
    let second = model.add_member_to_protest("alice smith", "March").unwrap();

    // Assert: second link is an absorbed no-op
    assert!(first);
    assert!(!second);
    let members = model.get_protesters("March").unwrap();
    assert_eq!(members, vec!["Alice Smith <alice@x.com>".to_string()]);
}

#[test]
fn given_unknown_names_when_linking_then_lookup_errors_surface() {
    let mut model = populated_model();

    assert!(matches!(
        model.add_member_to_protest("Nobody", "March"),
        Err(ApplicationError::UnknownMember(_))
    ));
    assert!(matches!(
        model.add_member_to_protest("Alice Smith", "Nothing"),
        Err(ApplicationError::UnknownProtest(_))
    ));
    assert!(matches!(
        model.add_protest_to_movement("March", "Nothing"),
        Err(ApplicationError::UnknownMovement(_))
    ));
}

#[test]
fn given_protest_with_empty_roster_when_listing_then_ok_and_empty() {
    // "found, no members" is Ok(vec![]), "not found" is an error
    let model = populated_model();
    assert!(model.get_protesters("March").unwrap().is_empty());
    assert!(matches!(
        model.get_protesters("Nothing"),
        Err(ApplicationError::UnknownProtest(_))
    ));
}

#[test]
fn given_protest_when_renaming_then_registry_is_rekeyed() {
    // Arrange
    let mut model = populated_model();
    model.add_protest_to_movement("March", "Climate").unwrap();

    // Act
    model
        .modify_protest("March", Some("Grand March"), None)
        .unwrap();

    // Assert: old key gone, new key resolves, rosters survive
    assert!(!model.has_protest("March"));
    assert!(model.has_protest("Grand March"));
    assert!(model.get_protesters("Grand March").is_ok());
    assert!(matches!(
        model.modify_protest("March", None, None),
        Err(ApplicationError::UnknownProtest(_))
    ));
}

#[test]
fn given_existing_name_when_renaming_onto_it_then_rejected() {
    let mgr = manager();
    let mut model = populated_model();
    mgr.add_protest(&mut model, "Rally", "10001", "Mar 01 2017 10:00 EST")
        .unwrap();

    let result = model.modify_protest("Rally", Some("March"), None);

    assert!(matches!(
        result,
        Err(ApplicationError::DuplicateName { kind: "protest", .. })
    ));
    // nothing changed
    assert!(model.has_protest("Rally"));
    assert!(model.has_protest("March"));
}

#[test]
fn given_radius_zero_when_querying_members_then_only_same_zip_matches() {
    // Arrange: Alice at 10001, protest also at 10001, Bob at 10002
    let mgr = manager();
    let mut model = ResistanceModel::new();
    mgr.add_member(&mut model, "Alice Smith", "alice@x.com", "10001")
        .unwrap();
    mgr.add_member(&mut model, "Bob Jones", "bob@x.com", "10002")
        .unwrap();
    mgr.add_protest(&mut model, "March", "10001", "Jan 21 2017 13:00 PST")
        .unwrap();

    // Act
    let nearby = model.users_near_protest("March", 0.0).unwrap();

    // Assert
    assert_eq!(nearby, vec!["Alice Smith <alice@x.com>".to_string()]);
}

#[test]
fn given_protests_at_various_distances_when_querying_nearby_then_rendered_with_movements() {
    // Arrange: two NYC protests, one in LA
    let mgr = manager();
    let mut model = ResistanceModel::new();
    mgr.add_protest(&mut model, "March", "10002", "Jan 21 2017 13:00 PST")
        .unwrap();
    mgr.add_protest(&mut model, "Sit-in", "10001", "Jan 22 2017 09:00 EST")
        .unwrap();
    mgr.add_protest(&mut model, "Walkout", "90210", "Jan 23 2017 12:00 PST")
        .unwrap();
    mgr.add_movement(&mut model, "Climate").unwrap();
    mgr.add_movement(&mut model, "Justice").unwrap();
    model.add_protest_to_movement("March", "Climate").unwrap();
    model.add_protest_to_movement("March", "Justice").unwrap();

    let geocoder = ZipGazetteer;
    use resist::infrastructure::traits::Geocoder;
    let origin = geocoder.locate("10001").unwrap();

    // Act
    let nearby = model.nearby_protests(&origin, 20.0);

    // Assert: both NYC protests, LA excluded, movements listed
    assert_eq!(nearby.len(), 2);
    assert!(
        nearby[0].contains("March") && nearby[0].contains("movements: Climate, Justice"),
        "unexpected rendering: {}",
        nearby[0]
    );
    assert!(nearby[1].contains("Sit-in") && nearby[1].contains("movements: none"));
    assert!(model.nearby_protests(&origin, 0.1).len() == 1); // only the same-zip one
}
