//! Tests for DataStore: JSON round-trip and merge semantics

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use resist::application::{DataStore, ResistanceManager, ResistanceModel};
use resist::infrastructure::error::InfraError;
use resist::infrastructure::geocoder::ZipGazetteer;
use resist::infrastructure::traits::RealFileSystem;
use resist::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn store() -> DataStore {
    DataStore::new(Arc::new(RealFileSystem))
}

fn populated_model() -> ResistanceModel {
    let mgr = ResistanceManager::new(Arc::new(ZipGazetteer));
    let mut model = ResistanceModel::new();
    mgr.add_member(&mut model, "Alice Smith", "alice@x.com", "10001")
        .unwrap();
    mgr.add_protest(&mut model, "March", "10002", "Jan 21 2017 13:00 PST")
        .unwrap();
    mgr.add_movement(&mut model, "Climate").unwrap();
    model.add_member_to_protest("Alice Smith", "March").unwrap();
    model.add_protest_to_movement("March", "Climate").unwrap();
    model
}

#[test]
fn given_populated_model_when_saving_and_loading_then_aggregate_round_trips() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("resistance.json");
    let model = populated_model();
    let store = store();

    // Act
    store.save(&path, &model.snapshot()).unwrap();
    let mut restored = ResistanceModel::new();
    restored.merge(store.load(&path).unwrap());

    // Assert: identical registry contents and field values
    assert_eq!(restored.snapshot(), model.snapshot());
    assert_eq!(
        restored.get_protesters("March").unwrap(),
        vec!["Alice Smith <alice@x.com>".to_string()]
    );
}

#[test]
fn given_name_without_extension_when_saving_then_json_is_appended() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let bare = temp.path().join("data");
    let store = store();

    // Act
    store.save(&bare, &populated_model().snapshot()).unwrap();

    // Assert: the file landed as data.json and loads via the bare name too
    assert!(temp.path().join("data.json").exists());
    let snapshot = store.load(&bare).unwrap();
    assert_eq!(snapshot.protesters.len(), 1);
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let result = store().load(Path::new("/nonexistent/resistance.json"));
    assert!(matches!(result, Err(InfraError::Io { .. })));
}

#[test]
fn given_malformed_json_when_loading_then_data_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    // Act
    let result = store().load(&path);

    // Assert
    assert!(matches!(result, Err(InfraError::MalformedData { .. })));
}

#[test]
fn given_overlapping_snapshots_when_merging_then_union_and_last_wins() {
    // Arrange: two files sharing the member name but different emails
    let mgr = ResistanceManager::new(Arc::new(ZipGazetteer));

    let mut first = ResistanceModel::new();
    mgr.add_member(&mut first, "Alice", "old@x.com", "10001")
        .unwrap();
    mgr.add_movement(&mut first, "Climate").unwrap();

    let mut second = ResistanceModel::new();
    mgr.add_member(&mut second, "alice", "new@x.com", "10002")
        .unwrap();
    mgr.add_movement(&mut second, "Justice").unwrap();

    // Act
    let mut merged = ResistanceModel::new();
    merged.merge(first.snapshot());
    merged.merge(second.snapshot());

    // Assert: union of movements, last-loaded Alice wins
    assert_eq!(merged.movement_count(), 2);
    assert_eq!(merged.member_count(), 1);
    assert_eq!(merged.find_member_names("alice"), vec!["alice".to_string()]);
}
