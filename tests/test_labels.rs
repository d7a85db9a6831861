mod common;

use eqsnap::{LabelMap, SolveError};

use common::test_label_map;

#[test]
fn maps_ids_back_to_symbols_in_order() {
    let labels = test_label_map();
    let symbols = labels.symbols_for(&[3, 10, 4]).unwrap();
    assert_eq!(symbols, vec!["3", "+", "4"]);
}

#[test]
fn duplicate_class_ids_fail_at_load_time() {
    let pairs = vec![("+".to_string(), 0), ("-".to_string(), 0)];
    let err = LabelMap::from_pairs(pairs).unwrap_err();
    assert!(matches!(err, SolveError::DuplicateClassId { id: 0 }));
}

#[test]
fn unknown_prediction_id_is_an_error() {
    let labels = test_label_map();
    let err = labels.symbols_for(&[99]).unwrap_err();
    assert!(matches!(err, SolveError::UnknownClassId { id: 99 }));
}

#[test]
fn forward_and_inverse_maps_agree() {
    let labels = test_label_map();
    for symbol in ["0", "9", "+", "/"] {
        let id = labels.id_of(symbol).unwrap();
        assert_eq!(labels.symbol_of(id), Some(symbol));
    }
}

#[test]
fn missing_dictionary_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = eqsnap::Artifacts::load(dir.path()).unwrap_err();
    assert!(matches!(err, SolveError::ArtifactIo { .. }));
}

#[test]
fn malformed_dictionary_is_a_format_error() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("class_dictionary.json"), b"not json").unwrap();
    let err = eqsnap::Artifacts::load(dir.path()).unwrap_err();
    assert!(matches!(err, SolveError::ArtifactFormat { .. }));
}

#[test]
fn loads_from_a_flat_json_document() {
    let json = r#"{"7": 7, "+": 10, "*": 12}"#;
    let labels = LabelMap::from_reader(json.as_bytes(), "inline").unwrap();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels.symbol_of(10), Some("+"));
}
