mod common;

use applicant_profile::catalog::answered_yes;
use applicant_profile::{Error, Field, FieldCatalog, Record};

use common::{MINIMAL_FIELDS, full_record, minimal_record};

#[test]
fn visible_entries_keep_declaration_order() {
    let catalog = FieldCatalog::standard();
    let record = full_record();
    let entries = catalog.visible_entries(&record);

    assert_eq!(entries.len(), 26);
    assert_eq!(entries[0], ("Full Name", "Mohammed Aslam Muhammed"));
    assert_eq!(entries[14], ("If Yes,How Many Juz?", "30"));
    assert_eq!(entries[25], ("Language(s)Spoken at Home", "English, Tamil"));
}

#[test]
fn absent_keys_read_as_empty() {
    let catalog = FieldCatalog::standard();
    let record = Record::new();
    let entries = catalog.visible_entries(&record);
    assert_eq!(entries.len(), 25);
    assert!(entries.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn juz_visibility_is_case_insensitive() {
    assert!(answered_yes("Yes"));
    assert!(answered_yes("yes"));
    assert!(answered_yes(" YES\n"));
    assert!(!answered_yes("No"));
    assert!(!answered_yes(""));
    assert!(!answered_yes("yes please"));

    let catalog = FieldCatalog::standard();
    let hidden = Record::new().with(Field::JuzCount, "12");
    assert!(!catalog.is_visible(Field::JuzCount, &hidden));
    assert!(catalog.is_visible(Field::JuzCount, &hidden.with(Field::QuranMemorized, "yes")));
}

#[test]
fn missing_required_lists_labels_in_catalog_order() {
    let catalog = FieldCatalog::standard();
    let record = full_record()
        .with(Field::Occupation, "   ")
        .with(Field::Address, "");

    assert_eq!(catalog.missing_required(&record), vec!["Address", "Occupation"]);
    match catalog.validate(&record) {
        Err(Error::Validation { missing }) => assert_eq!(missing, vec!["Address", "Occupation"]),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn optional_fields_may_be_blank() {
    let catalog = FieldCatalog::standard();
    let record = full_record()
        .with(Field::Nic, "")
        .with(Field::QuranMemorized, "")
        .with(Field::FatherResiding, "");
    assert!(catalog.validate(&record).is_ok());
}

#[test]
fn standard_catalog_requires_eighteen_fields() {
    let catalog = FieldCatalog::standard();
    assert_eq!(catalog.missing_required(&Record::new()).len(), 18);
}

#[test]
fn required_set_can_be_overridden() {
    let catalog = FieldCatalog::standard().with_required(&MINIMAL_FIELDS);
    assert!(catalog.validate(&minimal_record()).is_ok());
    assert_eq!(catalog.entries().len(), 26);

    let missing = catalog.missing_required(&Record::new().with(Field::FullName, "A B"));
    assert_eq!(
        missing,
        vec![
            "Address",
            "Mobile",
            "Date of Birth",
            "Parent/Guardian Full Name",
            "Parent/Guardian Mobile No."
        ]
    );
}

#[test]
fn retain_keeps_catalog_order() {
    let catalog = FieldCatalog::standard().retain(&[Field::ParentName, Field::FullName]);
    let labels: Vec<&str> = catalog.entries().iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Full Name", "Parent/Guardian Full Name"]);
    assert_eq!(catalog.label(Field::Mobile), None);
}
