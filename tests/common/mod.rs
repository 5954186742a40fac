#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use applicant_profile::{DrawCommand, Field, Record, TextRole};

pub const SAMPLE_ROW: [&str; 27] = [
    "1/3/2026 18:07:21",
    "Mohammed Aslam Muhammed",
    "19, Ibrahim Road, Akurana",
    "0772226866",
    "0771234567",
    "19 February 2009",
    "Akurana",
    "",
    "English, Tamil",
    "Hejazz International, Al Haqqaniyah Arabic College",
    "Al Haqqaniyyah Arabic College",
    "English",
    "GCE (O/L)",
    "2023, June",
    "Yes",
    "30",
    "Al Haqqaniyyah Arabic College",
    "Kandy",
    "3 years",
    "Wants to be with parents and continue studies",
    "Ahamad Farook Mohammed Shifas",
    "38/C Kawdana Road, Dehiwala",
    "Inland",
    "Business",
    "0779999999",
    "0778888888",
    "English, Tamil",
];

pub fn sample_row() -> String {
    SAMPLE_ROW.join("\t")
}

/// Every field filled from `SAMPLE_ROW`.
pub fn full_record() -> Record {
    Field::ALL
        .iter()
        .zip(SAMPLE_ROW)
        .map(|(f, v)| (*f, v.to_string()))
        .collect()
}

pub const MINIMAL_FIELDS: [Field; 6] = [
    Field::FullName,
    Field::Address,
    Field::Mobile,
    Field::Dob,
    Field::ParentName,
    Field::ParentMobile,
];

pub fn minimal_record() -> Record {
    Record::new()
        .with(Field::FullName, "A B")
        .with(Field::Address, "1 Main St")
        .with(Field::Mobile, "0771234567")
        .with(Field::Dob, "1 Jan 2000")
        .with(Field::ParentName, "C D")
        .with(Field::ParentMobile, "0779999999")
}

pub fn texts_with_role(commands: &[DrawCommand], role: TextRole) -> Vec<&str> {
    commands
        .iter()
        .filter(|c| c.role() == Some(role))
        .filter_map(|c| c.text())
        .collect()
}

pub fn page_breaks(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::PageBreak))
        .count()
}

/// Scratch directory: tests/output/<name>/, recreated empty.
pub fn output_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(name);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create output dir");
    dir
}

pub fn pdf_page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("generated PDF parses")
        .get_pages()
        .len()
}

pub fn pdf_text(bytes: &[u8]) -> String {
    let doc = lopdf::Document::load_mem(bytes).expect("generated PDF parses");
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages).unwrap_or_default()
}
