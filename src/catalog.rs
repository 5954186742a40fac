use crate::error::Error;
use crate::model::{Field, Record};

pub type Visibility = fn(&Record) -> bool;

pub struct CatalogEntry {
    pub label: &'static str,
    pub field: Field,
    pub required: bool,
    pub visible: Visibility,
}

fn always(_: &Record) -> bool {
    true
}

/// Case-insensitive "yes", ignoring surrounding whitespace.
pub fn answered_yes(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

fn memorized_quran(record: &Record) -> bool {
    answered_yes(record.get(Field::QuranMemorized))
}

const fn entry(label: &'static str, field: Field, required: bool) -> CatalogEntry {
    CatalogEntry {
        label,
        field,
        required,
        visible: always,
    }
}

/// Labels and order of the paper admission form.
const STANDARD: [CatalogEntry; 26] = [
    entry("Full Name", Field::FullName, true),
    entry("Address", Field::Address, true),
    entry("Mobile (WhatsApp)", Field::WhatsappMobile, true),
    entry("Mobile", Field::Mobile, true),
    entry("Date of Birth", Field::Dob, true),
    entry("Place of Birth", Field::PlaceOfBirth, true),
    entry("NIC No", Field::Nic, false),
    entry("Languages Spoken", Field::Languages, true),
    entry("School/College Attended", Field::SchoolAttended, true),
    entry("Last Institute Attended", Field::LastInstitute, true),
    entry("Medium of Instruction", Field::Medium, true),
    entry("Last Standard Acquired", Field::LastStandard, true),
    entry("Year & Month Last Attended", Field::LastAttended, true),
    entry("Completed Memorizing Quran?", Field::QuranMemorized, false),
    CatalogEntry {
        label: "If Yes,How Many Juz?",
        field: Field::JuzCount,
        required: false,
        visible: memorized_quran,
    },
    entry("Islamic Institute Last Attended", Field::IslamicInstitute, false),
    entry("City/Location", Field::CityLocation, false),
    entry("Duration Attended", Field::Duration, false),
    entry("Reason for Leaving", Field::ReasonLeaving, false),
    entry("Parent/Guardian Full Name", Field::ParentName, true),
    entry("Parent/Guardian Address", Field::ParentAddress, true),
    entry("Father Residing", Field::FatherResiding, false),
    entry("Occupation", Field::Occupation, true),
    entry("Parent/Guardian Mobile No.", Field::ParentMobile, true),
    entry("WhatsApp No.", Field::ParentWhatsapp, true),
    entry("Language(s)Spoken at Home", Field::HomeLanguages, true),
];

/// Ordered schema of the document. Order is fixed at construction and never
/// derived from a record.
pub struct FieldCatalog {
    entries: Vec<CatalogEntry>,
}

impl FieldCatalog {
    pub fn standard() -> Self {
        FieldCatalog {
            entries: STANDARD.into_iter().collect(),
        }
    }

    /// Same entries and order, with exactly `required` marked as required.
    pub fn with_required(mut self, required: &[Field]) -> Self {
        for e in &mut self.entries {
            e.required = required.contains(&e.field);
        }
        self
    }

    /// Keep only the entries for `fields`, in catalog order.
    pub fn retain(mut self, fields: &[Field]) -> Self {
        self.entries.retain(|e| fields.contains(&e.field));
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn label(&self, field: Field) -> Option<&'static str> {
        self.entries.iter().find(|e| e.field == field).map(|e| e.label)
    }

    /// Whether `field` would appear for this record. Fields outside the catalog are hidden.
    pub fn is_visible(&self, field: Field, record: &Record) -> bool {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .is_some_and(|e| (e.visible)(record))
    }

    pub fn visible_entries<'r>(&self, record: &'r Record) -> Vec<(&'static str, &'r str)> {
        self.entries
            .iter()
            .filter(|e| (e.visible)(record))
            .map(|e| (e.label, record.get(e.field)))
            .collect()
    }

    /// Labels of required entries that are blank, in catalog order.
    pub fn missing_required(&self, record: &Record) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.required && record.is_blank(e.field))
            .map(|e| e.label)
            .collect()
    }

    pub fn validate(&self, record: &Record) -> Result<(), Error> {
        let missing = self.missing_required(record);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation { missing })
        }
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
