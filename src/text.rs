use chrono::{Local, NaiveDateTime};

use crate::catalog::FieldCatalog;
use crate::model::{Field, Record};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADING: &str = "CIT APPLICANT PROFILE";

// The underline stops one short of the heading's trailing colon.
fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n{}\n", "-".repeat(title.len().saturating_sub(1))));
}

fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label}: {value}\n"));
}

pub fn export_text(record: &Record, catalog: &FieldCatalog) -> String {
    export_text_at(record, catalog, Local::now().naive_local())
}

/// Plain-text profile with a fixed three-section template. The Juz line follows the
/// catalog's visibility rule, so it matches the PDF.
pub fn export_text_at(
    record: &Record,
    catalog: &FieldCatalog,
    generated_at: NaiveDateTime,
) -> String {
    let r = |f: Field| record.get(f);
    let mut out = String::new();

    out.push_str(&format!("{HEADING}\n{}\n\n", "=".repeat(29)));

    section(&mut out, "APPLICANT INFORMATION:");
    line(&mut out, "Full Name", r(Field::FullName));
    line(&mut out, "Address", r(Field::Address));
    out.push_str(&format!(
        "Mobile: {} (WhatsApp: {})\n",
        r(Field::Mobile),
        r(Field::WhatsappMobile)
    ));
    line(&mut out, "Date of Birth", r(Field::Dob));
    line(&mut out, "Place of Birth", r(Field::PlaceOfBirth));
    let nic = if record.is_blank(Field::Nic) {
        "Not provided"
    } else {
        r(Field::Nic)
    };
    line(&mut out, "NIC No", nic);
    line(&mut out, "Languages Spoken", r(Field::Languages));
    out.push('\n');

    section(&mut out, "EDUCATIONAL BACKGROUND:");
    line(&mut out, "School/College Attended", r(Field::SchoolAttended));
    line(&mut out, "Last Institute Attended", r(Field::LastInstitute));
    line(&mut out, "Medium of Instruction", r(Field::Medium));
    line(&mut out, "Last Standard Acquired", r(Field::LastStandard));
    line(&mut out, "Year & Month Last Attended", r(Field::LastAttended));
    out.push('\n');
    line(&mut out, "Quran Memorization", r(Field::QuranMemorized));
    if catalog.is_visible(Field::JuzCount, record) {
        line(&mut out, "Juz Count", r(Field::JuzCount));
    }
    out.push('\n');
    line(&mut out, "Islamic Institute", r(Field::IslamicInstitute));
    line(&mut out, "City/Location", r(Field::CityLocation));
    line(&mut out, "Duration Attended", r(Field::Duration));
    line(&mut out, "Reason for Leaving", r(Field::ReasonLeaving));
    out.push('\n');

    section(&mut out, "PARENT/GUARDIAN INFORMATION:");
    line(&mut out, "Parent/Guardian Name", r(Field::ParentName));
    line(&mut out, "Parent/Guardian Address", r(Field::ParentAddress));
    line(&mut out, "Father Residing", r(Field::FatherResiding));
    line(&mut out, "Occupation", r(Field::Occupation));
    line(&mut out, "Parent Mobile", r(Field::ParentMobile));
    line(&mut out, "Parent WhatsApp", r(Field::ParentWhatsapp));
    line(&mut out, "Languages at Home", r(Field::HomeLanguages));
    out.push('\n');

    line(
        &mut out,
        "Generated on",
        &generated_at.format(TIMESTAMP_FORMAT).to_string(),
    );
    out
}

/// Short review summary: (heading, value) pairs with empty values left out.
pub fn profile_summary(record: &Record) -> Vec<(&'static str, String)> {
    let r = |f: Field| record.get(f).trim();
    let last_education = if r(Field::LastStandard).is_empty() && r(Field::LastAttended).is_empty()
    {
        String::new()
    } else {
        format!("{} ({})", r(Field::LastStandard), r(Field::LastAttended))
    };
    let status = if r(Field::LastInstitute).is_empty() && r(Field::Duration).is_empty() {
        String::new()
    } else {
        format!(
            "Studied at {} for {}",
            r(Field::LastInstitute),
            r(Field::Duration)
        )
    };

    [
        ("Applicant Name", r(Field::FullName).to_string()),
        ("Date of Birth", r(Field::Dob).to_string()),
        ("Last Education", last_education),
        ("Current Status", status),
        ("Parent Contact", r(Field::ParentMobile).to_string()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .collect()
}
