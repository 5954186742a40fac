use std::collections::BTreeMap;

/// The closed set of record keys. Declaration order is the positional order of a
/// pasted form-export row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Timestamp,
    FullName,
    Address,
    WhatsappMobile,
    Mobile,
    Dob,
    PlaceOfBirth,
    Nic,
    Languages,
    SchoolAttended,
    LastInstitute,
    Medium,
    LastStandard,
    LastAttended,
    QuranMemorized,
    JuzCount,
    IslamicInstitute,
    CityLocation,
    Duration,
    ReasonLeaving,
    ParentName,
    ParentAddress,
    FatherResiding,
    Occupation,
    ParentMobile,
    ParentWhatsapp,
    HomeLanguages,
}

impl Field {
    pub const ALL: [Field; 27] = [
        Field::Timestamp,
        Field::FullName,
        Field::Address,
        Field::WhatsappMobile,
        Field::Mobile,
        Field::Dob,
        Field::PlaceOfBirth,
        Field::Nic,
        Field::Languages,
        Field::SchoolAttended,
        Field::LastInstitute,
        Field::Medium,
        Field::LastStandard,
        Field::LastAttended,
        Field::QuranMemorized,
        Field::JuzCount,
        Field::IslamicInstitute,
        Field::CityLocation,
        Field::Duration,
        Field::ReasonLeaving,
        Field::ParentName,
        Field::ParentAddress,
        Field::FatherResiding,
        Field::Occupation,
        Field::ParentMobile,
        Field::ParentWhatsapp,
        Field::HomeLanguages,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::FullName => "full_name",
            Field::Address => "address",
            Field::WhatsappMobile => "whatsapp_mobile",
            Field::Mobile => "mobile",
            Field::Dob => "dob",
            Field::PlaceOfBirth => "place_of_birth",
            Field::Nic => "nic",
            Field::Languages => "languages",
            Field::SchoolAttended => "school_attended",
            Field::LastInstitute => "last_institute",
            Field::Medium => "medium",
            Field::LastStandard => "last_standard",
            Field::LastAttended => "last_attended",
            Field::QuranMemorized => "quran_memorized",
            Field::JuzCount => "juz_count",
            Field::IslamicInstitute => "islamic_institute",
            Field::CityLocation => "city_location",
            Field::Duration => "duration",
            Field::ReasonLeaving => "reason_leaving",
            Field::ParentName => "parent_name",
            Field::ParentAddress => "parent_address",
            Field::FatherResiding => "father_residing",
            Field::Occupation => "occupation",
            Field::ParentMobile => "parent_mobile",
            Field::ParentWhatsapp => "parent_whatsapp",
            Field::HomeLanguages => "home_languages",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// One applicant's answers. Missing keys read as the empty string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<Field, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// True when the field is absent or holds only whitespace.
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl FromIterator<(Field, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Record {
            values: iter.into_iter().collect(),
        }
    }
}

/// The two base-14 faces the profile uses. Both are referenced, never embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Letterhead,
    Title,
    Label,
    Value,
    Footer,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32, // baseline, PDF user space (origin bottom-left)
        face: FontFace,
        size: f32,
        text: String,
        role: TextRole,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        width: f32,
    },
    PageBreak,
}

impl DrawCommand {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<TextRole> {
        match self {
            DrawCommand::Text { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// All values in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Distance from the top edge to the first baseline on continuation pages.
    pub margin_top: f32,
    /// Baselines are never placed below this y.
    pub margin_bottom: f32,
    /// Distance from the top edge to the first field label on page 1 (below the letterhead).
    pub body_top: f32,
    pub line_height: f32,
    pub blank_line_height: f32,
    /// Space between a label and its value.
    pub label_gap: f32,
    pub field_gap: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        PageGeometry {
            page_width: 595.2756,
            page_height: 841.8898,
            margin_left: 30.0,
            margin_right: 30.0,
            margin_top: 40.0,
            margin_bottom: 100.0,
            body_top: 120.0,
            line_height: 15.0,
            blank_line_height: 15.0,
            label_gap: 0.0,
            field_gap: 5.0,
        }
    }

    /// A4 with a 30 pt frame on every side and 11 pt text at 1.2 leading, for the
    /// table style.
    pub fn a4_table() -> Self {
        PageGeometry {
            margin_top: 41.0, // frame plus one line of 11 pt text
            margin_bottom: 30.0,
            line_height: 13.2,
            blank_line_height: 13.2,
            label_gap: 2.0,
            field_gap: 13.0,
            ..Self::a4()
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn top_y(&self) -> f32 {
        self.page_height - self.margin_top
    }

    pub fn body_start_y(&self) -> f32 {
        self.page_height - self.body_top
    }

    /// How many label/value lines fit between the continuation top and the bottom threshold.
    pub fn lines_per_page(&self) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        let usable = self.top_y() - self.margin_bottom;
        if usable < 0.0 {
            0
        } else {
            (usable / self.line_height).floor() as usize + 1
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
