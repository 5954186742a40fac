use crate::catalog::FieldCatalog;
use crate::fonts::{space_width, text_width};
use crate::model::{DrawCommand, FontFace, PageGeometry, Record, TextRole};

pub const LETTERHEAD_SIZE: f32 = 11.0;
pub const TITLE_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 11.0;
pub const RULE_WIDTH: f32 = 1.0;

const LETTERHEAD_FIRST_OFFSET: f32 = 40.0;
const LETTERHEAD_LINE_STEP: f32 = 15.0;
const TITLE_OFFSET: f32 = 85.0;
/// Distance from the top edge to the letterhead rule; the form body must start below it.
pub(crate) const RULE_OFFSET: f32 = 95.0;

const TABLE_HEADER_AFTER: f32 = 6.0;
const TABLE_TITLE_BEFORE: f32 = 10.0;
const TABLE_TITLE_AFTER: f32 = 32.0;
const TABLE_NOTES_BEFORE: f32 = 10.0;

pub const FOOTER_LABEL: &str = "Additional Notes:";

/// Institution boilerplate drawn above the fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Letterhead {
    pub lines: Vec<String>,
    pub title: String,
    /// Repeat on every page instead of page 1 only. Form style only; the table style
    /// flows its heading once at the top of the document.
    pub every_page: bool,
}

impl Letterhead {
    pub fn institution() -> Self {
        Letterhead {
            lines: vec![
                "No.37,32nd Lane Colombo 06. Tel:+94112361793 / +94777365964".to_string(),
                "Reg.No.R/2552/C/238 (MRCA)".to_string(),
            ],
            title: "New Admission Applicant Profile".to_string(),
            every_page: false,
        }
    }
}

impl Default for Letterhead {
    fn default() -> Self {
        Self::institution()
    }
}

/// How the fields are arranged on the page.
///
/// `Form` mirrors the paper form: fixed letterhead offsets, a rule under the title, and
/// "Additional Notes:" only when room remains. `Table` flows the heading like a document
/// story, spaces label and value apart, and always ends with "Additional Notes:".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStyle {
    #[default]
    Form,
    Table,
}

impl LayoutStyle {
    pub fn geometry(self) -> PageGeometry {
        match self {
            LayoutStyle::Form => PageGeometry::a4(),
            LayoutStyle::Table => PageGeometry::a4_table(),
        }
    }
}

/// Greedy word wrap. Words are whitespace-separated; a word wider than `max_width`
/// gets a line of its own and is never split.
pub fn wrap_words(text: &str, max_width: f32, face: FontFace, size: f32) -> Vec<String> {
    let space_w = space_width(face, size);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w: f32 = 0.0;

    for word in text.split_whitespace() {
        let ww = text_width(word, face, size);
        if current.is_empty() {
            current.push_str(word);
            current_w = ww;
            continue;
        }
        let proposed = current_w + space_w + ww;
        if proposed > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = ww;
        } else {
            current.push(' ');
            current.push_str(word);
            current_w = proposed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// Coordinates are PDF user space, so the cursor moves down by decreasing `y`.
struct Flow<'a> {
    geometry: &'a PageGeometry,
    letterhead: &'a Letterhead,
    style: LayoutStyle,
    commands: Vec<DrawCommand>,
    y: f32,
    pages: usize,
}

impl<'a> Flow<'a> {
    fn new(geometry: &'a PageGeometry, letterhead: &'a Letterhead, style: LayoutStyle) -> Self {
        let mut flow = Flow {
            geometry,
            letterhead,
            style,
            commands: Vec::new(),
            y: geometry.body_start_y(),
            pages: 1,
        };
        match style {
            LayoutStyle::Form => flow.draw_letterhead(),
            LayoutStyle::Table => flow.draw_table_heading(),
        }
        flow
    }

    fn draw_table_heading(&mut self) {
        let g = self.geometry;
        let mut y = g.top_y();
        for line in &self.letterhead.lines {
            self.commands.push(DrawCommand::Text {
                x: g.margin_left,
                y,
                face: FontFace::HelveticaBold,
                size: LETTERHEAD_SIZE,
                text: line.clone(),
                role: TextRole::Letterhead,
            });
            y -= g.line_height + TABLE_HEADER_AFTER;
        }
        y -= TABLE_TITLE_BEFORE + (TITLE_SIZE - LETTERHEAD_SIZE);
        let title_w = text_width(&self.letterhead.title, FontFace::HelveticaBold, TITLE_SIZE);
        self.commands.push(DrawCommand::Text {
            x: ((g.page_width - title_w) / 2.0).max(g.margin_left),
            y,
            face: FontFace::HelveticaBold,
            size: TITLE_SIZE,
            text: self.letterhead.title.clone(),
            role: TextRole::Title,
        });
        self.y = y - g.line_height - TABLE_TITLE_AFTER;
    }

    fn draw_letterhead(&mut self) {
        let g = self.geometry;
        let top = g.page_height;
        for (i, line) in self.letterhead.lines.iter().enumerate() {
            self.commands.push(DrawCommand::Text {
                x: g.margin_left,
                y: top - LETTERHEAD_FIRST_OFFSET - i as f32 * LETTERHEAD_LINE_STEP,
                face: FontFace::HelveticaBold,
                size: LETTERHEAD_SIZE,
                text: line.clone(),
                role: TextRole::Letterhead,
            });
        }
        let title_w = text_width(&self.letterhead.title, FontFace::HelveticaBold, TITLE_SIZE);
        self.commands.push(DrawCommand::Text {
            x: ((g.page_width - title_w) / 2.0).max(g.margin_left),
            y: top - TITLE_OFFSET,
            face: FontFace::HelveticaBold,
            size: TITLE_SIZE,
            text: self.letterhead.title.clone(),
            role: TextRole::Title,
        });
        self.commands.push(DrawCommand::Rule {
            x1: g.margin_left,
            x2: g.page_width - g.margin_right,
            y: top - RULE_OFFSET,
            width: RULE_WIDTH,
        });
    }

    fn break_page(&mut self) {
        self.commands.push(DrawCommand::PageBreak);
        self.pages += 1;
        if self.letterhead.every_page && self.style == LayoutStyle::Form {
            self.draw_letterhead();
            self.y = self.geometry.body_start_y();
        } else {
            self.y = self.geometry.top_y();
        }
        log::debug!("page break: starting page {}", self.pages);
    }

    /// Break before a line whose baseline would fall below the bottom margin. Breaks at
    /// most once, so a degenerate geometry still terminates.
    fn ensure_room(&mut self) {
        if self.y < self.geometry.margin_bottom {
            self.break_page();
        }
    }

    fn line(&mut self, text: &str, role: TextRole) {
        self.ensure_room();
        self.commands.push(DrawCommand::Text {
            x: self.geometry.margin_left,
            y: self.y,
            face: FontFace::Helvetica,
            size: BODY_SIZE,
            text: text.to_string(),
            role,
        });
        self.y -= self.geometry.line_height;
    }

    fn field(&mut self, label: &str, value: &str) {
        self.line(label, TextRole::Label);
        self.y -= self.geometry.label_gap;
        if value.trim().is_empty() {
            self.y -= self.geometry.blank_line_height;
        } else {
            let lines = wrap_words(
                value,
                self.geometry.content_width(),
                FontFace::Helvetica,
                BODY_SIZE,
            );
            if lines.len() > 1 {
                log::debug!("{label}: wrapped into {} lines", lines.len());
            }
            for l in &lines {
                self.line(l, TextRole::Value);
            }
        }
        self.y -= self.geometry.field_gap;
    }

    fn finish(mut self) -> Vec<DrawCommand> {
        if self.style == LayoutStyle::Table {
            self.y -= TABLE_NOTES_BEFORE;
            self.line(FOOTER_LABEL, TextRole::Footer);
        } else if self.y > self.geometry.margin_bottom {
            self.commands.push(DrawCommand::Text {
                x: self.geometry.margin_left,
                y: self.y,
                face: FontFace::Helvetica,
                size: BODY_SIZE,
                text: FOOTER_LABEL.to_string(),
                role: TextRole::Footer,
            });
        }
        self.commands
    }
}

/// Lay out already-filtered entries in order. Always returns at least the letterhead.
pub fn layout_entries(
    entries: &[(&str, &str)],
    geometry: &PageGeometry,
    letterhead: &Letterhead,
) -> Vec<DrawCommand> {
    layout(entries, geometry, letterhead, LayoutStyle::Form)
}

pub fn layout_record(
    record: &Record,
    catalog: &FieldCatalog,
    geometry: &PageGeometry,
    letterhead: &Letterhead,
) -> Vec<DrawCommand> {
    layout_entries(&catalog.visible_entries(record), geometry, letterhead)
}

/// Table-style counterpart of `layout_entries`.
pub fn layout_table_entries(
    entries: &[(&str, &str)],
    geometry: &PageGeometry,
    letterhead: &Letterhead,
) -> Vec<DrawCommand> {
    layout(entries, geometry, letterhead, LayoutStyle::Table)
}

pub fn layout_table(
    record: &Record,
    catalog: &FieldCatalog,
    geometry: &PageGeometry,
    letterhead: &Letterhead,
) -> Vec<DrawCommand> {
    layout_table_entries(&catalog.visible_entries(record), geometry, letterhead)
}

fn layout(
    entries: &[(&str, &str)],
    geometry: &PageGeometry,
    letterhead: &Letterhead,
    style: LayoutStyle,
) -> Vec<DrawCommand> {
    let mut flow = Flow::new(geometry, letterhead, style);
    for (label, value) in entries {
        flow.field(label, value);
    }
    flow.finish()
}

pub fn page_count(commands: &[DrawCommand]) -> usize {
    1 + commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::PageBreak))
        .count()
}
