pub mod catalog;
mod error;
mod fonts;
pub mod intake;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod text;

pub use catalog::FieldCatalog;
pub use error::Error;
pub use fonts::{space_width, text_width};
pub use layout::{LayoutStyle, Letterhead};
pub use model::{DrawCommand, Field, FontFace, PageGeometry, Record, TextRole};

use std::path::{Path, PathBuf};
use std::time::Instant;

const FILENAME_PREFIX: &str = "CIT_Application_";

fn name_part(record: &Record) -> String {
    let name: Vec<&str> = record.get(Field::FullName).split_whitespace().collect();
    if name.is_empty() {
        "Applicant".to_string()
    } else {
        name.join("_")
    }
}

/// `CIT_Application_<Name_With_Underscores>.<ext>`; `Applicant` when the name is blank.
pub fn suggested_filename(record: &Record, extension: &str) -> String {
    format!("{FILENAME_PREFIX}{}.{extension}", name_part(record))
}

/// PDF filename for a layout style; table-style documents carry a `Table_` infix.
pub fn pdf_filename(record: &Record, style: LayoutStyle) -> String {
    match style {
        LayoutStyle::Form => suggested_filename(record, "pdf"),
        LayoutStyle::Table => format!("{FILENAME_PREFIX}Table_{}.pdf", name_part(record)),
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub geometry: PageGeometry,
    pub letterhead: Letterhead,
    pub style: LayoutStyle,
}

impl RenderOptions {
    /// The style with its own page geometry.
    pub fn for_style(style: LayoutStyle) -> Self {
        RenderOptions {
            geometry: style.geometry(),
            letterhead: Letterhead::institution(),
            style,
        }
    }

    pub fn table() -> Self {
        Self::for_style(LayoutStyle::Table)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_style(LayoutStyle::Form)
    }
}

/// Lay out and render a record without validating it.
pub fn render_pdf(
    record: &Record,
    catalog: &FieldCatalog,
    options: &RenderOptions,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let commands = match options.style {
        LayoutStyle::Form => {
            layout::layout_record(record, catalog, &options.geometry, &options.letterhead)
        }
        LayoutStyle::Table => {
            layout::layout_table(record, catalog, &options.geometry, &options.letterhead)
        }
    };
    let t_layout = t0.elapsed();

    let metadata = pdf::Metadata {
        title: Some(options.letterhead.title.clone()),
        subject: Some(record.get(Field::FullName).trim().to_string()).filter(|s| !s.is_empty()),
    };
    let bytes = pdf::render_with_metadata(&commands, &options.geometry, &metadata)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, render={:.1}ms, total={:.1}ms ({} page(s), {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        layout::page_count(&commands),
        bytes.len(),
    );

    Ok(bytes)
}

pub struct Profile {
    pub pdf: Vec<u8>,
    pub text: String,
    pub pdf_name: String,
    pub text_name: String,
}

/// Validate a record and produce both renditions. Nothing is rendered when a
/// required field is missing.
pub fn generate_profile(
    record: &Record,
    catalog: &FieldCatalog,
    options: &RenderOptions,
) -> Result<Profile, Error> {
    catalog.validate(record)?;
    Ok(Profile {
        pdf: render_pdf(record, catalog, options)?,
        text: text::export_text(record, catalog),
        pdf_name: pdf_filename(record, options.style),
        text_name: suggested_filename(record, "txt"),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Text,
    Both,
}

/// Write the selected renditions into `dir`, returning the paths written.
pub fn write_profile(
    profile: &Profile,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    if matches!(format, OutputFormat::Pdf | OutputFormat::Both) {
        let path = dir.join(&profile.pdf_name);
        std::fs::write(&path, &profile.pdf)?;
        written.push(path);
    }
    if matches!(format, OutputFormat::Text | OutputFormat::Both) {
        let path = dir.join(&profile.text_name);
        std::fs::write(&path, &profile.text)?;
        written.push(path);
    }
    Ok(written)
}
