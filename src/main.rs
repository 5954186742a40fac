use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use applicant_profile::intake::{Submission, record_from_json};
use applicant_profile::text::{export_text, profile_summary};
use applicant_profile::{
    Error, Field, FieldCatalog, LayoutStyle, Letterhead, OutputFormat, Profile, RenderOptions,
    pdf_filename, render_pdf, suggested_filename, write_profile,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Pdf,
    Text,
    Both,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Pdf => OutputFormat::Pdf,
            Format::Text => OutputFormat::Text,
            Format::Both => OutputFormat::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    /// Paper-form layout with a ruled letterhead
    Form,
    /// Flowing layout with spaced label/value pairs
    Table,
}

impl From<Style> for LayoutStyle {
    fn from(s: Style) -> Self {
        match s {
            Style::Form => LayoutStyle::Form,
            Style::Table => LayoutStyle::Table,
        }
    }
}

/// Render an admission applicant's answers into the institution's profile PDF and text summary
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File holding one tab-separated row pasted from the form spreadsheet ("-" for stdin)
    #[arg(long, conflicts_with = "json", required_unless_present = "json")]
    row: Option<String>,

    /// JSON object of field key to value, for manual entry
    #[arg(long)]
    json: Option<PathBuf>,

    /// Directory to write the outputs into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Which renditions to write
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// PDF layout style
    #[arg(short, long, value_enum, default_value_t = Style::Form)]
    style: Style,

    /// Comma-separated field keys to treat as required instead of the standard set
    #[arg(long, value_delimiter = ',')]
    require: Option<Vec<String>>,

    /// Repeat the letterhead at the top of every page
    #[arg(long)]
    header_every_page: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_source(path: &str) -> Result<String, Error> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn build_catalog(require: Option<&[String]>) -> Result<FieldCatalog, Error> {
    let catalog = FieldCatalog::standard();
    let Some(keys) = require else {
        return Ok(catalog);
    };
    let fields = keys
        .iter()
        .map(|k| Field::from_key(k.trim()).ok_or_else(|| Error::UnknownField(k.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(catalog.with_required(&fields))
}

fn run(args: Args) -> Result<(), Error> {
    let catalog = build_catalog(args.require.as_deref())?;
    let options = RenderOptions {
        letterhead: Letterhead {
            every_page: args.header_every_page,
            ..Letterhead::institution()
        },
        ..RenderOptions::for_style(args.style.into())
    };

    let mut submission = Submission::default();
    if let Some(row) = &args.row {
        let content = read_source(row)?;
        let line = content
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_default();
        submission.paste_row(line)?;
    } else if let Some(json) = &args.json {
        submission.submit(record_from_json(&std::fs::read_to_string(json)?)?);
    }

    if let Err(e) = submission.validate(&catalog) {
        if let Error::Validation { missing } = &e {
            eprintln!("Missing {} required field(s):", missing.len());
            for label in missing {
                eprintln!("  • {label}");
            }
        }
        return Err(e);
    }

    let pdf = submission
        .render(|record| render_pdf(record, &catalog, &options))?
        .to_vec();
    let Some(record) = submission.record() else {
        return Ok(());
    };

    let profile = Profile {
        pdf,
        text: export_text(record, &catalog),
        pdf_name: pdf_filename(record, options.style),
        text_name: suggested_filename(record, "txt"),
    };
    let written = write_profile(&profile, &args.out_dir, args.format.into())?;

    for path in &written {
        println!("✓ Generated: {}", path.display());
    }
    for (heading, value) in profile_summary(record) {
        println!("  {heading}: {value}");
    }

    Ok(())
}
