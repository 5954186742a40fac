mod content;

use pdf_writer::{Filter, Name, Pdf, Rect, Ref, TextStr};

use crate::error::Error;
use crate::fonts::{FontEntry, register_font};
use crate::layout::RULE_OFFSET;
use crate::model::{DrawCommand, FontFace, PageGeometry};

use content::{render_page, split_pages};

/// Optional document-information entries. No dates, so output stays reproducible.
#[derive(Clone, Debug, Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub subject: Option<String>,
}

fn check_geometry(g: &PageGeometry) -> Result<(), Error> {
    let dims = [
        ("page width", g.page_width),
        ("page height", g.page_height),
        ("line height", g.line_height),
    ];
    for (name, v) in dims {
        if !v.is_finite() || v <= 0.0 {
            return Err(Error::Geometry(format!("{name} must be positive, got {v}")));
        }
    }
    if g.content_width() <= 0.0 {
        return Err(Error::Geometry(format!(
            "margins ({} + {}) leave no content width on a {} pt page",
            g.margin_left, g.margin_right, g.page_width
        )));
    }
    if g.top_y() <= g.margin_bottom {
        return Err(Error::Geometry(format!(
            "top margin {} and bottom threshold {} leave no room on a {} pt page",
            g.margin_top, g.margin_bottom, g.page_height
        )));
    }
    // Form-style bodies (page 1, and every page with a repeated letterhead) start here.
    if g.body_top < RULE_OFFSET {
        return Err(Error::Geometry(format!(
            "body top {} overlaps the letterhead, which ends {RULE_OFFSET} pt below the top edge",
            g.body_top
        )));
    }
    if g.body_start_y() <= g.margin_bottom {
        return Err(Error::Geometry(format!(
            "body top {} and bottom threshold {} leave no room below the letterhead on a {} pt page",
            g.body_top, g.margin_bottom, g.page_height
        )));
    }
    Ok(())
}

pub fn render(commands: &[DrawCommand], geometry: &PageGeometry) -> Result<Vec<u8>, Error> {
    render_with_metadata(commands, geometry, &Metadata::default())
}

/// Serialize draw commands into a PDF. Pages are delimited solely by `PageBreak`.
/// Identical input always yields identical bytes.
pub fn render_with_metadata(
    commands: &[DrawCommand],
    geometry: &PageGeometry,
    metadata: &Metadata,
) -> Result<Vec<u8>, Error> {
    check_geometry(geometry)?;

    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let fonts: Vec<FontEntry> = [FontFace::Helvetica, FontFace::HelveticaBold]
        .into_iter()
        .map(|face| {
            let font_ref = alloc();
            register_font(&mut pdf, face, font_ref)
        })
        .collect();

    let pages = split_pages(commands);
    let n = pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page_cmds) in pages.iter().enumerate() {
        let raw = render_page(page_cmds);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, geometry.page_width, geometry.page_height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut font_dict = resources.fonts();
        for entry in &fonts {
            font_dict.pair(Name(entry.pdf_name.as_bytes()), entry.font_ref);
        }
    }

    if metadata.title.is_some() || metadata.subject.is_some() {
        let info_id = alloc();
        let mut info = pdf.document_info(info_id);
        if let Some(title) = &metadata.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(subject) = &metadata.subject {
            info.subject(TextStr(subject.as_str()));
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "Rendered {n} page(s), {} commands → {} bytes in {:.1}ms",
        commands.len(),
        bytes.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
    );
    Ok(bytes)
}
