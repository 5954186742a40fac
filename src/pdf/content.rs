use pdf_writer::{Content, Name, Str};

use crate::fonts::{to_winansi_bytes, unmappable_chars};
use crate::model::{DrawCommand, FontFace};

/// Split a command stream into pages at each `PageBreak`. Always yields at least one page.
pub(super) fn split_pages(commands: &[DrawCommand]) -> Vec<&[DrawCommand]> {
    commands
        .split(|c| matches!(c, DrawCommand::PageBreak))
        .collect()
}

/// Serialize one page's commands into an uncompressed content stream.
pub(super) fn render_page(commands: &[DrawCommand]) -> Vec<u8> {
    let mut content = Content::new();
    let mut cur_font: Option<(FontFace, f32)> = None;
    let mut cur_line_width: Option<f32> = None;

    for cmd in commands {
        match cmd {
            DrawCommand::Text {
                x,
                y,
                face,
                size,
                text,
                ..
            } => {
                if text.is_empty() {
                    continue;
                }
                for ch in unmappable_chars(text) {
                    log::warn!("No WinAnsi glyph for {ch:?}; drawing '?'");
                }
                content.begin_text();
                if cur_font != Some((*face, *size)) {
                    content.set_font(Name(face.pdf_name().as_bytes()), *size);
                    cur_font = Some((*face, *size));
                }
                content.next_line(*x, *y);
                content.show(Str(&to_winansi_bytes(text)));
                content.end_text();
            }
            DrawCommand::Rule { x1, x2, y, width } => {
                if cur_line_width != Some(*width) {
                    content.set_line_width(*width);
                    cur_line_width = Some(*width);
                }
                content.move_to(*x1, *y);
                content.line_to(*x2, *y);
                content.stroke();
            }
            DrawCommand::PageBreak => {}
        }
    }

    content.finish().to_vec()
}
