//! Absolute-coordinate drawing surface for one page.
//!
//! Coordinates are top-down from the upper-left corner (the flip into the
//! PDF's bottom-up space happens here), so the layout code can mirror the
//! printed form directly. Text placement and alignment are measured with
//! the AFM metrics bound to this render.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use remito_fonts::{win_ansi_bytes, FontSet, HELVETICA, HELVETICA_BOLD};

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Border stroke width used by every box on the form.
const BORDER_WIDTH: f32 = 0.5;

/// Horizontal alignment of a text run within a fixed-width slot. Plain
/// left-aligned text goes through [`Page::text`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Right,
}

#[derive(Default, Clone, PartialEq)]
struct TextState {
    font: String,
    size: f32,
}

/// Collects content-stream operations for the single page of a remito.
pub struct Page<'a> {
    fonts: &'a FontSet,
    content: Content,
    state: TextState,
}

impl<'a> Page<'a> {
    pub fn new(fonts: &'a FontSet) -> Self {
        let mut content = Content { operations: vec![] };
        // Everything on the form is black.
        content
            .operations
            .push(Operation::new("rg", vec![0.into(), 0.into(), 0.into()]));
        Self {
            fonts,
            content,
            state: TextState::default(),
        }
    }

    /// Measured width of `text` at `size` in the given face.
    pub fn width_of(&self, text: &str, size: f32, face: &str) -> f32 {
        self.fonts.metrics(face).width_of(text, size)
    }

    /// Draws left-aligned text in the regular face.
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        self.text_face(text, x, y, size, HELVETICA);
    }

    /// Draws left-aligned text in an explicit face.
    pub fn text_face(&mut self, text: &str, x: f32, y: f32, size: f32, face: &str) {
        self.text_run(text, x, y, size, face);
    }

    /// Draws text aligned within a fixed-width slot starting at `x`.
    pub fn text_aligned(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        face: &str,
        width: f32,
        align: Align,
    ) {
        let text_width = self.width_of(text, size, face);
        let start_x = match align {
            Align::Center => x + (width - text_width) / 2.0,
            Align::Right => x + width - text_width,
        };
        self.text_run(text, start_x, y, size, face);
    }

    /// Strokes a box border. `y` is the top edge.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let ops = &mut self.content.operations;
        ops.push(Operation::new("w", vec![BORDER_WIDTH.into()]));
        ops.push(Operation::new("RG", vec![0.into(), 0.into(), 0.into()]));
        ops.push(Operation::new(
            "re",
            vec![
                x.into(),
                (PAGE_HEIGHT - (y + height)).into(),
                width.into(),
                height.into(),
            ],
        ));
        ops.push(Operation::new("S", vec![]));
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn text_run(&mut self, text: &str, x: f32, y: f32, size: f32, face: &str) {
        if text.trim().is_empty() {
            return;
        }
        let internal = internal_font_name(face);
        self.content.operations.push(Operation::new("BT", vec![]));
        if self.state.font != internal || self.state.size != size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(internal.as_bytes().to_vec()), size.into()],
            ));
            self.state.font = internal.to_string();
            self.state.size = size;
        }
        // `y` is the top of the glyph box; shift to the baseline.
        let baseline_y = y + size * 0.8;
        self.content.operations.push(Operation::new(
            "Td",
            vec![x.into(), (PAGE_HEIGHT - baseline_y).into()],
        ));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(win_ansi_bytes(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }
}

/// Content-stream resource name for a face.
fn internal_font_name(face: &str) -> &'static str {
    if face == HELVETICA_BOLD { "F2" } else { "F1" }
}
