//! Draw operations produced by the layout engine

/// An axis-aligned rectangle in page coordinates (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The two standard faces a page may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Bold,
    Regular,
}

impl FontFace {
    /// PDF standard-14 base font name
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Regular => "Helvetica",
        }
    }

    /// Page resource name
    pub fn resource(self) -> &'static str {
        match self {
            FontFace::Bold => "F1",
            FontFace::Regular => "F2",
        }
    }
}

/// A single line of text at a baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub font: FontFace,
}

/// One drawing step, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// The background image stretched over `rect`
    Background(Rect),
    /// A black outline with the given line width
    StrokeRect { rect: Rect, line_width: f64 },
    Text(TextRun),
}

/// Everything needed to paint one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: vec![],
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn push_text(&mut self, text: impl Into<String>, x: f64, y: f64, size: f64, font: FontFace) {
        self.ops.push(DrawOp::Text(TextRun {
            text: text.into(),
            x,
            y,
            size,
            font,
        }));
    }

    pub fn push_stroke_rect(&mut self, rect: Rect, line_width: f64) {
        self.ops.push(DrawOp::StrokeRect { rect, line_width });
    }

    /// All text runs in paint order
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// All stroked rectangles in paint order
    pub fn stroked_rects(&self) -> impl Iterator<Item = &Rect> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeRect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// The text run whose baseline starts exactly at `(x, y)`
    pub fn text_at(&self, x: f64, y: f64) -> Option<&TextRun> {
        self.text_runs().find(|run| run.x == x && run.y == y)
    }
}
