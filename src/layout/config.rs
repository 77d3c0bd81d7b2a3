//! Page geometry for the endorsement document

use serde::Deserialize;

/// A fixed heading placed independently of form content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub text: &'static str,
    pub x: f64,
    /// Baseline distance from the top edge of the page
    pub top: f64,
    pub size: f64,
}

/// Static page geometry
///
/// Coordinates are PDF points with the origin at the bottom-left corner.
/// Vertical anchors are stored as distances from the top edge so they read
/// the same way as the printed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    pub page_width: f64,
    pub page_height: f64,

    /// Left edge of both tables and the notes box
    pub table_x: f64,
    pub row_height: f64,
    pub label_width: f64,
    pub value_width: f64,
    pub border_width: f64,

    /// Text offset from a cell's bottom-left corner
    pub cell_inset_x: f64,
    pub cell_inset_y: f64,
    pub cell_font_size: f64,

    /// Bottom edge of the first recipient row, from the top
    pub recipient_top: f64,
    /// Bottom edge of the first sender row, from the top
    pub sender_top: f64,
    /// Bottom edge of the notes box, from the top
    pub notes_top: f64,
    pub notes_height: f64,
    /// Baseline of the first notes line above the box's bottom edge
    pub notes_text_rise: f64,
    pub notes_line_height: f64,

    pub headings: [Heading; 3],
}

impl LayoutSpec {
    /// The one layout every document uses
    pub const STANDARD: LayoutSpec = LayoutSpec {
        page_width: 600.0,
        page_height: 800.0,
        table_x: 50.0,
        row_height: 25.0,
        label_width: 250.0,
        value_width: 250.0,
        border_width: 1.0,
        cell_inset_x: 10.0,
        cell_inset_y: 7.0,
        cell_font_size: 12.0,
        recipient_top: 220.0,
        sender_top: 470.0,
        notes_top: 690.0,
        notes_height: 100.0,
        notes_text_rise: 80.0,
        notes_line_height: 14.0,
        headings: [
            Heading {
                text: "RECIPIENT INFORMATION",
                x: 160.0,
                top: 180.0,
                size: 24.0,
            },
            Heading {
                text: "SENDER INFORMATION",
                x: 180.0,
                top: 430.0,
                size: 24.0,
            },
            Heading {
                text: "NOTES (if any)",
                x: 210.0,
                top: 580.0,
                size: 28.0,
            },
        ],
    };

    /// Convert a distance from the top edge into a page y coordinate
    pub fn from_top(&self, top: f64) -> f64 {
        self.page_height - top
    }

    /// Bottom edge of row `index` in a table whose first row sits at `start_y`
    pub fn row_y(&self, start_y: f64, index: usize) -> f64 {
        start_y - index as f64 * self.row_height
    }

    pub fn recipient_start_y(&self) -> f64 {
        self.from_top(self.recipient_top)
    }

    pub fn sender_start_y(&self) -> f64 {
        self.from_top(self.sender_top)
    }

    pub fn notes_y(&self) -> f64 {
        self.from_top(self.notes_top)
    }

    /// Combined width of the label and value columns
    pub fn table_width(&self) -> f64 {
        self.label_width + self.value_width
    }

    /// Usable text width inside the notes box
    pub fn notes_text_width(&self) -> f64 {
        self.table_width() - 2.0 * self.cell_inset_x
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How the notes value is placed inside the notes box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotesMode {
    /// One unwrapped line; long notes run past the box edge
    #[default]
    SingleLine,
    /// Greedy word wrap to the box width
    Wrap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_anchors() {
        let geometry = LayoutSpec::default();
        assert_eq!(geometry.recipient_start_y(), 580.0);
        assert_eq!(geometry.sender_start_y(), 330.0);
        assert_eq!(geometry.notes_y(), 110.0);
        assert_eq!(geometry.table_width(), 500.0);
        assert_eq!(geometry.notes_text_width(), 480.0);
    }

    #[test]
    fn test_row_y_steps_down() {
        let geometry = LayoutSpec::STANDARD;
        let start = geometry.recipient_start_y();
        assert_eq!(geometry.row_y(start, 0), 580.0);
        assert_eq!(geometry.row_y(start, 6), 430.0);
    }

    #[test]
    fn test_recipient_table_stays_below_heading() {
        let geometry = LayoutSpec::STANDARD;
        let heading_y = geometry.from_top(geometry.headings[0].top);
        let top_of_first_row = geometry.recipient_start_y() + geometry.row_height;
        assert!(top_of_first_row < heading_y);
    }
}
