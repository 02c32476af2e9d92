//! Entry-point segment.

use super::types::{Line, Segment, SegmentKind};
use super::ENTRY_FUNCTION;

/// Render the guard that runs `main` when the program is executed directly
pub fn render_entry_point() -> Segment {
    Segment::new(
        SegmentKind::EntryPoint,
        vec![
            Line::code(0, "if __name__ == '__main__':"),
            Line::code(1, format!("{}()", ENTRY_FUNCTION)),
        ],
    )
}
