//! Import segment.

use super::types::{Line, Segment, SegmentKind};
use crate::config::BackendDescriptor;

/// Render the runtime imports and the backend instantiation
pub fn render_imports(backend: &BackendDescriptor) -> Segment {
    let lines = vec![
        Line::code(0, "from qunetsim.components import Host, Network"),
        Line::code(0, "from qunetsim.objects import Qubit, Logger"),
        Line::code(0, format!("from qunetsim.backends import {}", backend.import)),
        Line::code(0, "Logger.DISABLED = True"),
        Line::Blank,
        Line::comment(0, format!("create the {} backend object", backend.name)),
        Line::code(0, format!("backend = {}()", backend.import)),
        Line::Blank,
        Line::Blank,
    ];
    Segment::new(SegmentKind::Imports, lines)
}
