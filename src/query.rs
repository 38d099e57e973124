use std::fmt;

use crate::label::LabelName;

/// One line of the "vertex on label" match workload. Rendering it through
/// `Display` gives the query text without the trailing newline.
///
/// The harness replays the output verbatim, so the spacing and the trailing
/// semicolon are part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    label: LabelName<'a>,
}

impl<'a> Query<'a> {
    pub fn vertex_on_label(label: LabelName<'a>) -> Self {
        Self { label }
    }
}

impl<'a> fmt::Display for Query<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UNWIND range(0, 30) AS i MATCH (n:{}) RETURN n SKIP 1000000;",
            self.label
        )
    }
}
