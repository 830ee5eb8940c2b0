//! Added-value and employment bars.

use crate::segments::SegmentTable;

use super::figure::{BarChart, Figure};

/// Added value by segment, €m/yr.
pub fn value_fig(table: &SegmentTable) -> Figure {
    if table.is_empty() {
        return Figure::Bar(BarChart::placeholder(
            "Added value by segment (€m/yr)",
            "AddedValue",
        ));
    }
    Figure::Bar(BarChart {
        title: "Added value by segment (€m/yr)".to_string(),
        y_title: "AddedValue".to_string(),
        categories: table.rows.iter().map(|r| r.segment.label().to_string()).collect(),
        values: table.rows.iter().map(|r| r.added_value).collect(),
    })
}

/// Direct jobs by segment.
pub fn employment_fig(table: &SegmentTable) -> Figure {
    if table.is_empty() {
        return Figure::Bar(BarChart::placeholder(
            "Employment by segment (direct jobs)",
            "Jobs",
        ));
    }
    Figure::Bar(BarChart {
        title: "Employment by segment (direct jobs)".to_string(),
        y_title: "Jobs".to_string(),
        categories: table.rows.iter().map(|r| r.segment.label().to_string()).collect(),
        values: table.rows.iter().map(|r| r.jobs).collect(),
    })
}
