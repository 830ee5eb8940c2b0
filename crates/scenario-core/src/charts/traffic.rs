//! Passenger and cargo volume bars.

use crate::segments::SegmentTable;

use super::figure::{BarChart, Figure};

fn segment_bar(table: &SegmentTable, title: &str, y_title: &str, value: impl Fn(&crate::segments::SegmentRow) -> f64) -> Figure {
    if table.is_empty() {
        return Figure::Bar(BarChart::placeholder(title, y_title));
    }
    Figure::Bar(BarChart {
        title: title.to_string(),
        y_title: y_title.to_string(),
        categories: table.rows.iter().map(|r| r.segment.label().to_string()).collect(),
        values: table.rows.iter().map(value).collect(),
    })
}

/// Passengers by segment, millions.
pub fn pax_fig(table: &SegmentTable) -> Figure {
    segment_bar(
        table,
        "Number of passengers by segment (million)",
        "Pax",
        |r| r.pax,
    )
}

/// Cargo volume by segment, million tonnes.
pub fn cargo_fig(table: &SegmentTable) -> Figure {
    segment_bar(
        table,
        "Cargo volume by segment (million tons)",
        "Cargo",
        |r| r.cargo,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScenarioParams;
    use crate::ScenarioCalculator;

    #[test]
    fn empty_table_yields_placeholder() {
        let empty = SegmentTable::empty();
        assert!(pax_fig(&empty).is_placeholder());
        assert!(cargo_fig(&empty).is_placeholder());
    }

    #[test]
    fn bars_carry_one_entry_per_segment() {
        let result = ScenarioCalculator::new().compute(&ScenarioParams::default());
        let Figure::Bar(bar) = pax_fig(&result.segments) else {
            panic!("expected a bar figure");
        };
        assert_eq!(bar.categories.len(), 4);
        assert_eq!(bar.values.len(), 4);
        assert!(bar.categories.contains(&"Short-haul".to_string()));
        // Freighters fly no passengers.
        let freighter_idx = bar.categories.iter().position(|c| c == "Freighter").unwrap();
        assert_eq!(bar.values[freighter_idx], 0.0);
    }
}
