use serde::Serialize;

/// Traffic segment over which KPIs are aggregated.
///
/// The three passenger segments also carry belly cargo; `Freighter` carries
/// cargo only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    ShortHaul,
    MediumHaul,
    LongHaul,
    Freighter,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::ShortHaul,
        Segment::MediumHaul,
        Segment::LongHaul,
        Segment::Freighter,
    ];

    /// Axis label used by the chart builders.
    pub fn label(self) -> &'static str {
        match self {
            Segment::ShortHaul => "Short-haul",
            Segment::MediumHaul => "Medium-haul",
            Segment::LongHaul => "Long-haul",
            Segment::Freighter => "Freighter",
        }
    }

    pub fn is_passenger(self) -> bool {
        !matches!(self, Segment::Freighter)
    }
}

/// One derived row of the scenario's segment table. All values are yearly
/// aggregates and non-negative: `pax` in millions of passengers, `cargo` in
/// million tonnes, `added_value` in €m, `jobs` in direct jobs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentRow {
    pub segment: Segment,
    pub pax: f64,
    pub cargo: f64,
    pub added_value: f64,
    pub jobs: f64,
}

/// The segmented dataset behind the per-segment charts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentTable {
    pub rows: Vec<SegmentRow>,
}

impl SegmentTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, segment: Segment) -> Option<&SegmentRow> {
        self.rows.iter().find(|r| r.segment == segment)
    }

    /// Total passengers in millions.
    pub fn total_pax(&self) -> f64 {
        self.rows.iter().map(|r| r.pax).sum()
    }

    /// Belly cargo (million tonnes): cargo carried on passenger flights.
    pub fn belly_cargo(&self) -> f64 {
        self.rows
            .iter()
            .filter(|r| r.segment.is_passenger())
            .map(|r| r.cargo)
            .sum()
    }

    /// Full-freighter cargo in million tonnes.
    pub fn freight_cargo(&self) -> f64 {
        self.rows
            .iter()
            .filter(|r| !r.segment.is_passenger())
            .map(|r| r.cargo)
            .sum()
    }

    pub fn total_added_value(&self) -> f64 {
        self.rows.iter().map(|r| r.added_value).sum()
    }

    pub fn total_jobs(&self) -> f64 {
        self.rows.iter().map(|r| r.jobs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(segment: Segment, pax: f64, cargo: f64) -> SegmentRow {
        SegmentRow {
            segment,
            pax,
            cargo,
            added_value: 0.0,
            jobs: 0.0,
        }
    }

    #[test]
    fn belly_and_freight_cargo_split_by_segment_kind() {
        let table = SegmentTable {
            rows: vec![
                row(Segment::ShortHaul, 20.0, 0.1),
                row(Segment::LongHaul, 15.0, 0.4),
                row(Segment::Freighter, 0.0, 1.2),
            ],
        };
        assert!((table.belly_cargo() - 0.5).abs() < 1e-12);
        assert!((table.freight_cargo() - 1.2).abs() < 1e-12);
        assert!((table.total_pax() - 35.0).abs() < 1e-12);
    }

    #[test]
    fn empty_table_totals_are_zero() {
        let table = SegmentTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.total_pax(), 0.0);
        assert_eq!(table.belly_cargo(), 0.0);
        assert_eq!(table.freight_cargo(), 0.0);
    }
}
