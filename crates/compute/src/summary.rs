//! Scalar statistics over the visible subset.

use store::{PointRecord, RecordKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum UnitMode {
    #[default]
    Annual,
    /// Annual total divided by 12. A simple average, not seasonal data.
    Monthly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Weighted total over threat records only, in the selected unit mode.
    pub total_weight: f64,
    /// Count of all visible records, defense included.
    pub count: usize,
    pub display: String,
}

pub fn summarize(visible: &[PointRecord], mode: UnitMode) -> Summary {
    // Defense records measure mitigation capacity, not a comparable quantity,
    // so they are excluded from the headline total.
    let annual: f64 = visible
        .iter()
        .filter(|r| r.kind == RecordKind::Threat)
        .map(|r| r.weight)
        .sum();
    let total_weight = match mode {
        UnitMode::Annual => annual,
        UnitMode::Monthly => annual / 12.0,
    };
    Summary {
        total_weight,
        count: visible.len(),
        display: display_weight(total_weight),
    }
}

/// Three-tier unit auto-scaling for a weight in Gt: >= 1 stays Gt with one
/// decimal, >= 0.001 renders as whole Mt, anything smaller as whole tonnes.
/// Ties round away from zero.
pub fn display_weight(v: f64) -> String {
    if v >= 1.0 {
        format!("{:.1} Gt", round_to(v, 1))
    } else if v >= 0.001 {
        format!("{:.0} Mt", (v * 1000.0).round())
    } else {
        format!("{:.0} t", (v * 1e6).round())
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (v * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::{UnitMode, display_weight, summarize};
    use foundation::geo::GeoPoint;
    use store::{PointRecord, RecordKind};

    fn rec(weight: f64, kind: RecordKind) -> PointRecord {
        PointRecord {
            position: GeoPoint::new(0.0, 0.0),
            weight,
            kind,
            raw_sector: None,
            label: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn defense_records_counted_but_not_totaled() {
        let visible = vec![
            rec(5.0, RecordKind::Threat),
            rec(3.0, RecordKind::Defense),
            rec(2.0, RecordKind::Threat),
        ];
        let s = summarize(&visible, UnitMode::Annual);
        assert_eq!(s.total_weight, 7.0);
        assert_eq!(s.count, 3);
        assert_eq!(s.display, "7.0 Gt");
    }

    #[test]
    fn monthly_is_annual_over_twelve_exactly() {
        let visible = vec![rec(6.0, RecordKind::Threat)];
        let annual = summarize(&visible, UnitMode::Annual);
        let monthly = summarize(&visible, UnitMode::Monthly);
        assert_eq!(monthly.total_weight, annual.total_weight / 12.0);
        assert_eq!(monthly.display, "500 Mt");
    }

    #[test]
    fn display_tier_boundaries() {
        assert_eq!(display_weight(1.0), "1.0 Gt");
        assert_eq!(display_weight(12.34), "12.3 Gt");
        assert_eq!(display_weight(0.5), "500 Mt");
        assert_eq!(display_weight(0.001), "1 Mt");
        assert_eq!(display_weight(0.0005), "500 t");
        assert_eq!(display_weight(0.0000005), "1 t");
        assert_eq!(display_weight(0.0), "0 t");
    }

    #[test]
    fn empty_visible_set_is_a_zero_summary() {
        let s = summarize(&[], UnitMode::Annual);
        assert_eq!(s.total_weight, 0.0);
        assert_eq!(s.count, 0);
        assert_eq!(s.display, "0 t");
    }
}
