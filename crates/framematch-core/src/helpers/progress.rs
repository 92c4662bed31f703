// crates/framematch-core/src/helpers/progress.rs
//
// Byte-count → percentage conversion for upload progress.

/// `round(sent / total * 100)`, clamped to 0–100. Returns `None` when the
/// total is unknown (zero), so callers can ignore the report.
///
/// ```
/// use framematch_core::helpers::progress::percent_of;
/// assert_eq!(percent_of(0, 200),   Some(0));
/// assert_eq!(percent_of(1, 200),   Some(1));   // 0.5 rounds up
/// assert_eq!(percent_of(200, 200), Some(100));
/// assert_eq!(percent_of(5, 0),     None);
/// ```
pub fn percent_of(sent: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (sent as f64 / total as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

/// Keeps reported progress non-decreasing within one attempt, whatever order
/// the reports arrive in.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicPercent {
    current: u8,
}

impl MonotonicPercent {
    /// Feed a report; returns the new value if it moved forward.
    pub fn advance(&mut self, sent: u64, total: u64) -> Option<u8> {
        let pct = percent_of(sent, total)?;
        if pct > self.current {
            self.current = pct;
            Some(pct)
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_reporting_is_clamped() {
        assert_eq!(percent_of(300, 200), Some(100));
    }

    #[test]
    fn out_of_order_reports_never_go_backwards() {
        let mut m = MonotonicPercent::default();
        let mut seen = vec![];
        for (sent, total) in [(10, 100), (50, 100), (30, 100), (0, 0), (50, 100), (99, 100), (100, 100)] {
            if let Some(p) = m.advance(sent, total) {
                seen.push(p);
            }
        }
        assert_eq!(seen, vec![10, 50, 99, 100]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(m.get(), 100);
    }
}
