/// A salary fork normalized out of either source's schema.
///
/// Both APIs mark an unspecified bound differently (HeadHunter sends `null`,
/// SuperJob sends `0`); by the time a range reaches this type the sentinel has
/// already been folded into `None` by the owning client.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub currency: String,
    pub gross: Option<bool>,
}

impl SalaryRange {
    /// Expected monthly salary for this range.
    ///
    /// A one-sided range is skewed towards the advertised bound: +20% over a
    /// bare minimum, -20% under a bare maximum. With neither bound there is
    /// nothing to estimate.
    pub fn estimate(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
            (Some(lower), None) => Some(lower * 1.2),
            (None, Some(upper)) => Some(upper * 0.8),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rub_range(lower: Option<f64>, upper: Option<f64>) -> SalaryRange {
        SalaryRange {
            lower,
            upper,
            currency: "RUR".to_string(),
            gross: None,
        }
    }

    #[test]
    fn both_bounds_average() {
        let estimate = rub_range(Some(100_000.0), Some(180_000.0)).estimate();
        assert_eq!(estimate, Some(140_000.0));
    }

    #[test]
    fn lower_bound_only_is_scaled_up() {
        let estimate = rub_range(Some(60_000.0), None).estimate();
        assert_eq!(estimate, Some(72_000.0));
    }

    #[test]
    fn upper_bound_only_is_scaled_down() {
        let estimate = rub_range(None, Some(120_000.0)).estimate();
        assert_eq!(estimate, Some(96_000.0));
    }

    #[test]
    fn no_bounds_no_estimate() {
        assert_eq!(rub_range(None, None).estimate(), None);
    }

    #[test]
    fn gross_flag_does_not_affect_the_estimate() {
        let mut range = rub_range(Some(50_000.0), Some(70_000.0));
        range.gross = Some(true);
        assert_eq!(range.estimate(), Some(60_000.0));
    }
}
