use crate::salary::SalaryRange;

/// Aggregated numbers for one search term at one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionStats {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

/// Reduce a raw listing set with a per-source salary projection.
///
/// Every listing counts as found. A listing counts as processed only when the
/// projection yields a rouble range and the range yields an estimate. The
/// average is floored to whole roubles; with nothing processed it stays 0.
pub fn collect_stats<V>(
    vacancies: &[V],
    salary_of: impl Fn(&V) -> Option<SalaryRange>,
) -> PositionStats {
    let mut processed = 0usize;
    let mut total = 0.0f64;

    for vacancy in vacancies {
        if let Some(expected) = salary_of(vacancy).and_then(|range| range.estimate()) {
            processed += 1;
            total += expected;
        }
    }

    let average_salary = if processed > 0 {
        (total / processed as f64) as u64
    } else {
        0
    };

    PositionStats {
        vacancies_found: vacancies.len(),
        vacancies_processed: processed,
        average_salary,
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
    fn known_listing_set_reduces_to_known_average() {
        // {(100000, 180000), (60000, -), (-, -)} -> {140000, 72000, skipped}
        let listings = vec![
            Some(rub_range(Some(100_000.0), Some(180_000.0))),
            Some(rub_range(Some(60_000.0), None)),
            Some(rub_range(None, None)),
        ];

        let stats = collect_stats(&listings, |listing| listing.clone());

        assert_eq!(stats.vacancies_found, 3);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, 106_000);
    }

    #[test]
    fn listings_without_salary_info_count_only_as_found() {
        let listings: Vec<Option<SalaryRange>> = vec![None, None, None];

        let stats = collect_stats(&listings, |listing| listing.clone());

        assert_eq!(stats.vacancies_found, 3);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn empty_listing_set() {
        let listings: Vec<Option<SalaryRange>> = Vec::new();

        let stats = collect_stats(&listings, |listing| listing.clone());

        assert_eq!(stats.vacancies_found, 0);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn processed_never_exceeds_found() {
        let listings = vec![
            Some(rub_range(Some(90_000.0), None)),
            None,
            Some(rub_range(None, None)),
            Some(rub_range(None, Some(150_000.0))),
        ];

        let stats = collect_stats(&listings, |listing| listing.clone());

        assert!(stats.vacancies_processed <= stats.vacancies_found);
        assert_eq!(stats.vacancies_found, 4);
        assert_eq!(stats.vacancies_processed, 2);
    }

    #[test]
    fn average_is_floored_to_whole_roubles() {
        // (100000 + 100001 + 100001) / 3 = 100000.66..
        let listings = vec![
            Some(rub_range(Some(100_000.0), Some(100_000.0))),
            Some(rub_range(Some(100_001.0), Some(100_001.0))),
            Some(rub_range(Some(100_001.0), Some(100_001.0))),
        ];

        let stats = collect_stats(&listings, |listing| listing.clone());

        assert_eq!(stats.average_salary, 100_000);
    }
}
