//! Property tests for binning and quantiles

use proptest::prelude::*;
use rstest::rstest;
use tractview_stats::{histogram, histogram_with, summarize_values, HistogramOptions, SortedSample};

// === Histogram ===

#[rstest]
#[case(1)]
#[case(7)]
#[case(20)]
fn test_bin_count_is_exact_for_equal_width(#[case] bin_count: usize) {
    let data: Vec<f64> = (0..50).map(|x| x as f64 * 0.37).collect();
    let bins = histogram(&data, bin_count).unwrap();
    assert_eq!(bins.len(), bin_count);
}

proptest! {
    #[test]
    fn test_histogram_conserves_count(
        data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200),
        bin_count in 1usize..40,
    ) {
        let bins = histogram(&data, bin_count).unwrap();
        let total: usize = bins.iter().map(|b| b.count).sum();
        prop_assert_eq!(total, data.len());
    }

    #[test]
    fn test_histogram_ascending_and_contiguous(
        data in prop::collection::vec(-1.0e3f64..1.0e3, 2..100),
        bin_count in 1usize..30,
    ) {
        let bins = histogram(&data, bin_count).unwrap();
        for pair in bins.windows(2) {
            prop_assert!(pair[0].lower_bound <= pair[1].lower_bound);
            prop_assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
        }
    }

    #[test]
    fn test_histogram_spans_data_range(
        data in prop::collection::vec(-1.0e3f64..1.0e3, 1..100),
        bin_count in 1usize..30,
    ) {
        let bins = histogram(&data, bin_count).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(bins.first().unwrap().lower_bound, min);
        prop_assert_eq!(bins.last().unwrap().upper_bound, max);
    }

    #[test]
    fn test_values_fall_inside_their_bins(
        data in prop::collection::vec(-1.0e3f64..1.0e3, 2..100),
        bin_count in 1usize..30,
    ) {
        // Recount each bin directly from its reported bounds.
        let bins = histogram(&data, bin_count).unwrap();
        let last = bins.len() - 1;
        for (i, bin) in bins.iter().enumerate() {
            let expected = data
                .iter()
                .filter(|&&v| bin.contains(v, i == last))
                .count();
            prop_assert_eq!(bin.count, expected);
        }
    }

    #[test]
    fn test_nice_histogram_conserves_count(
        data in prop::collection::vec(-1.0e4f64..1.0e4, 1..200),
        bin_count in 1usize..40,
    ) {
        let bins = histogram_with(&data, &HistogramOptions::nice(bin_count)).unwrap();
        let total: usize = bins.iter().map(|b| b.count).sum();
        prop_assert_eq!(total, data.len());
    }

    // === Quantiles ===

    #[test]
    fn test_quartiles_are_ordered(data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
        let q = SortedSample::from_data(&data).quartiles().unwrap();
        prop_assert!(q.q1 <= q.median);
        prop_assert!(q.median <= q.q3);
    }

    #[test]
    fn test_quantile_is_sample_member(
        data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200),
        p in 0.0f64..=1.0,
    ) {
        let q = SortedSample::from_data(&data).quantile(p).unwrap();
        prop_assert!(data.contains(&q));
    }

    #[test]
    fn test_summary_bounds(data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
        let summary = summarize_values(&data, None).unwrap();
        let stats = summary.statistics().unwrap();
        prop_assert!(stats.min <= stats.q1);
        prop_assert!(stats.q3 <= stats.max);
        prop_assert!(stats.mean >= stats.min - 1e-6 && stats.mean <= stats.max + 1e-6);
        prop_assert!(summary.count_unique <= summary.count_non_null);
    }
}
