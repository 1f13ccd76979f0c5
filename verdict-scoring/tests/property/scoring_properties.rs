use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use verdict_core::models::ReviewRecord;
use verdict_scoring::ranking::{self, RankKey};
use verdict_scoring::scores::{positive_fraction, wilson, wilson_lower_bound};
use verdict_scoring::votes::decompose;
use verdict_scoring::ScoringPipeline;

fn arb_record() -> impl Strategy<Value = ReviewRecord> {
    (1u8..=5, 0i64..1100, 0u64..200, 0u64..200).prop_map(|(overall, age, yes, no)| {
        let newest = Utc.with_ymd_and_hms(2014, 12, 7, 0, 0, 0).unwrap();
        ReviewRecord {
            overall: overall as f64,
            reviewed_at: newest - Duration::days(age),
            helpful_yes: yes,
            total_vote: yes + no,
        }
    })
}

proptest! {
    #[test]
    fn wilson_bounded_by_ratio(yes in 0u64..100_000, no in 0u64..100_000) {
        let wlb = wilson_lower_bound(yes, no, 0.95).unwrap();
        let ratio = positive_fraction(yes, no);
        prop_assert!(wlb >= 0.0);
        prop_assert!(ratio <= 1.0);
        prop_assert!(wlb <= ratio + 1e-12, "wlb {} > ratio {}", wlb, ratio);
    }

    #[test]
    fn wilson_non_decreasing_in_yes(yes in 0u64..10_000, no in 0u64..10_000, step in 1u64..100) {
        let z = wilson::critical_value(0.95).unwrap();
        let before = wilson::interval_with_z(yes, no, z).lower;
        let after = wilson::interval_with_z(yes + step, no, z).lower;
        prop_assert!(after + 1e-12 >= before, "{} -> {}", before, after);
    }

    #[test]
    fn wilson_interval_ordered(yes in 0u64..5_000, no in 0u64..5_000, confidence in 0.5f64..0.999) {
        let ci = wilson::interval(yes, no, confidence).unwrap();
        prop_assert!(0.0 <= ci.lower && ci.lower <= ci.upper && ci.upper <= 1.0);
    }

    #[test]
    fn ranking_is_stable_sort(records in prop::collection::vec(arb_record(), 1..60)) {
        let report = ScoringPipeline::with_defaults().unwrap().run(&records).unwrap();
        let order = ranking::rank(&report.reviews, RankKey::WilsonLowerBound);
        for pair in order.windows(2) {
            let a = &report.reviews[pair[0]].scores;
            let b = &report.reviews[pair[1]].scores;
            prop_assert!(a.wilson_score >= b.wilson_score);
            if a.wilson_score == b.wilson_score {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn reruns_are_deterministic(records in prop::collection::vec(arb_record(), 1..60)) {
        let pipeline = ScoringPipeline::with_defaults().unwrap();
        let first = pipeline.run(&records).unwrap();
        let second = pipeline.with_parallel(true).run(&records).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scored_votes_match_decomposition(records in prop::collection::vec(arb_record(), 1..60)) {
        let report = ScoringPipeline::with_defaults().unwrap().run(&records).unwrap();
        for scored in &report.reviews {
            let split = decompose(scored.record.helpful_yes, scored.record.total_vote).unwrap();
            prop_assert_eq!(scored.scores.helpful_no, split.no);
            prop_assert_eq!(split.total(), scored.record.total_vote);
        }
    }

    #[test]
    fn weighted_rating_within_rating_range(records in prop::collection::vec(arb_record(), 1..60)) {
        let summary = ScoringPipeline::with_defaults().unwrap().run(&records).unwrap().summary;
        // Default weights sum to 100, so empty buckets can only pull it down.
        prop_assert!(summary.weighted_rating >= 0.0);
        prop_assert!(summary.weighted_rating <= 5.0 + 1e-9);
        prop_assert!(summary.buckets[0].review_count >= 1);
    }
}
