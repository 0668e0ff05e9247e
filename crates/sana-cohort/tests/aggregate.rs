use std::collections::BTreeMap;

use jiff::Timestamp;
use uuid::Uuid;

use sana_cohort::aggregate::CohortAggregator;
use sana_cohort::error::StoreError;
use sana_cohort::store::{MemoryStore, ResultStore};
use sana_core::models::cohort::{AssessmentFilter, CohortAggregate};
use sana_core::models::result::ResultRecord;
use sana_core::models::risk::{RiskCounts, RiskLevel};
use sana_core::models::variant::Variant;

fn uniform(variant: Variant, value: u8) -> BTreeMap<u32, u8> {
    (1..=variant.item_count() as u32)
        .map(|id| (id, value))
        .collect()
}

/// Responses whose transformed value is 1 (`low`) or 6 on every item.
fn patterned(variant: Variant, low: bool) -> BTreeMap<u32, u8> {
    sana_instruments::catalog::items_for(variant)
        .iter()
        .map(|item| (item.id, if low != item.reverse_scored { 1 } else { 6 }))
        .collect()
}

fn record(
    responses: &BTreeMap<u32, u8>,
    variant: Variant,
    cohort_id: &str,
    assessment: &str,
) -> ResultRecord {
    ResultRecord {
        id: Uuid::new_v4(),
        cohort_id: cohort_id.to_string(),
        assessment: assessment.to_string(),
        submitted_at: Timestamp::UNIX_EPOCH,
        result: sana_instruments::score(responses, variant).unwrap(),
    }
}

#[tokio::test]
async fn empty_cohort_yields_the_zero_aggregate() {
    let aggregator = CohortAggregator::new(MemoryStore::new());
    let filter = AssessmentFilter::any_variant("fall_intake");
    let aggregate = aggregator.aggregate("eng", &filter).await;
    assert_eq!(aggregate, CohortAggregate::empty("eng", &filter));
}

#[tokio::test]
async fn aggregates_averages_and_tier_counts_in_one_pass() {
    let store = MemoryStore::new();
    // Overall scores 42 (at risk), 252 (healthy), 148 (moderate).
    store.insert(record(
        &patterned(Variant::Short, true),
        Variant::Short,
        "eng",
        "fall_intake",
    ));
    store.insert(record(
        &patterned(Variant::Short, false),
        Variant::Short,
        "eng",
        "fall_intake",
    ));
    store.insert(record(
        &uniform(Variant::Short, 4),
        Variant::Short,
        "eng",
        "fall_intake",
    ));

    let aggregator = CohortAggregator::new(store);
    let filter = AssessmentFilter::for_variant("fall_intake", Variant::Short);
    let aggregate = aggregator.aggregate("eng", &filter).await;

    assert_eq!(aggregate.sample_size, 3);
    assert_eq!(aggregate.variant, Some(Variant::Short));
    assert_eq!(
        aggregate.overall_risk_counts,
        RiskCounts {
            healthy: 1,
            moderate: 1,
            at_risk: 1
        }
    );
    assert_eq!(aggregate.overall_average, (42.0 + 252.0 + 148.0) / 3.0);
    // Dimension sums 7 + 42 + 25 for autonomy; only the floor record flags
    // dimensions.
    assert_eq!(aggregate.per_dimension_average.autonomy, 74.0 / 3.0);
    assert_eq!(aggregate.per_dimension_at_risk.autonomy, 1);
    assert_eq!(aggregate.per_dimension_at_risk.purpose_in_life, 1);
}

#[tokio::test]
async fn aggregation_is_idempotent_over_unchanged_data() {
    let store = MemoryStore::new();
    store.insert(record(
        &uniform(Variant::Short, 4),
        Variant::Short,
        "eng",
        "fall_intake",
    ));
    store.insert(record(
        &uniform(Variant::Short, 2),
        Variant::Short,
        "eng",
        "fall_intake",
    ));

    let aggregator = CohortAggregator::new(store);
    let filter = AssessmentFilter::any_variant("fall_intake");
    let first = aggregator.aggregate("eng", &filter).await;
    let second = aggregator.aggregate("eng", &filter).await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn the_filter_narrows_by_assessment_and_variant() {
    let store = MemoryStore::new();
    store.insert(record(
        &uniform(Variant::Short, 4),
        Variant::Short,
        "eng",
        "fall_intake",
    ));
    store.insert(record(
        &uniform(Variant::Long, 4),
        Variant::Long,
        "eng",
        "fall_intake",
    ));
    store.insert(record(
        &uniform(Variant::Short, 4),
        Variant::Short,
        "eng",
        "spring_checkin",
    ));
    store.insert(record(
        &uniform(Variant::Short, 4),
        Variant::Short,
        "law",
        "fall_intake",
    ));
    let aggregator = CohortAggregator::new(store);

    let both = aggregator
        .aggregate("eng", &AssessmentFilter::any_variant("fall_intake"))
        .await;
    assert_eq!(both.sample_size, 2);

    let short_only = aggregator
        .aggregate(
            "eng",
            &AssessmentFilter::for_variant("fall_intake", Variant::Short),
        )
        .await;
    assert_eq!(short_only.sample_size, 1);

    let spring = aggregator
        .aggregate("eng", &AssessmentFilter::any_variant("spring_checkin"))
        .await;
    assert_eq!(spring.sample_size, 1);

    let law = aggregator
        .aggregate("law", &AssessmentFilter::any_variant("fall_intake"))
        .await;
    assert_eq!(law.sample_size, 1);
}

#[tokio::test]
async fn stored_tiers_are_reread_not_recomputed() {
    // A record whose stored tier deliberately disagrees with its score:
    // aggregation must trust the stored fact.
    let mut tampered = record(
        &patterned(Variant::Short, true),
        Variant::Short,
        "eng",
        "fall_intake",
    );
    tampered.result.overall_risk = RiskLevel::Healthy;
    tampered.result.at_risk_dimensions.clear();

    let store = MemoryStore::new();
    store.insert(tampered);
    let aggregator = CohortAggregator::new(store);

    let aggregate = aggregator
        .aggregate("eng", &AssessmentFilter::any_variant("fall_intake"))
        .await;
    assert_eq!(aggregate.overall_risk_counts.healthy, 1);
    assert_eq!(aggregate.overall_risk_counts.at_risk, 0);
    assert_eq!(aggregate.per_dimension_at_risk.autonomy, 0);
    assert_eq!(aggregate.overall_average, 42.0);
}

struct FailingStore;

impl ResultStore for FailingStore {
    async fn results_for(
        &self,
        _cohort_id: &str,
        _filter: &AssessmentFilter,
    ) -> Result<Vec<ResultRecord>, StoreError> {
        Err(StoreError::Read("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_failure_degrades_to_the_zero_aggregate() {
    let aggregator = CohortAggregator::new(FailingStore);
    let filter = AssessmentFilter::any_variant("fall_intake");
    let aggregate = aggregator.aggregate("eng", &filter).await;
    assert_eq!(aggregate, CohortAggregate::empty("eng", &filter));
}
