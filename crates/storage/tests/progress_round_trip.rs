use std::collections::BTreeMap;

use assessment_core::Catalog;
use assessment_core::model::{AnswerState, QuestionId};
use assessment_core::time::{FIXED_TEST_TIMESTAMP, fixed_now};
use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use storage::repository::ProgressRecord;

fn answers() -> impl Strategy<Value = BTreeMap<QuestionId, u8>> {
    prop::collection::btree_map(1u32..=50, 1u8..=4, 0..=50)
        .prop_map(|m| m.into_iter().map(|(id, w)| (QuestionId::new(id), w)).collect())
}

fn session_start() -> impl Strategy<Value = DateTime<Utc>> {
    (-86_400i64..86_400, 0u32..1_000_000_000).prop_map(|(offset, nanos)| {
        DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP + offset, nanos)
            .expect("timestamp in range")
    })
}

proptest! {
    #[test]
    fn snapshot_json_restores_identical_state(
        answers in answers(),
        index in 0usize..50,
        start in session_start(),
        saved_after_secs in 0i64..10_000,
    ) {
        let catalog = Catalog::standard();
        let state = AnswerState::from_persisted(catalog, answers, index, start).unwrap();
        let saved_at = start + Duration::seconds(saved_after_secs);

        let json = ProgressRecord::from_state(&state, saved_at).to_json().unwrap();
        let restored = ProgressRecord::from_json(&json)
            .unwrap()
            .into_state(catalog, fixed_now() + Duration::days(3))
            .unwrap();

        prop_assert_eq!(restored, state);
    }
}
