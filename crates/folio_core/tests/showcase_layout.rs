use folio_core::{assign_sizes, CardSize, ProjectRecord, SizePattern};

#[test]
fn small_small_large_pattern_over_four_items() {
    let records: Vec<ProjectRecord> = (0..4)
        .map(|index| ProjectRecord::new(format!("P{index}"), "Tools"))
        .collect();
    let view: Vec<&ProjectRecord> = records.iter().collect();
    let pattern = SizePattern::from_labels(["small", "small", "large"]).unwrap();

    let sizes: Vec<CardSize> = assign_sizes(&view, &pattern)
        .into_iter()
        .map(|card| card.size)
        .collect();

    assert_eq!(
        sizes,
        vec![CardSize::Small, CardSize::Small, CardSize::Large, CardSize::Small]
    );
}

#[test]
fn size_for_is_pure() {
    let pattern = SizePattern::parse_list("medium,large,small,small").unwrap();
    for index in 0..32 {
        assert_eq!(pattern.size_for(index), pattern.size_for(index));
        assert_eq!(pattern.size_for(index), pattern.size_for(index + pattern.len()));
    }
}

#[test]
fn default_pattern_matches_documented_rhythm() {
    let pattern = SizePattern::default();
    assert_eq!(
        pattern.as_slice(),
        &[CardSize::Small, CardSize::Small, CardSize::Large]
    );
}

#[test]
fn pattern_serializes_as_label_list() {
    let pattern = SizePattern::new(vec![CardSize::Large, CardSize::Medium]).unwrap();
    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json, serde_json::json!(["large", "medium"]));

    let empty = serde_json::from_value::<SizePattern>(serde_json::json!([]));
    assert!(empty.is_err());
}
