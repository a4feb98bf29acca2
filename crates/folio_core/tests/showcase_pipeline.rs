use folio_core::{
    build_showcase, CardSize, CategoryFilter, ProjectRecord, ShowcaseController, ShowcaseQuery,
    SiteConfig, SizePattern, SortMode,
};

fn two_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("A", "Tools")
            .with_tech(["React"])
            .with_year(2023),
        ProjectRecord::new("B", "Game Dev")
            .with_tech(["Unity"])
            .with_year(2024),
    ]
}

#[test]
fn recent_sort_orders_newest_first() {
    let records = two_records();
    let query = ShowcaseQuery::from_inputs("", "all", "recent", SortMode::Tech);
    let view = build_showcase(&records, &query, &SizePattern::default());
    assert_eq!(view.titles(), vec!["B", "A"]);
}

#[test]
fn category_selector_narrows_to_game_dev() {
    let records = two_records();
    let query = ShowcaseQuery {
        category: CategoryFilter::parse("Game Dev"),
        ..ShowcaseQuery::default()
    };
    let view = build_showcase(&records, &query, &SizePattern::default());
    assert_eq!(view.titles(), vec!["B"]);
    assert_eq!(view.total_matches, 1);
}

#[test]
fn sort_never_reintroduces_filtered_records() {
    let records = two_records();
    let query = ShowcaseQuery::from_inputs("react", "all", "tech", SortMode::Recent);
    let view = build_showcase(&records, &query, &SizePattern::default());
    assert_eq!(view.titles(), vec!["A"]);
}

#[test]
fn no_match_yields_empty_view() {
    let records = two_records();
    let query = ShowcaseQuery::from_inputs("haskell", "all", "recent", SortMode::Recent);
    let view = build_showcase(&records, &query, &SizePattern::default());
    assert!(view.is_empty());
    assert!(view.featured.is_none());
    assert!(view.cards.is_empty());
}

#[test]
fn filtered_out_featured_record_is_not_shown() {
    let mut records = two_records();
    records.push(
        ProjectRecord::new("Flagship", "Tools")
            .with_tech(["Rust"])
            .with_year(2025)
            .with_featured(true),
    );
    let query = ShowcaseQuery::from_inputs("", "Game Dev", "recent", SortMode::Recent);
    let view = build_showcase(&records, &query, &SizePattern::default());
    assert!(view.featured.is_none());
    assert_eq!(view.titles(), vec!["B"]);
}

#[test]
fn controller_recomputes_on_every_state_change() {
    let mut records = two_records();
    records.push(ProjectRecord::new("C", "Tools").with_tech(["Blender"]).with_year(2021));
    let config = SiteConfig::default();
    let mut controller = ShowcaseController::new(&records, &config);

    assert_eq!(controller.view().titles(), vec!["B", "A", "C"]);

    controller.set_sort(SortMode::Tech);
    assert_eq!(controller.view().titles(), vec!["C", "A", "B"]);

    controller.set_category("Tools");
    assert_eq!(controller.view().titles(), vec!["C", "A"]);

    controller.set_search("REACT");
    let view = controller.view();
    assert_eq!(view.titles(), vec!["A"]);
    assert_eq!(view.cards[0].size, CardSize::Small);

    controller.reset();
    assert_eq!(controller.query(), &ShowcaseQuery::default());
    assert_eq!(controller.view().titles(), vec!["B", "A", "C"]);
}

#[test]
fn controller_uses_configured_pattern_and_default_sort() {
    let records = two_records();
    let config = SiteConfig::from_json_str(
        r#"{ "grid": { "pattern": ["large"] }, "default_sort": "tech" }"#,
    )
    .unwrap();
    let controller = ShowcaseController::new(&records, &config);

    let view = controller.view();
    assert_eq!(controller.query().sort, SortMode::Tech);
    assert_eq!(view.titles(), vec!["A", "B"]);
    assert!(view.cards.iter().all(|card| card.size == CardSize::Large));
}

#[test]
fn repeated_builds_are_identical() {
    let records = two_records();
    let query = ShowcaseQuery::default();
    let pattern = SizePattern::default();
    assert_eq!(
        build_showcase(&records, &query, &pattern),
        build_showcase(&records, &query, &pattern)
    );
}
