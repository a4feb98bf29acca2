use folio_core::{sort_projects, ProjectRecord, SortMode};

fn titles(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|record| record.title.clone()).collect()
}

#[test]
fn recent_sort_is_non_increasing_and_stable() {
    let records = vec![
        ProjectRecord::new("first-2022", "Tools").with_year(2022),
        ProjectRecord::new("only-2024", "Tools").with_year(2024),
        ProjectRecord::new("second-2022", "Tools").with_year(2022),
        ProjectRecord::new("undated", "Tools"),
        ProjectRecord::new("third-2022", "Tools").with_year(2022),
    ];
    let mut view: Vec<&ProjectRecord> = records.iter().collect();

    sort_projects(&mut view, SortMode::Recent);

    assert_eq!(
        titles(&view),
        vec!["only-2024", "first-2022", "second-2022", "third-2022", "undated"]
    );
    let years: Vec<i32> = view.iter().filter_map(|record| record.year).collect();
    assert!(years.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn tech_sort_is_non_decreasing_case_folded() {
    let records = vec![
        ProjectRecord::new("unity", "Game Dev").with_tech(["Unity"]),
        ProjectRecord::new("none", "Tools"),
        ProjectRecord::new("react", "Tools").with_tech(["react"]),
        ProjectRecord::new("blender", "Art").with_tech(["Blender", "Python"]),
        ProjectRecord::new("rust", "Tools").with_tech(["Rust"]),
    ];
    let mut view: Vec<&ProjectRecord> = records.iter().collect();

    sort_projects(&mut view, SortMode::Tech);

    assert_eq!(titles(&view), vec!["blender", "react", "rust", "unity", "none"]);
    let keys: Vec<String> = view
        .iter()
        .filter_map(|record| record.primary_tech())
        .map(str::to_lowercase)
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn tech_sort_keeps_ties_in_input_order() {
    let records = vec![
        ProjectRecord::new("x", "Tools").with_tech(["Go"]),
        ProjectRecord::new("y", "Tools").with_tech(["Go", "Redis"]),
        ProjectRecord::new("z", "Tools"),
        ProjectRecord::new("w", "Tools"),
    ];
    let mut view: Vec<&ProjectRecord> = records.iter().collect();

    sort_projects(&mut view, SortMode::Tech);

    assert_eq!(titles(&view), vec!["x", "y", "z", "w"]);
}
