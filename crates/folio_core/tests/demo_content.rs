use folio_core::{ContentStore, ShowcaseController, SiteConfig, SortMode};
use std::path::PathBuf;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

#[test]
fn bundled_demo_site_loads_and_renders() {
    let store = ContentStore::load_dir(demos_dir().join("content")).unwrap();
    let config = SiteConfig::load(demos_dir().join("site.json")).unwrap();
    let mut controller = ShowcaseController::new(store.projects(), &config);

    let view = controller.view();
    assert_eq!(view.featured.map(|r| r.title.as_str()), Some("Starfall Arena"));
    assert_eq!(view.cards.len(), store.projects().len() - 1);

    controller.set_sort(SortMode::Tech);
    controller.set_category("Tools");
    assert_eq!(controller.view().titles(), vec!["Tilemap Studio", "Dialogue Graph"]);
}
