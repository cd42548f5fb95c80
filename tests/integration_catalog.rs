//! Catalog browsing integration tests
//!
//! Exercises the public surface end-to-end: filtering the static catalog,
//! the selection state machine, external link dispatch, and the TUI key
//! handling that ties them together.

use std::sync::Arc;

use adzdiag::catalog::{self, Category, CategoryFilter};
use adzdiag::filter::{self, FilterState};
use adzdiag::launch::{DEFAULT_BASE_URL, RecordingLauncher, tool_url};
use adzdiag::selection::Selection;
use adzdiag::tui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Integration test: wildcard category + blank query returns the whole catalog
#[test]
fn test_unfiltered_view_is_whole_catalog() {
    let state = FilterState::default();
    let results = filter::apply_catalog(&state);

    assert_eq!(results.len(), 16);
    let ids: Vec<&str> = results.iter().map(|t| t.id).collect();
    let catalog_ids: Vec<&str> = catalog::all().iter().map(|t| t.id).collect();
    assert_eq!(ids, catalog_ids);
}

/// Integration test: filtered views satisfy both predicates, completely, in order
#[test]
fn test_filter_soundness_and_completeness() {
    let queries = ["", "vag", "IMMO", "convert", "  codes  ", "zzz"];
    let categories = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Diagnostics),
        CategoryFilter::Only(Category::Security),
        CategoryFilter::Only(Category::Immobilizer),
        CategoryFilter::Only(Category::FileConversion),
        CategoryFilter::Only(Category::Utilities),
    ];

    for query in queries {
        for category in categories {
            let state = FilterState::new(query, category);
            let results = filter::apply_catalog(&state);

            // Soundness: every returned record passes both predicates
            for tool in &results {
                assert!(state.matches(tool), "{} should not pass ({query:?}, {category})", tool.id);
            }
            // Completeness: every passing record is returned
            for tool in catalog::all() {
                assert_eq!(
                    results.contains(&tool),
                    state.matches(tool),
                    "{} membership wrong for ({query:?}, {category})",
                    tool.id
                );
            }
            // Order: catalog-relative positions are increasing
            let positions: Vec<usize> = results
                .iter()
                .map(|t| catalog::all().iter().position(|c| c.id == t.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

/// Integration test: "vag" matches names and summaries case-insensitively
#[test]
fn test_vag_query() {
    let state = FilterState::new("vag", CategoryFilter::All);
    let results = filter::apply_catalog(&state);

    let names: Vec<&str> = results.iter().map(|t| t.name).collect();
    assert!(names.contains(&"VAG DSG Immo-Off"));
    assert!(!names.contains(&"Ford Radio Codes"));
}

/// Integration test: the Immobilizer chip shows exactly its five tools
#[test]
fn test_immobilizer_category() {
    let state = FilterState::new("", CategoryFilter::Only(Category::Immobilizer));
    let results = filter::apply_catalog(&state);

    let ids: Vec<&str> = results.iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![
            "vag-dsg-immo-off",
            "vag-ecu-immobilizer",
            "vag-tcu-immobilizer",
            "vag-bcm2-immobilizer",
            "porsche-ecu-immobilizer",
        ]
    );
}

/// Integration test: summary -> docs keeps the tool, with no intermediate idle
#[test]
fn test_summary_to_docs_transition() {
    let tool = catalog::by_id("program-keys").unwrap();
    let mut selection = Selection::Idle;

    selection.select(tool);
    assert_eq!(selection.summary_tool().map(|t| t.id), Some("program-keys"));

    selection.show_docs();
    assert_eq!(selection, Selection::Docs(tool));
}

/// Integration test: external view returns to idle whether or not the launch works
#[test]
fn test_external_view_always_closes_summary() {
    let tool = catalog::by_id("daimler-seed-key").unwrap();

    for launcher in [RecordingLauncher::new(), RecordingLauncher::failing()] {
        let mut selection = Selection::Idle;
        selection.select(tool);
        selection.open_external(&launcher, DEFAULT_BASE_URL);

        assert!(selection.is_idle());
        assert_eq!(launcher.opened(), vec![tool_url(DEFAULT_BASE_URL, "daimler-seed-key")]);
    }
}

/// Integration test: a full keyboard session through the TUI app
#[test]
fn test_tui_browse_session() {
    let launcher = Arc::new(RecordingLauncher::new());
    let mut app = App::new(DEFAULT_BASE_URL, launcher.clone());

    // Search for immobilizer tools
    press(&mut app, KeyCode::Char('/'));
    for c in "immo".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let visible: Vec<&str> = app.visible().iter().map(|t| t.id).collect();
    assert!(visible.contains(&"vag-dsg-immo-off"));
    assert!(!visible.contains(&"ford-radio-codes"));

    // Open the first result's summary, then its documentation
    press(&mut app, KeyCode::Enter);
    assert!(app.selection.summary_tool().is_some());
    press(&mut app, KeyCode::Char('d'));
    let docs_tool = app.selection.docs_tool().unwrap();

    // Open in the platform from the docs page, then go back
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Esc);
    assert!(app.selection.is_idle());

    assert_eq!(launcher.opened(), vec![tool_url(DEFAULT_BASE_URL, docs_tool.id)]);

    // Reset filters and confirm the whole catalog is back
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.visible().len(), 16);
}

/// Integration test: tool pages resolve under a configurable base URL
#[test]
fn test_tool_urls_follow_base() {
    for tool in catalog::all() {
        let url = tool_url("https://staging.adzdiag.co.uk", tool.id);
        assert_eq!(url, format!("https://staging.adzdiag.co.uk/tools/{}", tool.id));
    }
}
