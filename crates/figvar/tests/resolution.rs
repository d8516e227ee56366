//! End-to-end tests over a captured variables payload.
//!
//! The fixture mirrors the REST envelope a design file export produces: four
//! collections (themed, primitive, semantic, and a component-density one)
//! wired together with cross-collection aliases.

use std::cell::Cell;
use std::rc::Rc;

use figvar::{Error, Session, SubscriberError};

const PAYLOAD: &str = include_str!("fixtures/local-variables.json");

fn session() -> Session {
    Session::from_json(PAYLOAD).unwrap()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn loads_the_rest_envelope() {
    let session = session();
    assert_eq!(session.snapshot().collection_count(), 4);
    assert_eq!(session.snapshot().variable_count(), 13);
}

#[test]
fn unknown_names_are_reported() {
    let session = session();
    assert!(matches!(
        session.collection("no-such-collection").unwrap_err(),
        Error::CollectionNotFound(name) if name == "no-such-collection"
    ));
    assert!(matches!(
        session.variable("no-such-variable").unwrap_err(),
        Error::VariableNotFound(name) if name == "no-such-variable"
    ));
}

// ============================================================================
// Default and explicit modes
// ============================================================================

#[test]
fn default_mode_applies_until_a_selection_is_made() {
    let session = session();
    let tests = session.collection("tests").unwrap();

    assert_eq!(tests.active_mode(), None);
    assert_eq!(tests.mode_id(), "1:0");
    assert_eq!(
        session.variable("brand-name").unwrap().string_value().unwrap(),
        "FigMayo"
    );
}

#[test]
fn selecting_a_mode_changes_what_a_handle_reads() {
    let session = session();
    let brand = session.variable("brand-name").unwrap();
    assert_eq!(brand.string_value().unwrap(), "FigMayo");

    session.collection("tests").unwrap().mode("Brand").unwrap();
    assert_eq!(brand.string_value().unwrap(), "Other");
}

#[test]
fn boolean_flags_follow_the_selected_mode() {
    let session = session();
    let awesome = session.variable("is-awesome").unwrap();
    let tests = session.collection("tests").unwrap();

    assert!(awesome.bool_value().unwrap());
    tests.mode("Dark").unwrap();
    assert!(!awesome.bool_value().unwrap());
    tests.mode("Light").unwrap();
    assert!(awesome.bool_value().unwrap());
}

#[test]
fn unknown_mode_names_fall_back_to_the_default() {
    let session = session();
    let tests = session.collection("tests").unwrap();

    tests.mode("Blurple").unwrap();
    assert_eq!(tests.active_mode(), Some("Blurple".to_string()));
    assert_eq!(tests.mode_id(), "1:0");
    assert_eq!(
        session.variable("brand-name").unwrap().string_value().unwrap(),
        "FigMayo"
    );
}

#[test]
fn mode_state_is_per_collection() {
    let session = session();
    session.collection("tests").unwrap().mode("Dark").unwrap();

    assert_eq!(session.collection("semantic").unwrap().active_mode(), None);
    assert_eq!(
        session.variable("primary/100").unwrap().hex().unwrap(),
        "#FBF5E6"
    );
}

#[test]
fn sessions_do_not_share_mode_state() {
    let one = session();
    let two = session();

    one.collection("tests").unwrap().mode("Brand").unwrap();
    assert_eq!(two.collection("tests").unwrap().active_mode(), None);
    assert_eq!(
        two.variable("brand-name").unwrap().string_value().unwrap(),
        "FigMayo"
    );
}

// ============================================================================
// Facade lookups
// ============================================================================

#[test]
fn lookup_with_mode_selects_before_reading() {
    let session = session();
    let brand = session
        .variable_with_mode("brand-name", "Brand")
        .unwrap();
    assert_eq!(brand.string_value().unwrap(), "Other");

    // The selection is ambient: plain lookups now see it too.
    assert_eq!(
        session.variable("brand-name").unwrap().string_value().unwrap(),
        "Other"
    );

    let tests = session.collection_with_mode("tests", "Light").unwrap();
    assert_eq!(tests.active_mode(), Some("Light".to_string()));
    assert_eq!(brand.string_value().unwrap(), "FigMayo");
}

#[test]
fn mode_scope_narrows_every_lookup() {
    let session = session();
    let scope = session.mode("Spacious");
    assert_eq!(scope.name(), "Spacious");
    assert_eq!(
        scope.variable("pdHorizontal").unwrap().float_value().unwrap(),
        16.0
    );

    let compact = session
        .mode("Compact")
        .collection("buttonModes")
        .unwrap()
        .variable("pdHorizontal")
        .unwrap();
    assert_eq!(compact.float_value().unwrap(), 8.0);
}

// ============================================================================
// Aliases
// ============================================================================

#[test]
fn alias_chain_crosses_collections() {
    let session = session();
    let page_bg = session.variable("page-bg").unwrap();

    // page-bg (tests) -> primary/100 (semantic) -> color/cream (primitives)
    assert_eq!(page_bg.rgba().unwrap(), "rgba(251, 245, 230, 1)");

    session.collection("semantic").unwrap().mode("Dark").unwrap();
    assert_eq!(page_bg.rgba().unwrap(), "rgba(28, 28, 30, 1)");

    // Rerouting happened in the middle of the chain; the handle's own
    // collection was never touched.
    assert_eq!(session.collection("tests").unwrap().active_mode(), None);
}

#[test]
fn alias_resolves_under_the_targets_own_mode() {
    let session = session();
    let spacing = session.variable("space/space-025").unwrap();

    assert_eq!(spacing.px().unwrap(), "2px");
    session.collection("semantic").unwrap().mode("Dark").unwrap();
    assert_eq!(spacing.px().unwrap(), "2px");
}

#[test]
fn cycle_is_reported_with_the_walked_path() {
    let err = session().variable("loop-a").unwrap().resolve().unwrap_err();
    match err {
        Error::CycleDetected { path } => {
            assert_eq!(path, vec!["loop-a", "loop-b", "loop-a"]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn dangling_alias_is_reported() {
    let err = session().variable("broken").unwrap().resolve().unwrap_err();
    match err {
        Error::UnresolvedAlias { from, id } => {
            assert_eq!(from, "broken");
            assert_eq!(id, "VariableID:99:99");
        }
        other => panic!("expected UnresolvedAlias, got {other:?}"),
    }
}

#[test]
fn missing_slot_for_the_selected_mode_is_reported() {
    let session = session();
    let beta = session.variable_with_mode("beta-flag", "Brand").unwrap();
    match beta.resolve().unwrap_err() {
        Error::ModeNotFound { variable, mode_id } => {
            assert_eq!(variable, "beta-flag");
            assert_eq!(mode_id, "1:2");
        }
        other => panic!("expected ModeNotFound, got {other:?}"),
    }
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn colors_format_for_css() {
    let session = session();
    let primary = session.variable("primary/100").unwrap();

    assert_eq!(primary.rgba().unwrap(), "rgba(251, 245, 230, 1)");
    assert_eq!(primary.hex().unwrap(), "#FBF5E6");
    assert_eq!(
        primary.rgba_with_alpha(0.5).unwrap(),
        "rgba(251, 245, 230, 0.5)"
    );

    primary.mode("Dark").unwrap();
    assert_eq!(primary.rgba().unwrap(), "rgba(28, 28, 30, 1)");
    assert_eq!(primary.hex().unwrap(), "#1C1C1E");
}

#[test]
fn floats_format_as_px() {
    let session = session();
    let padding = session.variable("pdHorizontal").unwrap();

    assert_eq!(padding.px().unwrap(), "12px");
    padding.mode("Compact").unwrap();
    assert_eq!(padding.px().unwrap(), "8px");
}

#[test]
fn formatting_the_wrong_kind_is_an_error() {
    let err = session().variable("brand-name").unwrap().px().unwrap_err();
    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: "float",
            actual: "string"
        }
    ));
}

#[test]
fn resolved_values_display_readably() {
    let session = session();
    let show = |name: &str| session.variable(name).unwrap().resolve().unwrap().to_string();

    assert_eq!(show("brand-name"), "FigMayo");
    assert_eq!(show("is-awesome"), "true");
    assert_eq!(show("pdHorizontal"), "12");
    assert_eq!(show("page-bg"), "rgba(251, 245, 230, 1)");
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn handles_share_identity_across_lookup_paths() {
    let session = session();
    let direct = session.variable("brand-name").unwrap();
    let via_collection = session
        .collection("tests")
        .unwrap()
        .variable("brand-name")
        .unwrap();
    let via_scope = session.mode("Light").variable("brand-name").unwrap();

    assert_eq!(direct, via_collection);
    assert_eq!(direct.uid(), via_collection.uid());
    assert_eq!(direct.uid(), via_scope.uid());
    assert_ne!(direct.uid(), session.variable("is-awesome").unwrap().uid());

    let owner = direct.collection().unwrap();
    assert_eq!(owner, session.collection("tests").unwrap());
    assert_eq!(owner.uid(), session.collection("tests").unwrap().uid());
}

#[test]
fn same_named_variables_bind_to_one_record_in_every_session() {
    // The tool only keeps display names unique within a collection; a lookup
    // that crosses collections must still pick the same record every time.
    const SHADOWED: &str = r#"{
        "variableCollections": {
            "VariableCollectionId:1:100": {
                "id": "VariableCollectionId:1:100",
                "name": "palette",
                "defaultModeId": "1:0",
                "modes": [{ "modeId": "1:0", "name": "Value" }],
                "variableIds": ["VariableID:2:1"]
            },
            "VariableCollectionId:1:200": {
                "id": "VariableCollectionId:1:200",
                "name": "semantic",
                "defaultModeId": "2:0",
                "modes": [{ "modeId": "2:0", "name": "Light" }],
                "variableIds": ["VariableID:2:2"]
            }
        },
        "variables": {
            "VariableID:2:1": {
                "id": "VariableID:2:1",
                "name": "primary",
                "variableCollectionId": "VariableCollectionId:1:100",
                "resolvedType": "STRING",
                "valuesByMode": { "1:0": "from-palette" }
            },
            "VariableID:2:2": {
                "id": "VariableID:2:2",
                "name": "primary",
                "variableCollectionId": "VariableCollectionId:1:200",
                "resolvedType": "STRING",
                "valuesByMode": { "2:0": "from-semantic" }
            }
        }
    }"#;

    for round in 0..64 {
        let session = Session::from_json(SHADOWED).unwrap();
        let primary = session.variable("primary").unwrap();
        assert_eq!(primary.id(), "VariableID:2:1", "round {round}");
        assert_eq!(primary.string_value().unwrap(), "from-palette");
        assert_eq!(primary.collection().unwrap().name(), "palette");
    }
}

#[test]
fn collections_report_their_shape() {
    let session = session();
    let buttons = session.collection("buttonModes").unwrap();
    assert_eq!(buttons.id(), "VariableCollectionId:1:400");
    assert_eq!(buttons.default_mode_id(), "4:1");
    assert_eq!(
        buttons.mode_names(),
        vec!["Spacious", "Default", "Comfortable", "Compact"]
    );

    let tests = session.collection("tests").unwrap();
    let names: Vec<String> = tests
        .variables()
        .into_iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "brand-name",
            "is-awesome",
            "beta-flag",
            "page-bg",
            "broken",
            "loop-a",
            "loop-b"
        ]
    );
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn subscribers_hear_mode_changes_by_name() {
    let session = session();
    let tests = session.collection("tests").unwrap();

    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let token = tests.subscribe(move |mode| {
        sink.borrow_mut().push(mode.to_string());
        Ok(())
    });

    tests.mode("Dark").unwrap();
    tests.mode("Brand").unwrap();
    assert_eq!(*seen.borrow(), vec!["Dark", "Brand"]);

    assert!(tests.unsubscribe(token));
    tests.mode("Light").unwrap();
    assert_eq!(seen.borrow().len(), 2);
    assert!(!tests.unsubscribe(token));
}

#[test]
fn subscribers_only_hear_their_own_collection() {
    let session = session();
    let tests = session.collection("tests").unwrap();

    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);
    tests.subscribe(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    session.collection("semantic").unwrap().mode("Dark").unwrap();
    assert_eq!(calls.get(), 0);

    tests.mode("Dark").unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn failing_subscriber_surfaces_but_the_selection_sticks() {
    let session = session();
    let tests = session.collection("tests").unwrap();

    tests.subscribe(|_| Err(SubscriberError::new("not ready")));
    let later = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&later);
    tests.subscribe(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    let err = tests.mode("Dark").unwrap_err();
    assert!(matches!(err, Error::Subscriber(_)));
    assert!(err.to_string().contains("not ready"));

    // Notification halted at the failure, but the selection had already
    // landed.
    assert_eq!(later.get(), 0);
    assert_eq!(tests.active_mode(), Some("Dark".to_string()));
    assert!(!session.variable("is-awesome").unwrap().bool_value().unwrap());
}
