use chart_modebar::ModebarError;
use chart_modebar::core::{AxisDescriptor, ChartState, ScatterMode, TraceDescriptor};
use chart_modebar::modebar::{AddedButtons, ButtonEntry, ModebarConfig};
use serde_json::json;

#[test]
fn missing_options_use_defaults() {
    let config = ModebarConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, ModebarConfig::default());
    assert!(config.display_mode_bar);
    assert!(config.active_custom_buttons().is_none());
}

#[test]
fn non_array_removal_option_fails_fast() {
    let err = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToRemove": "pan2d",
    }))
    .expect_err("string is not an array");

    assert!(matches!(
        err,
        ModebarError::InvalidConfiguration { option: "modeBarButtonsToRemove", .. }
    ));
    assert_eq!(
        err.to_string(),
        "*modeBarButtonsToRemove* configuration options must be an array."
    );
}

#[test]
fn non_array_added_option_fails_fast() {
    let err = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToRemove": [],
        "modeBarButtonsToAdd": { "name": "toImage" },
    }))
    .expect_err("object is not an array");

    assert!(matches!(
        err,
        ModebarError::InvalidConfiguration { option: "modeBarButtonsToAdd", .. }
    ));
}

#[test]
fn removal_entries_must_be_names() {
    let result = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToRemove": ["pan2d", 3],
    }));
    assert!(matches!(result, Err(ModebarError::InvalidConfiguration { .. })));
}

#[test]
fn added_buttons_shape_follows_first_element() {
    let flat = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToAdd": ["toImage", { "name": "exportCsv", "title": "Export" }],
    }))
    .expect("flat list");
    match flat.buttons_to_add {
        AddedButtons::Flat(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0], ButtonEntry::from("toImage"));
            assert!(matches!(&entries[1], ButtonEntry::Resolved(spec) if spec.name == "exportCsv"));
        }
        other => panic!("expected flat list, got {other:?}"),
    }

    let grouped = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToAdd": [["toImage"], ["sendDataToCloud", "toImage"]],
    }))
    .expect("grouped list");
    assert_eq!(
        grouped.buttons_to_add,
        AddedButtons::Grouped(vec![
            vec![ButtonEntry::from("toImage")],
            vec![ButtonEntry::from("sendDataToCloud"), ButtonEntry::from("toImage")],
        ])
    );
}

#[test]
fn mixed_added_buttons_are_rejected() {
    let result = ModebarConfig::from_json_value(&json!({
        "modeBarButtonsToAdd": [["toImage"], "sendDataToCloud"],
    }));
    assert!(matches!(
        result,
        Err(ModebarError::InvalidConfiguration { option: "modeBarButtonsToAdd", .. })
    ));
}

#[test]
fn custom_buttons_must_be_groups() {
    let result = ModebarConfig::from_json_value(&json!({
        "modeBarButtons": ["zoom2d", ["pan2d"]],
    }));
    assert!(matches!(
        result,
        Err(ModebarError::InvalidConfiguration { option: "modeBarButtons", .. })
    ));

    let config = ModebarConfig::from_json_value(&json!({
        "modeBarButtons": [["zoom2d", "pan2d"], [{ "name": "mine" }]],
    }))
    .expect("custom groups");
    let custom = config.active_custom_buttons().expect("non-empty custom buttons");
    assert_eq!(custom.len(), 2);
    assert_eq!(custom[0][1], ButtonEntry::from("pan2d"));
}

#[test]
fn non_array_custom_buttons_fall_through_to_defaults() {
    for value in [json!(false), json!(true), json!("zoom2d"), json!({ "zoom2d": 1 })] {
        let config = ModebarConfig::from_json_value(&json!({ "modeBarButtons": value }))
            .expect("non-array custom buttons are ignored");
        assert!(config.custom_buttons.is_none());
        assert!(config.active_custom_buttons().is_none());
    }

    let state = ChartState::new(
        vec![TraceDescriptor::scatter(ScatterMode::MARKERS)],
        vec![AxisDescriptor::new("x", false)],
    );
    let config = ModebarConfig::from_json_value(&json!({
        "displayModeBar": true,
        "modeBarButtons": false,
        "modeBarButtonsToRemove": [],
        "modeBarButtonsToAdd": [],
    }))
    .expect("plotly-style default config");
    let toolbar = state.resolve_toolbar(&config).expect("default groups");
    assert_eq!(toolbar.button_names()[0], vec!["zoom2d", "pan2d", "select2d", "lasso2d"]);
}

#[test]
fn hidden_toolbar_skips_button_option_validation() {
    let config = ModebarConfig::from_json_value(&json!({
        "displayModeBar": false,
        "modeBarButtonsToRemove": "pan2d",
        "modeBarButtonsToAdd": 7,
    }))
    .expect("hidden toolbar config");

    assert!(!config.display_mode_bar);
    assert!(config.buttons_to_remove.is_empty());
    assert!(config.buttons_to_add.is_empty());
}

#[test]
fn null_custom_buttons_are_ignored() {
    let config = ModebarConfig::from_json_value(&json!({ "modeBarButtons": null }))
        .expect("null custom buttons");
    assert!(config.custom_buttons.is_none());
}

#[test]
fn display_flag_must_be_boolean() {
    let hidden = ModebarConfig::from_json_value(&json!({ "displayModeBar": false }))
        .expect("boolean flag");
    assert!(!hidden.display_mode_bar);

    let result = ModebarConfig::from_json_value(&json!({ "displayModeBar": "hover" }));
    assert!(matches!(result, Err(ModebarError::InvalidConfiguration { .. })));
}

#[test]
fn config_round_trips_through_serde() {
    let config = ModebarConfig::default()
        .with_buttons_to_remove(["lasso2d"])
        .with_buttons_to_add(AddedButtons::Grouped(vec![vec![ButtonEntry::from("toImage")]]));

    let json = serde_json::to_string(&config).expect("serialize config");
    let parsed: ModebarConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_json_is_reported_as_data_error() {
    let result = ModebarConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(ModebarError::InvalidData(_))));
}
