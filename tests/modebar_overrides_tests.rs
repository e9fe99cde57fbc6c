use chart_modebar::ModebarError;
use chart_modebar::core::{AxisDescriptor, ChartCapabilities, ScatterMode, TraceDescriptor};
use chart_modebar::modebar::{
    AddedButtons, ButtonEntry, ButtonRegistry, ButtonSpec, ModebarConfig, default_registry,
    resolve_toolbar,
};

fn scatter_chart() -> (ChartCapabilities, Vec<TraceDescriptor>, Vec<AxisDescriptor>) {
    (
        ChartCapabilities::default().with_cartesian(true),
        vec![TraceDescriptor::scatter(ScatterMode::MARKERS)],
        vec![AxisDescriptor::new("x", false)],
    )
}

fn names(config: &ModebarConfig) -> Vec<Vec<String>> {
    let (caps, traces, axes) = scatter_chart();
    resolve_toolbar(default_registry(), caps, &traces, &axes, config)
        .expect("resolve toolbar")
        .button_names()
        .into_iter()
        .map(|group| group.into_iter().map(str::to_owned).collect())
        .collect()
}

#[test]
fn removing_pan_preserves_remaining_order() {
    let config = ModebarConfig::default().with_buttons_to_remove(["pan2d"]);
    let groups = names(&config);

    assert_eq!(groups[0], vec!["zoom2d", "select2d", "lasso2d"]);
    assert_eq!(groups.len(), 3);
}

#[test]
fn removing_unknown_name_is_a_no_op() {
    let baseline = names(&ModebarConfig::default());
    let config = ModebarConfig::default().with_buttons_to_remove(["notAButton"]);

    assert_eq!(names(&config), baseline);
}

#[test]
fn removing_whole_group_leaves_empty_group_in_place() {
    let config = ModebarConfig::default()
        .with_buttons_to_remove(["hoverClosestCartesian", "hoverCompareCartesian"]);
    let groups = names(&config);

    assert_eq!(groups.len(), 3);
    assert!(groups[2].is_empty());
}

#[test]
fn flat_added_buttons_form_one_trailing_group() {
    let config = ModebarConfig::default().with_buttons_to_add(AddedButtons::Flat(vec![
        ButtonEntry::from("toImage"),
        ButtonEntry::from("sendDataToCloud"),
    ]));
    let groups = names(&config);

    assert_eq!(groups.len(), 4);
    assert_eq!(groups[3], vec!["toImage", "sendDataToCloud"]);
}

#[test]
fn grouped_added_buttons_append_each_group() {
    let custom = ButtonSpec::new("exportCsv", "Export CSV").with_icon("disk");
    let config = ModebarConfig::default().with_buttons_to_add(AddedButtons::Grouped(vec![
        vec![ButtonEntry::from("toImage"), ButtonEntry::from(custom)],
        vec![ButtonEntry::from("sendDataToCloud")],
    ]));
    let groups = names(&config);

    assert_eq!(groups.len(), 5);
    assert_eq!(groups[3], vec!["toImage", "exportCsv"]);
    assert_eq!(groups[4], vec!["sendDataToCloud"]);
}

#[test]
fn removal_does_not_touch_added_buttons() {
    let config = ModebarConfig::default()
        .with_buttons_to_remove(["toImage"])
        .with_buttons_to_add(AddedButtons::Flat(vec![ButtonEntry::from("toImage")]));
    let groups = names(&config);

    assert_eq!(groups.last(), Some(&vec!["toImage".to_owned()]));
}

#[test]
fn custom_buttons_replace_derived_toolbar() {
    let inline = ButtonSpec::new("myAction", "My action");
    let config = ModebarConfig::default()
        .with_buttons_to_remove(["zoom2d"])
        .with_buttons_to_add(AddedButtons::Flat(vec![ButtonEntry::from("toImage")]))
        .with_custom_buttons(vec![
            vec![ButtonEntry::from("zoom2d"), ButtonEntry::from(inline.clone())],
            vec![ButtonEntry::from("hoverClosestPie")],
        ]);

    let (caps, traces, axes) = scatter_chart();
    let toolbar = resolve_toolbar(default_registry(), caps, &traces, &axes, &config)
        .expect("resolve toolbar");

    assert_eq!(
        toolbar.button_names(),
        vec![vec!["zoom2d", "myAction"], vec!["hoverClosestPie"]]
    );
    assert_eq!(toolbar.groups()[0][1], inline);
}

#[test]
fn empty_custom_buttons_fall_through_to_defaults() {
    let config = ModebarConfig::default().with_custom_buttons(Vec::new());
    assert_eq!(names(&config), names(&ModebarConfig::default()));
}

#[test]
fn unknown_custom_button_aborts_resolution() {
    let config = ModebarConfig::default()
        .with_custom_buttons(vec![vec![ButtonEntry::from("zoom2d"), ButtonEntry::from("warp")]]);
    let (caps, traces, axes) = scatter_chart();

    let err = resolve_toolbar(default_registry(), caps, &traces, &axes, &config)
        .expect_err("unknown button");
    assert!(matches!(err, ModebarError::UnresolvedButton { ref name } if name == "warp"));
}

#[test]
fn unknown_added_button_aborts_resolution() {
    let config = ModebarConfig::default()
        .with_buttons_to_add(AddedButtons::Flat(vec![ButtonEntry::from("warp")]));
    let (caps, traces, axes) = scatter_chart();

    let result = resolve_toolbar(default_registry(), caps, &traces, &axes, &config);
    assert!(matches!(result, Err(ModebarError::UnresolvedButton { .. })));
}

#[test]
fn host_registry_overrides_builtin_definition() {
    let mut registry = ButtonRegistry::with_defaults();
    let previous = registry.register(ButtonSpec::new("pan2d", "Drag to pan").with_icon("hand"));
    assert!(previous.is_some());

    let (caps, traces, axes) = scatter_chart();
    let toolbar = resolve_toolbar(&registry, caps, &traces, &axes, &ModebarConfig::default())
        .expect("resolve toolbar");
    assert_eq!(toolbar.groups()[0][1].title, "Drag to pan");
}

#[test]
fn empty_registry_cannot_resolve_defaults() {
    let (caps, traces, axes) = scatter_chart();
    let result = resolve_toolbar(
        &ButtonRegistry::empty(),
        caps,
        &traces,
        &axes,
        &ModebarConfig::default(),
    );
    assert!(matches!(result, Err(ModebarError::UnresolvedButton { ref name }) if name == "zoom2d"));
}
