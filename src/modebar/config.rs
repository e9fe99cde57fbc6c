use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModebarError, ModebarResult};

use super::{ButtonEntry, ButtonRegistry, ButtonSpec};

pub const DISPLAY_MODE_BAR: &str = "displayModeBar";
pub const BUTTONS_TO_REMOVE: &str = "modeBarButtonsToRemove";
pub const BUTTONS_TO_ADD: &str = "modeBarButtonsToAdd";
pub const CUSTOM_BUTTONS: &str = "modeBarButtons";

/// Trailing buttons appended after the derived groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddedButtons {
    /// Appended as a single group.
    Flat(Vec<ButtonEntry>),
    /// Each inner list becomes its own group.
    Grouped(Vec<Vec<ButtonEntry>>),
}

impl Default for AddedButtons {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl AddedButtons {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(entries) => entries.is_empty(),
            Self::Grouped(groups) => groups.is_empty(),
        }
    }

    pub(crate) fn resolve(
        &self,
        registry: &ButtonRegistry,
    ) -> ModebarResult<Vec<Vec<ButtonSpec>>> {
        match self {
            Self::Flat(entries) if entries.is_empty() => Ok(Vec::new()),
            Self::Flat(entries) => Ok(vec![registry.resolve_group(entries)?]),
            Self::Grouped(groups) => groups
                .iter()
                .map(|group| registry.resolve_group(group))
                .collect(),
        }
    }

    /// The shape is decided by the first element alone: a leading array means
    /// the whole list is a list of groups.
    fn from_json_items(items: &[Value]) -> ModebarResult<Self> {
        match items.first() {
            None => Ok(Self::default()),
            Some(Value::Array(_)) => items
                .iter()
                .map(|item| match item {
                    Value::Array(group) => parse_entries(BUTTONS_TO_ADD, group),
                    _ => Err(ModebarError::invalid_configuration(
                        BUTTONS_TO_ADD,
                        "must contain either only buttons or only button groups",
                    )),
                })
                .collect::<ModebarResult<Vec<_>>>()
                .map(Self::Grouped),
            Some(_) => parse_entries(BUTTONS_TO_ADD, items).map(Self::Flat),
        }
    }
}

/// Host-facing toolbar options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ModebarConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    #[serde(rename = "modeBarButtonsToRemove")]
    pub buttons_to_remove: Vec<String>,
    #[serde(rename = "modeBarButtonsToAdd")]
    pub buttons_to_add: AddedButtons,
    /// Replaces the derived toolbar entirely when non-empty.
    #[serde(rename = "modeBarButtons", skip_serializing_if = "Option::is_none")]
    pub custom_buttons: Option<Vec<Vec<ButtonEntry>>>,
}

impl Default for ModebarConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: true,
            buttons_to_remove: Vec::new(),
            buttons_to_add: AddedButtons::default(),
            custom_buttons: None,
        }
    }
}

impl ModebarConfig {
    pub fn from_json_str(input: &str) -> ModebarResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ModebarError::InvalidData(format!("failed to parse modebar config json: {e}"))
        })?;
        Self::from_json_value(&value)
    }

    /// Validates every option before producing a config; the first malformed
    /// option aborts. A hidden toolbar skips validation of the button options,
    /// which are never consulted.
    pub fn from_json_value(value: &Value) -> ModebarResult<Self> {
        let Value::Object(object) = value else {
            return Err(ModebarError::InvalidData(
                "modebar config must be a json object".to_owned(),
            ));
        };

        let display_mode_bar = match object.get(DISPLAY_MODE_BAR) {
            None | Some(Value::Null) => true,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                return Err(ModebarError::invalid_configuration(
                    DISPLAY_MODE_BAR,
                    "must be a boolean.",
                ));
            }
        };
        if !display_mode_bar {
            return Ok(Self::default().with_display_mode_bar(false));
        }

        let buttons_to_remove = required_array(object, BUTTONS_TO_REMOVE)?
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                _ => Err(ModebarError::invalid_configuration(
                    BUTTONS_TO_REMOVE,
                    "must only contain button names.",
                )),
            })
            .collect::<ModebarResult<Vec<_>>>()?;

        let buttons_to_add =
            AddedButtons::from_json_items(required_array(object, BUTTONS_TO_ADD)?)?;

        // Only an array takes over the toolbar; `false` and other scalars mean unset.
        let custom_buttons = match object.get(CUSTOM_BUTTONS) {
            Some(Value::Array(groups)) => Some(
                groups
                    .iter()
                    .map(|group| match group {
                        Value::Array(entries) => parse_entries(CUSTOM_BUTTONS, entries),
                        _ => Err(ModebarError::invalid_configuration(
                            CUSTOM_BUTTONS,
                            "must be an array of button groups.",
                        )),
                    })
                    .collect::<ModebarResult<Vec<_>>>()?,
            ),
            _ => None,
        };

        Ok(Self {
            display_mode_bar,
            buttons_to_remove,
            buttons_to_add,
            custom_buttons,
        })
    }

    #[must_use]
    pub fn with_display_mode_bar(mut self, display: bool) -> Self {
        self.display_mode_bar = display;
        self
    }

    #[must_use]
    pub fn with_buttons_to_remove<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buttons_to_remove = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_buttons_to_add(mut self, buttons: AddedButtons) -> Self {
        self.buttons_to_add = buttons;
        self
    }

    #[must_use]
    pub fn with_custom_buttons(mut self, groups: Vec<Vec<ButtonEntry>>) -> Self {
        self.custom_buttons = Some(groups);
        self
    }

    /// Custom groups that take over the toolbar, if any.
    #[must_use]
    pub fn active_custom_buttons(&self) -> Option<&[Vec<ButtonEntry>]> {
        self.custom_buttons
            .as_deref()
            .filter(|groups| !groups.is_empty())
    }
}

impl TryFrom<Value> for ModebarConfig {
    type Error = ModebarError;

    fn try_from(value: Value) -> ModebarResult<Self> {
        Self::from_json_value(&value)
    }
}

/// Missing options default to an empty list; present ones must be arrays.
fn required_array<'a>(
    object: &'a Map<String, Value>,
    option: &'static str,
) -> ModebarResult<&'a [Value]> {
    match object.get(option) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ModebarError::invalid_configuration(
            option,
            "must be an array.",
        )),
    }
}

fn parse_entries(option: &'static str, items: &[Value]) -> ModebarResult<Vec<ButtonEntry>> {
    items
        .iter()
        .map(|item| match item {
            Value::String(name) => Ok(ButtonEntry::Identifier(name.clone())),
            Value::Object(_) => serde_json::from_value::<ButtonSpec>(item.clone())
                .map(ButtonEntry::Resolved)
                .map_err(|e| {
                    ModebarError::invalid_configuration(
                        option,
                        format!("invalid button object: {e}"),
                    )
                }),
            _ => Err(ModebarError::invalid_configuration(
                option,
                "entries must be button names or button objects.",
            )),
        })
        .collect()
}
