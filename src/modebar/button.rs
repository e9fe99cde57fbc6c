use serde::{Deserialize, Serialize};

/// Full definition of one toolbar action.
///
/// `attr`/`val` describe the layout attribute the click handler writes;
/// the handler itself belongs to the host toolbar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    /// Clicking flips the attribute between `val` and its previous value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub toggle: bool,
}

impl ButtonSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            icon: None,
            attr: None,
            val: None,
            toggle: false,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, attr: impl Into<String>, val: Option<&str>) -> Self {
        self.attr = Some(attr.into());
        self.val = val.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: bool) -> Self {
        self.toggle = toggle;
        self
    }
}

/// User-supplied toolbar entry: a registry name or an inline definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButtonEntry {
    Identifier(String),
    Resolved(ButtonSpec),
}

impl From<&str> for ButtonEntry {
    fn from(value: &str) -> Self {
        Self::Identifier(value.to_owned())
    }
}

impl From<String> for ButtonEntry {
    fn from(value: String) -> Self {
        Self::Identifier(value)
    }
}

impl From<ButtonSpec> for ButtonEntry {
    fn from(value: ButtonSpec) -> Self {
        Self::Resolved(value)
    }
}

/// Buttons drawn together between two separators.
pub type ButtonGroup = Vec<ButtonSpec>;

/// Ordered toolbar content; group order is left-to-right display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolbarConfig {
    groups: Vec<ButtonGroup>,
}

impl ToolbarConfig {
    #[must_use]
    pub fn new(groups: Vec<ButtonGroup>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[ButtonGroup] {
        &self.groups
    }

    #[must_use]
    pub fn into_groups(self) -> Vec<ButtonGroup> {
        self.groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Button names per group, for diagnostics and assertions.
    #[must_use]
    pub fn button_names(&self) -> Vec<Vec<&str>> {
        self.groups
            .iter()
            .map(|group| group.iter().map(|button| button.name.as_str()).collect())
            .collect()
    }
}
