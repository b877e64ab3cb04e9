//! Selection dialog configuration

use serde::{Deserialize, Serialize};

/// Options for one selection session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Label of the confirm button
    #[serde(default = "default_button_text")]
    pub button_text: String,

    /// Offer the filter text field (and the regex toggle)
    #[serde(default = "default_true")]
    pub show_search: bool,

    /// Offer check all / uncheck all / toggle all
    #[serde(default = "default_true")]
    pub show_check_buttons: bool,

    /// Offer the group (sheet set) selector
    #[serde(default)]
    pub show_group_scope: bool,

    /// Offer the reset button
    #[serde(default)]
    pub show_reset_button: bool,

    /// Group selected when the session opens; the catch-all group when unset
    #[serde(default)]
    pub default_group: Option<String>,

    /// Initial selection flag of every entry
    #[serde(default)]
    pub default_select_all: bool,

    /// Refuse to confirm with nothing selected
    #[serde(default = "default_true")]
    pub require_selection: bool,

    /// Numeric operand requested alongside the selection
    #[serde(default)]
    pub operand: Option<OperandConfig>,

    /// Help page opened from the dialog
    #[serde(default)]
    pub help_url: Option<String>,
}

fn default_title() -> String {
    "Select Items".to_string()
}

fn default_button_text() -> String {
    "Select".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            button_text: default_button_text(),
            show_search: true,
            show_check_buttons: true,
            show_group_scope: false,
            show_reset_button: false,
            default_group: None,
            default_select_all: false,
            require_selection: true,
            operand: None,
            help_url: None,
        }
    }
}

impl DialogConfig {
    /// Plain picker with a title and button label
    pub fn titled(title: impl Into<String>, button_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            button_text: button_text.into(),
            ..Default::default()
        }
    }

    /// Sheet picker with the sheet set selector enabled
    pub fn sheets(title: impl Into<String>, button_text: impl Into<String>) -> Self {
        Self {
            show_group_scope: true,
            ..Self::titled(title, button_text)
        }
    }

    pub fn with_operand(mut self, operand: OperandConfig) -> Self {
        self.operand = Some(operand);
        self
    }

    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }
}

/// The numeric field shown next to the confirm button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandConfig {
    /// Field label (e.g., "Increment by:")
    #[serde(default = "default_operand_label")]
    pub label: String,

    /// Initial field text
    #[serde(default = "default_operand_value")]
    pub default_value: String,

    /// Reject zero and negative values
    #[serde(default = "default_true")]
    pub require_positive: bool,
}

fn default_operand_label() -> String {
    "Value:".to_string()
}

fn default_operand_value() -> String {
    "1".to_string()
}

impl Default for OperandConfig {
    fn default() -> Self {
        Self {
            label: default_operand_label(),
            default_value: default_operand_value(),
            require_positive: true,
        }
    }
}

impl OperandConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

/// A `[select]` / `[increment]` / `[decrement]` section as written by the user
///
/// Only the keys present in the file are set; [`DialogOverrides::merge_into`]
/// lays them over the stock dialog for that section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DialogOverrides {
    pub title: Option<String>,
    pub button_text: Option<String>,
    pub show_search: Option<bool>,
    pub show_check_buttons: Option<bool>,
    pub show_group_scope: Option<bool>,
    pub show_reset_button: Option<bool>,
    pub default_group: Option<String>,
    pub default_select_all: Option<bool>,
    pub require_selection: Option<bool>,
    pub operand: Option<OperandOverrides>,
    pub help_url: Option<String>,
}

impl DialogOverrides {
    pub fn merge_into(self, base: &mut DialogConfig) {
        fn set<V>(slot: &mut V, value: Option<V>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut base.title, self.title);
        set(&mut base.button_text, self.button_text);
        set(&mut base.show_search, self.show_search);
        set(&mut base.show_check_buttons, self.show_check_buttons);
        set(&mut base.show_group_scope, self.show_group_scope);
        set(&mut base.show_reset_button, self.show_reset_button);
        set(&mut base.default_select_all, self.default_select_all);
        set(&mut base.require_selection, self.require_selection);

        if self.default_group.is_some() {
            base.default_group = self.default_group;
        }
        if self.help_url.is_some() {
            base.help_url = self.help_url;
        }
        if let Some(operand) = self.operand {
            operand.merge_into(base.operand.get_or_insert_with(OperandConfig::default));
        }
    }
}

/// Partial `operand` table of a dialog section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperandOverrides {
    pub label: Option<String>,
    pub default_value: Option<String>,
    pub require_positive: Option<bool>,
}

impl OperandOverrides {
    pub fn merge_into(self, base: &mut OperandConfig) {
        if let Some(label) = self.label {
            base.label = label;
        }
        if let Some(value) = self.default_value {
            base.default_value = value;
        }
        if let Some(require_positive) = self.require_positive {
            base.require_positive = require_positive;
        }
    }
}
