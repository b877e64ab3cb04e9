//! Configuration loading and management

mod dialog;
mod io;

pub use dialog::{DialogConfig, DialogOverrides, OperandConfig, OperandOverrides};

use serde::{Deserialize, Serialize};

use crate::selection::DEFAULT_ALL_LABEL;

/// Main configuration structure
///
/// Dialog sections in a config file only override the keys they name; every
/// other key keeps the stock value for that dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    /// General settings
    pub settings: Settings,

    /// Plain sheet selection
    pub select: DialogConfig,

    /// Sheet number increment
    pub increment: DialogConfig,

    /// Sheet number decrement
    pub decrement: DialogConfig,
}

/// On-disk shape of [`Config`]
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    settings: Settings,
    select: Option<DialogOverrides>,
    increment: Option<DialogOverrides>,
    decrement: Option<DialogOverrides>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let mut config = Config {
            settings: file.settings,
            ..Config::with_defaults()
        };

        let sections = [
            (file.select, &mut config.select),
            (file.increment, &mut config.increment),
            (file.decrement, &mut config.decrement),
        ];
        for (overrides, dialog) in sections {
            if let Some(overrides) = overrides {
                overrides.merge_into(dialog);
            }
        }

        config
    }
}

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Label of the group that contains every sheet
    #[serde(default = "default_all_group_label")]
    pub all_group_label: String,
}

fn default_all_group_label() -> String {
    DEFAULT_ALL_LABEL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            all_group_label: default_all_group_label(),
        }
    }
}

fn default_select_dialog() -> DialogConfig {
    DialogConfig::sheets("Select Sheets", "Select")
}

fn default_increment_dialog() -> DialogConfig {
    DialogConfig::sheets("Increment Sheet Numbers", "Increment")
        .with_operand(OperandConfig::labeled("Increment by:"))
}

fn default_decrement_dialog() -> DialogConfig {
    DialogConfig::sheets("Decrement Sheet Numbers", "Decrement")
        .with_operand(OperandConfig::labeled("Decrement by:"))
}

impl Default for Config {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Config {
    /// Create a config with the stock select / increment / decrement dialogs
    pub fn with_defaults() -> Self {
        Self {
            settings: Settings::default(),
            select: default_select_dialog(),
            increment: default_increment_dialog(),
            decrement: default_decrement_dialog(),
        }
    }

    /// Dialog used for a renumber run in the given direction
    pub fn renumber_dialog(&self, decrement: bool) -> &DialogConfig {
        if decrement {
            &self.decrement
        } else {
            &self.increment
        }
    }
}
