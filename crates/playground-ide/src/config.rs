//! Editor configuration loaded from `playground.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::editing::IndentSettings;

pub(crate) const CONFIG_FILES: &[&str] = &["playground.toml", ".playground.toml"];

/// Color theme of the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Name used by the editor's `theme` option.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// `[editor]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Initial color theme.
    pub theme: Theme,
    /// Width of a tab character in columns.
    pub tab_size: u32,
    /// Columns added or removed by one indent step.
    pub indent_unit: u32,
    /// Indent with tabs instead of spaces.
    pub indent_with_tabs: bool,
    /// Show the line number gutter.
    pub line_numbers: bool,
    /// Highlight the bracket matching the one at the cursor.
    pub match_brackets: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            tab_size: 2,
            indent_unit: 2,
            indent_with_tabs: false,
            line_numbers: true,
            match_brackets: true,
        }
    }
}

/// `[hints]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintSettings {
    /// Whether cursor moves are forwarded to the hint subsystem at all.
    pub enabled: bool,
    /// Recompute the import boundary from the buffer on every change instead
    /// of waiting for the hint subsystem to report it.
    pub derive_import_boundary: bool,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            derive_import_boundary: false,
        }
    }
}

/// Editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Config file path, if one was found.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
    /// Editing behavior and appearance.
    pub editor: EditorSettings,
    /// Hint forwarding.
    pub hints: HintSettings,
}

impl EditorConfig {
    /// Load configuration from the first config file found in `root`.
    /// Missing or unreadable files fall back to defaults.
    pub fn load(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return EditorConfig::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => EditorConfig::from_contents(Some(path), &contents),
            Err(err) => {
                warn!("Failed to read playground config at {}: {err}", path.display());
                EditorConfig {
                    config_path: Some(path),
                    ..EditorConfig::default()
                }
            }
        }
    }

    /// Parse configuration text. Malformed input logs a warning and yields
    /// the defaults.
    pub fn from_contents(config_path: Option<PathBuf>, contents: &str) -> Self {
        let mut config = match toml::from_str::<EditorConfig>(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                if let Some(path) = &config_path {
                    warn!(
                        "Failed to parse playground config at {}: {err}",
                        path.display()
                    );
                } else {
                    warn!("Failed to parse playground config: {err}");
                }
                EditorConfig::default()
            }
        };
        config.config_path = config_path;
        config.editor.tab_size = config.editor.tab_size.max(1);
        config
    }

    /// Indentation parameters for the indent commands.
    #[must_use]
    pub fn indent_settings(&self) -> IndentSettings {
        IndentSettings {
            tab_size: self.editor.tab_size,
            indent_unit: self.editor.indent_unit,
            indent_with_tabs: self.editor.indent_with_tabs,
        }
    }
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}
