use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Placeholder text shown while the query is empty
    pub placeholder: String,

    /// Show the key-hint line at the bottom of the screen
    pub show_help_line: bool,

    /// Maximum number of dropdown rows rendered at once
    pub max_dropdown_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Items file loaded at startup when no path is given on the
    /// command line
    pub items_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Tag color (e.g., "blue", "green", "magenta")
    pub tag_color: String,

    /// Color of the tag armed for backspace removal
    pub highlight_color: String,

    /// Color of the dropdown row under the cursor
    pub cursor_color: String,

    /// Border color for the input box and dropdown
    pub border_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            behavior: BehaviorConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type to search...".to_string(),
            show_help_line: true,
            max_dropdown_rows: 8,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { items_file: None }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            tag_color: "blue".to_string(),
            highlight_color: "lightblue".to_string(),
            cursor_color: "darkgray".to_string(),
            border_color: "gray".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("tag-picker").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Tag Picker Configuration File
# Location: ~/.config/tag-picker/config.toml (Linux/macOS)
#           %APPDATA%\tag-picker\config.toml (Windows)

[display]
# Placeholder text shown while the search box is empty
placeholder = "Type to search..."

# Show the key-hint line at the bottom of the screen
show_help_line = true

# Maximum number of dropdown rows rendered at once
max_dropdown_rows = 8

[behavior]
# Items file loaded at startup when none is given on the command line
# Supports .txt (one item per line) and .json (array of strings)
# items_file = "/path/to/items.txt"

[theme]
# Color names: black, red, green, yellow, blue, magenta, cyan, gray,
# darkgray, lightred, lightgreen, lightyellow, lightblue, lightmagenta,
# lightcyan, white
tag_color = "blue"
highlight_color = "lightblue"
cursor_color = "darkgray"
border_color = "gray"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.display.placeholder, config.display.placeholder);
        assert_eq!(
            parsed.display.max_dropdown_rows,
            config.display.max_dropdown_rows
        );
        assert_eq!(parsed.theme.tag_color, config.theme.tag_color);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let parsed: Config = toml::from_str("[theme]\ntag_color = \"green\"\n").unwrap();

        assert_eq!(parsed.theme.tag_color, "green");
        assert_eq!(parsed.display.max_dropdown_rows, 8);
        assert!(parsed.display.show_help_line);
    }
}
