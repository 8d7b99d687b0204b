use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "formforge",
    version,
    about = "Rebuild a Google Form as self-hosted HTML, CSS, and JS"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: formforge.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Write a JSONL trace of extraction strategy decisions to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a form into artifact files
    Convert {
        /// Prefill link of the form
        #[arg(long, conflicts_with = "input")]
        url: Option<String>,

        /// Path to a file holding the form page's markup
        #[arg(long)]
        input: Option<String>,

        /// Form title (default: derived from the source)
        #[arg(long)]
        title: Option<String>,

        /// Accent color for the generated stylesheet, as hex
        #[arg(long)]
        theme_color: Option<String>,

        /// Directory for index.html, styles.css, and script.js
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Extract a form and print its schema without generating artifacts
    Inspect {
        /// Prefill link of the form
        #[arg(long, conflicts_with = "input")]
        url: Option<String>,

        /// Path to a file holding the form page's markup
        #[arg(long)]
        input: Option<String>,

        /// Output format: json, yaml
        #[arg(long)]
        format: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `formforge.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default = "default_theme_color")]
    pub theme_color: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            theme_color: default_theme_color(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

// Serde default helpers
fn default_theme_color() -> String { "#673ab7".to_string() }
fn default_output_dir() -> String { "dist".to_string() }
fn default_format() -> String { "json".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("formforge.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
