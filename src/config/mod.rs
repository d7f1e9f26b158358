//! Configuration management.
//!
//! Every setting has a default, so a configuration file is optional.
//!
//! ```toml
//! [document]
//! title = "Publications"
//!
//! [links]
//! pdf_dir = "./pdf"
//! doi_resolver = "https://doi.org/"
//!
//! [files]
//! input_extension = "bib"
//! output_extension = "html"
//! ```
//!
//! Environment variables prefixed with `BIB2HTML_` override file values,
//! using `__` between section and key (`BIB2HTML_LINKS__PDF_DIR=./papers`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bib2html.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document level settings
    #[serde(default)]
    pub document: DocumentConfig,

    /// Link generation settings
    #[serde(default)]
    pub links: LinkConfig,

    /// File naming settings
    #[serde(default)]
    pub files: FileConfig,
}

/// Document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Content of the `<title>` element
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Oseano".to_string()
}

/// Link settings for the `[pdf | link]` bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Directory holding PDFs, laid out as `<pdf_dir>/<year>/<file>`
    #[serde(default = "default_pdf_dir")]
    pub pdf_dir: String,

    /// Prefix turning a DOI into a URL
    #[serde(default = "default_doi_resolver")]
    pub doi_resolver: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            pdf_dir: default_pdf_dir(),
            doi_resolver: default_doi_resolver(),
        }
    }
}

fn default_pdf_dir() -> String {
    "./pdf".to_string()
}

fn default_doi_resolver() -> String {
    "http://dx.doi.org/".to_string()
}

/// File extension settings, without the leading dot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_extension: default_input_extension(),
            output_extension: default_output_extension(),
        }
    }
}

fn default_input_extension() -> String {
    "bib".to_string()
}

fn default_output_extension() -> String {
    "html".to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(env_source())
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment variables and defaults only
pub fn get_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(env_source())
        .build()?
        .try_deserialize()
}

/// `BIB2HTML_<SECTION>__<KEY>` environment overrides
fn env_source() -> config::Environment {
    config::Environment::with_prefix("BIB2HTML")
        .prefix_separator("_")
        .separator("__")
}

/// Find a configuration file in the default locations
///
/// Checks `./bib2html.toml`, then `<config dir>/bib2html/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("bib2html").join("config.toml"))
        .filter(|path| path.is_file())
}

impl Config {
    /// Render as TOML, e.g. for writing a starter configuration file
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
