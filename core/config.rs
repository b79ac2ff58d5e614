use crate::classify::{ClassificationTables, NamePatternRule};
use crate::defaults;
use crate::error::{AppError, Result};
use crate::walk::ExclusionSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = "treemark.toml";
pub const DEFAULT_OUTPUT_FILENAME: &str = "PROJECT_TREE.md";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub excludes: ExcludesConfig,
    #[serde(default)]
    pub markers: MarkersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub use_default_excludes: bool,
    #[serde(default = "default_true")]
    pub use_default_markers: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ExcludesConfig {
    #[serde(default)]
    pub entries: Vec<String>,
}

/// User additions to the classification tables. `directory` and `default`
/// override the builtin markers when set; patterns and extensions merge
/// with the builtin tables unless `general.use_default_markers` is off.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MarkersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub name_patterns: Vec<NamePatternRule>,
    #[serde(default)]
    pub extensions: IndexMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

fn default_true() -> bool {
    true
}
fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            use_default_excludes: default_true(),
            use_default_markers: default_true(),
        }
    }
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: default_output_filename(),
        }
    }
}

impl Config {
    pub fn determine_project_root(cli_project_root: Option<&PathBuf>) -> Result<PathBuf> {
        let path_str_opt = cli_project_root
            .map(|p| p.to_string_lossy().to_string())
            .or_else(|| env::var("PROJECT_ROOT").ok().filter(|s| !s.is_empty()));

        let path_to_resolve = match path_str_opt {
            Some(p_str) => PathBuf::from(shellexpand::tilde(&p_str).as_ref()),
            None => env::current_dir().map_err(AppError::Io)?,
        };

        path_to_resolve.canonicalize().map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to canonicalize project root '{}': {}",
                    path_to_resolve.display(),
                    e
                ),
            ))
        })
    }

    pub fn resolve_config_path(
        project_root: &Path,
        cli_config_file: Option<&String>,
        cli_disable_config: bool,
    ) -> Result<Option<PathBuf>> {
        if cli_disable_config {
            log::debug!("Config file loading disabled via CLI flag.");
            return Ok(None);
        }

        match cli_config_file {
            Some(p_str) => {
                let expanded = shellexpand::tilde(p_str);
                let mut path = PathBuf::from(expanded.as_ref());
                if path.is_relative() {
                    path = project_root.join(path);
                }
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Specified config file not found at path: {}",
                        path.display()
                    )));
                }
                log::debug!("Using specified config file path: {}", path.display());
                Ok(Some(path))
            }
            None => {
                let default_path = project_root.join(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    log::debug!("Using default config file path: {}", default_path.display());
                    Ok(Some(default_path))
                } else {
                    log::debug!(
                        "No config file specified and default not found at: {}",
                        default_path.display()
                    );
                    Ok(None)
                }
            }
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::info!("Loading configuration from: {}", config_path.display());
        let toml_content = fs::read_to_string(config_path).map_err(|e| AppError::FileRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        toml::from_str::<Config>(&toml_content).map_err(|e| {
            AppError::TomlParse(format!(
                "Error parsing config file '{}': {}. Check TOML syntax and structure.",
                config_path.display(),
                e
            ))
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(AppError::TomlSerialize)
    }
}

/// Builds the effective exclusion set: builtin entries (unless disabled),
/// then user entries, then the output file name so a generated document is
/// never listed inside itself.
pub fn resolve_excludes(config: &Config) -> ExclusionSet {
    let mut names: Vec<String> = Vec::new();
    if config.general.use_default_excludes {
        names.extend(defaults::get_builtin_excludes().entries.iter().cloned());
    }
    names.extend(config.excludes.entries.iter().cloned());
    if let Some(file_name) = Path::new(&config.output.filename).file_name() {
        names.push(file_name.to_string_lossy().into_owned());
    }
    let set = ExclusionSet::new(names);
    log::debug!("Effective exclusion set has {} entries", set.len());
    set
}

/// Builds the effective classification tables. User name patterns come
/// first so they win over builtin ones; user extensions override builtin
/// values per key. Patterns and extension keys are lowercased to match
/// the lowercased entry names they are compared against.
pub fn resolve_markers(config: &Config) -> ClassificationTables {
    let builtin = defaults::get_builtin_markers();

    let mut name_patterns: Vec<NamePatternRule> = config
        .markers
        .name_patterns
        .iter()
        .map(|rule| NamePatternRule {
            pattern: rule.pattern.to_lowercase(),
            marker: rule.marker.clone(),
        })
        .collect();
    let mut extensions: IndexMap<String, String> = IndexMap::new();
    if config.general.use_default_markers {
        name_patterns.extend(builtin.name_patterns.iter().cloned());
        extensions = builtin.extensions.clone();
    }
    for (ext, marker) in &config.markers.extensions {
        extensions.insert(ext.to_lowercase(), marker.clone());
    }

    let directory = config
        .markers
        .directory
        .clone()
        .unwrap_or_else(|| builtin.directory.clone());
    let default = config
        .markers
        .default
        .clone()
        .unwrap_or_else(|| builtin.default.clone());

    ClassificationTables {
        directory,
        default,
        name_patterns,
        extensions,
    }
}
