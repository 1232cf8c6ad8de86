//! # Configuration Module
//!
//! Read-only settings consulted when composing package declarations and
//! locating source roots and templates.
//!
//! ## Sources
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults (`/model`, `/repository`, `/service`, `/controller`,
//!    source root `src/main/java`)
//! 2. `plaster.toml` (explicit `--config` path, or auto-detected in the
//!    project directory)
//! 3. Environment variables `PLASTER_APP_PATH`, `PLASTER_SUB_DIR_PATH` and
//!    `PLASTER_TEMPLATE_DIR`
//!
//! ## Example `plaster.toml`
//!
//! ```toml
//! app_path = "/com/example/app"
//! sub_dir_path = "/billing"
//!
//! [packages]
//! model = "/domain"
//!
//! [known_classes]
//! Money = "com.example.shared.Money"
//! ```
//!
//! The generator only ever reads settings through the [`Settings`] trait, so
//! tests can substitute a plain map.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "plaster.toml";

/// A single setting key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setting {
    /// Base application package as a path, e.g. `/com/example/app`
    AppPath,
    /// Package of model classes relative to the application path
    RelModelPackage,
    /// Package of repository interfaces relative to the application path
    RelRepositoryPackage,
    /// Package of service classes relative to the application path
    RelServicePackage,
    /// Package of controller classes relative to the application path
    RelControllerPackage,
    /// Subdirectory appended below every layer package
    SubDirPath,
    /// Directory holding Java sources, relative to the project directory
    SourceRoot,
    /// Optional directory with template overrides
    TemplateDir,
}

impl Setting {
    pub const ALL: [Setting; 8] = [
        Setting::AppPath,
        Setting::RelModelPackage,
        Setting::RelRepositoryPackage,
        Setting::RelServicePackage,
        Setting::RelControllerPackage,
        Setting::SubDirPath,
        Setting::SourceRoot,
        Setting::TemplateDir,
    ];

    /// Key as written in `plaster.toml`.
    pub fn key(self) -> &'static str {
        match self {
            Setting::AppPath => "app_path",
            Setting::RelModelPackage => "packages.model",
            Setting::RelRepositoryPackage => "packages.repository",
            Setting::RelServicePackage => "packages.service",
            Setting::RelControllerPackage => "packages.controller",
            Setting::SubDirPath => "sub_dir_path",
            Setting::SourceRoot => "source_root",
            Setting::TemplateDir => "template_dir",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only settings lookup.
///
/// A missing value is not an error; callers treat it as an empty segment.
pub trait Settings {
    fn get(&self, setting: Setting) -> Option<String>;

    /// Value of `setting`, or an empty string when unset.
    fn get_or_empty(&self, setting: Setting) -> String {
        self.get(setting).unwrap_or_default()
    }
}

impl Settings for HashMap<Setting, String> {
    fn get(&self, setting: Setting) -> Option<String> {
        HashMap::get(self, &setting).cloned()
    }
}

impl<S: Settings + ?Sized> Settings for &S {
    fn get(&self, setting: Setting) -> Option<String> {
        (**self).get(setting)
    }
}

/// Relative package paths per artifact kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackagesConfig {
    pub model: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            model: "/model".to_string(),
            repository: "/repository".to_string(),
            service: "/service".to_string(),
            controller: "/controller".to_string(),
        }
    }
}

/// Settings loaded from `plaster.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlasterConfig {
    /// Base application package as a path
    pub app_path: String,
    /// Subdirectory appended below every layer package
    pub sub_dir_path: String,
    /// Directory holding Java sources, relative to the project directory
    pub source_root: String,
    /// Directory with template overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Relative package per artifact kind
    pub packages: PackagesConfig,
    /// Simple class name to fully qualified name, consulted before searching sources
    pub known_classes: BTreeMap<String, String>,
}

impl Default for PlasterConfig {
    fn default() -> Self {
        Self {
            app_path: String::new(),
            sub_dir_path: String::new(),
            source_root: "src/main/java".to_string(),
            template_dir: None,
            packages: PackagesConfig::default(),
            known_classes: BTreeMap::new(),
        }
    }
}

impl PlasterConfig {
    /// Parse settings from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: PlasterConfig =
            toml::from_str(contents).context("Failed to parse plaster settings")?;
        Ok(config)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let config: PlasterConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(config)
    }

    /// Resolve, load and apply environment overrides.
    ///
    /// Uses `explicit_path` when given (it must exist), otherwise
    /// `plaster.toml` in `project_dir` if present, otherwise defaults.
    pub fn discover(explicit_path: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let mut config = match resolve_config_path(explicit_path, project_dir)? {
            Some(path) => Self::load(&path)?,
            None => {
                tracing::debug!(dir = %project_dir.display(), "no settings file, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `PLASTER_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PLASTER_APP_PATH") {
            self.app_path = val;
        }
        if let Some(val) = lookup("PLASTER_SUB_DIR_PATH") {
            self.sub_dir_path = val;
        }
        if let Some(val) = lookup("PLASTER_TEMPLATE_DIR") {
            self.template_dir = Some(PathBuf::from(val));
        }
    }
}

impl Settings for PlasterConfig {
    fn get(&self, setting: Setting) -> Option<String> {
        let value = match setting {
            Setting::AppPath => self.app_path.clone(),
            Setting::RelModelPackage => self.packages.model.clone(),
            Setting::RelRepositoryPackage => self.packages.repository.clone(),
            Setting::RelServicePackage => self.packages.service.clone(),
            Setting::RelControllerPackage => self.packages.controller.clone(),
            Setting::SubDirPath => self.sub_dir_path.clone(),
            Setting::SourceRoot => self.source_root.clone(),
            Setting::TemplateDir => {
                return self.template_dir.as_ref().map(|p| p.display().to_string())
            }
        };
        Some(value)
    }
}

/// Resolve the settings file path.
///
/// Priority:
/// 1. Explicitly provided path (must exist)
/// 2. `plaster.toml` in the project directory
/// 3. None
pub fn resolve_config_path(
    explicit_path: Option<&Path>,
    project_dir: &Path,
) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }
    let candidate = project_dir.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}
