//! Settings loader for textproc.
//!
//! Loads and merges:
//! - System defaults: `<TEXTPROC_ROOT>/textproc.yaml` (cwd when unset)
//! - User overrides:  `<config home>/textproc/settings.yaml`
//!
//! Merge precedence is user over system. Command-line flags win over both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_SYSTEM_SETTINGS_FILE: &str = "textproc.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "textproc/settings.yaml";

/// Number of lines `head`/`tail` print when neither flags nor settings say otherwise.
pub const DEFAULT_FILTER_COUNT: isize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub pager: PagerSettings,
    #[serde(default)]
    pub copy: CopySettings,
    #[serde(default)]
    pub filter: FilterSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagerSettings {
    /// Rows per screen; 0 follows the terminal height.
    pub lines: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CopySettings {
    pub bufsize: Option<usize>,
    pub async_io: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSettings {
    pub count: Option<isize>,
    pub bytes: Option<bool>,
}

impl Settings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            pager: self.pager.merge(overlay.pager),
            copy: self.copy.merge(overlay.copy),
            filter: self.filter.merge(overlay.filter),
        }
    }
}

impl PagerSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            lines: overlay.lines.or(self.lines),
        }
    }
}

impl CopySettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            bufsize: overlay.bufsize.or(self.bufsize),
            async_io: overlay.async_io.or(self.async_io),
        }
    }
}

impl FilterSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            count: overlay.count.or(self.count),
            bytes: overlay.bytes.or(self.bytes),
        }
    }
}

/// Load merged settings (user overrides system).
///
/// `config_home` replaces the user config directory (CLI `--conf`).
#[must_use]
pub fn load_settings(config_home: Option<&Path>) -> Settings {
    let (system_path, user_path) = settings_paths(config_home);
    load_settings_from_paths(&system_path, &user_path)
}

/// System and user settings file locations.
#[must_use]
pub fn settings_paths(config_home: Option<&Path>) -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_FILE);
    let home = config_home.map_or_else(|| resolve_config_home(&root), |p| absolutize(&root, p.to_path_buf()));
    (system_path, home.join(DEFAULT_USER_SETTINGS_RELATIVE_PATH))
}

#[doc(hidden)]
#[must_use]
pub fn load_settings_from_paths(system: &Path, user: &Path) -> Settings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return Settings::default();
        }
    };
    match serde_yaml::from_str::<Option<Settings>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            Settings::default()
        }
    }
}

fn project_root() -> PathBuf {
    env_path("TEXTPROC_ROOT")
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_config_home(project_root: &Path) -> PathBuf {
    if let Some(path) = env_path("TEXTPROC_CONFIG_HOME") {
        return absolutize(project_root, path);
    }
    dirs::config_dir().unwrap_or_else(|| project_root.join(".config"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
