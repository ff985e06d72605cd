//! Build configuration: what to compile, what to call it, and how to reach
//! the Windows compatibility shell.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::platform::Os;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "litebuild.yml";

/// MSYS2 UCRT64 launcher used on Windows unless overridden.
pub const DEFAULT_COMPATIBILITY_SHELL: &str = r"F:\msys2\ucrt64.exe";

/// Settings for one run, fixed before the pipeline starts.
///
/// Unknown keys are rejected so a misspelt field cannot silently fall back
/// to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// C source file to compile.
    #[serde(default = "default_source_file")]
    pub source_file: PathBuf,
    /// Executable name without the platform suffix.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// Shell used to run commands on Windows. `None` disables wrapping.
    #[serde(default = "default_compatibility_shell")]
    pub compatibility_shell_path: Option<PathBuf>,
    /// Whether Windows commands run inside the compatibility shell.
    #[serde(default = "default_true")]
    pub use_compatibility_shell: bool,
    /// C compiler program.
    #[serde(default = "default_compiler")]
    pub compiler: String,
    /// Flags appended after the output name when compiling.
    #[serde(default = "default_link_flags")]
    pub link_flags: Vec<String>,
}

fn default_source_file() -> PathBuf {
    PathBuf::from("program.c")
}

fn default_output_name() -> String {
    "program".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_compatibility_shell() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_COMPATIBILITY_SHELL))
}

fn default_true() -> bool {
    true
}

fn default_compiler() -> String {
    "gcc".to_string()
}

fn default_link_flags() -> Vec<String> {
    vec!["-lsqlite3".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_file: default_source_file(),
            output_name: default_output_name(),
            compatibility_shell_path: default_compatibility_shell(),
            use_compatibility_shell: default_true(),
            compiler: default_compiler(),
            link_flags: default_link_flags(),
        }
    }
}

impl BuildConfig {
    /// Loads the configuration for this process.
    ///
    /// An explicit path must exist. Without one, `litebuild.yml` in the
    /// working directory is used if present, otherwise the defaults.
    /// `LITEBUILD_*` environment variables are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting values are unusable.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Error> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a YAML configuration file. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies `LITEBUILD_*` overrides looked up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `LITEBUILD_USE_SHELL` is not a boolean.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("LITEBUILD_SOURCE") {
            self.source_file = PathBuf::from(source);
        }
        if let Some(output) = lookup("LITEBUILD_OUTPUT") {
            self.output_name = output;
        }
        if let Some(shell) = lookup("LITEBUILD_SHELL") {
            self.compatibility_shell_path =
                if shell.is_empty() { None } else { Some(PathBuf::from(shell)) };
        }
        if let Some(flag) = lookup("LITEBUILD_USE_SHELL") {
            self.use_compatibility_shell = parse_bool(&flag).ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "LITEBUILD_USE_SHELL must be true or false, got {flag:?}"
                ))
            })?;
        }
        if let Some(compiler) = lookup("LITEBUILD_COMPILER") {
            self.compiler = compiler;
        }
        Ok(())
    }

    /// Rejects empty names that would produce a malformed command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.source_file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("source_file is empty".into()));
        }
        if self.output_name.is_empty() {
            return Err(Error::InvalidConfig("output_name is empty".into()));
        }
        if self.compiler.is_empty() {
            return Err(Error::InvalidConfig("compiler is empty".into()));
        }
        Ok(())
    }

    /// Executable file name for `os`, with the platform suffix appended once.
    #[must_use]
    pub fn output_file(&self, os: &Os) -> String {
        let suffix = os.exe_suffix();
        if suffix.is_empty() || self.output_name.to_ascii_lowercase().ends_with(suffix) {
            self.output_name.clone()
        } else {
            format!("{}{suffix}", self.output_name)
        }
    }

    /// The compatibility shell to wrap commands in on `os`, if any.
    #[must_use]
    pub fn compatibility_shell(&self, os: &Os) -> Option<&Path> {
        match os {
            Os::Windows if self.use_compatibility_shell => {
                self.compatibility_shell_path.as_deref()
            }
            _ => None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
