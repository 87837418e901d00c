//! Layered configuration for exifcase.
//!
//! Sources are merged lowest to highest priority:
//!
//! 1. built-in defaults,
//! 2. `config.{toml,yaml,json}` in the platform configuration directory,
//! 3. an explicitly requested file (format chosen by its extension),
//! 4. `EXIFCASE_` environment variables, nested with `__`
//!    (`EXIFCASE_OUTPUT__INDENT=2` sets `output.indent`).
//!
//! Command-line flags are applied by the binary on top of the loaded value.

pub mod error;

use std::path::Path;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

use crate::error::{ErrorKind, Result};

pub const APP_NAME: &str = "exifcase";
pub const ENV_PREFIX: &str = "EXIFCASE_";
const CONFIG_FILES: [&str; 3] = ["config.toml", "config.yaml", "config.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub graph: GraphConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per JSON indentation level; `0` prints a single line.
    pub indent: usize,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Namespace bound to the `kb` prefix in the JSON-LD context.
    pub kb: String,
    /// Emit and link the content data facet.
    pub content_facet: bool,
}
impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            kb: "http://example.org/kb/".to_string(),
            content_facet: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// A `tracing` filter directive, such as `warn` or `exifcase_extract=debug`.
    pub level: String,
    pub format: LogFormat,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load and validate the configuration from every source.
    #[instrument(level = "debug", skip_all, fields(explicit = ?explicit))]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::from_figment(figment(explicit)?)
    }

    /// Extract and validate a configuration from an assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let kb = &self.graph.kb;
        if kb.is_empty() {
            exn::bail!(ErrorKind::Invalid("graph.kb must not be empty".to_string()));
        }
        if !kb.ends_with('/') && !kb.ends_with('#') {
            exn::bail!(ErrorKind::Invalid(format!("graph.kb must end with '/' or '#', found: {kb}")));
        }
        EnvFilter::try_new(&self.log.level)
            .or_raise(|| ErrorKind::Invalid(format!("log.level is not a valid filter: {}", self.log.level)))?;
        Ok(())
    }
}

/// Assemble every configuration source without extracting it.
pub fn figment(explicit: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(dirs) = ProjectDirs::from("", "", APP_NAME) {
        for name in CONFIG_FILES {
            let path = dirs.config_dir().join(name);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Found user configuration file");
                figment = merge_file(figment, &path)?;
            }
        }
    }
    if let Some(path) = explicit {
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        figment = merge_file(figment, path)?;
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::Invalid(format!(
            "unsupported configuration format: {}",
            path.display()
        ))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    /// Point the platform configuration directory into the jail.
    fn isolate(jail: &mut Jail) {
        let home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", home.display());
        let dir = jail.directory().to_path_buf();
        jail.set_env("HOME", dir.display());
    }

    #[test]
    fn defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config = Config::load(None).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.output.indent, 4);
            assert_eq!(config.graph.kb, "http://example.org/kb/");
            assert!(!config.graph.content_facet);
            assert_eq!(config.log.level, "warn");
            assert_eq!(config.log.format, LogFormat::Pretty);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "exifcase.toml",
                r#"
                [output]
                indent = 2

                [graph]
                content_facet = true
                "#,
            )?;
            let config = Config::load(Some(Path::new("exifcase.toml"))).unwrap();
            assert_eq!(config.output.indent, 2);
            assert!(config.graph.content_facet);
            assert_eq!(config.graph.kb, "http://example.org/kb/");
            Ok(())
        });
    }

    #[test]
    fn yaml_and_json_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("exifcase.yaml", "log:\n  format: json\n")?;
            jail.create_file("exifcase.json", r#"{"graph": {"kb": "urn:example#"}}"#)?;
            let yaml = Config::load(Some(Path::new("exifcase.yaml"))).unwrap();
            assert_eq!(yaml.log.format, LogFormat::Json);
            let json = Config::load(Some(Path::new("exifcase.json"))).unwrap();
            assert_eq!(json.graph.kb, "urn:example#");
            Ok(())
        });
    }

    #[test]
    fn environment_beats_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("exifcase.toml", "[output]\nindent = 2\n")?;
            jail.set_env("EXIFCASE_OUTPUT__INDENT", 0);
            jail.set_env("EXIFCASE_LOG__LEVEL", "debug");
            let config = Config::load(Some(Path::new("exifcase.toml"))).unwrap();
            assert_eq!(config.output.indent, 0);
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn user_configuration_directory() {
        Jail::expect_with(|jail| {
            isolate(jail);
            std::fs::create_dir_all(jail.directory().join("xdg/exifcase")).unwrap();
            jail.create_file("xdg/exifcase/config.toml", "[output]\nindent = 8\n")?;
            jail.create_file("explicit.toml", "[graph]\ncontent_facet = true\n")?;
            let config = Config::load(Some(Path::new("explicit.toml"))).unwrap();
            assert_eq!(config.output.indent, 8);
            assert!(config.graph.content_facet);
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let err = Config::load(Some(Path::new("missing.toml"))).unwrap_err();
            assert_eq!(*err, ErrorKind::NotFound("missing.toml".into()));
            Ok(())
        });
    }

    #[test]
    fn unsupported_extension() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("exifcase.ini", "indent=2")?;
            let err = Config::load(Some(Path::new("exifcase.ini"))).unwrap_err();
            assert!(matches!(&*err, ErrorKind::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn wrong_shape_fails_to_load() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("exifcase.toml", "[output]\nindent = \"wide\"\n")?;
            let err = Config::load(Some(Path::new("exifcase.toml"))).unwrap_err();
            assert_eq!(*err, ErrorKind::Load);
            Ok(())
        });
    }

    #[rstest]
    #[case("http://example.org/kb/", "warn", true)]
    #[case("urn:case:kb#", "exifcase_case=trace,warn", true)]
    #[case("", "warn", false)]
    #[case("http://example.org/kb", "warn", false)]
    #[case("http://example.org/kb/", "exifcase=loud", false)]
    fn test_validate(#[case] kb: &str, #[case] level: &str, #[case] valid: bool) {
        let mut config = Config::default();
        config.graph.kb = kb.to_string();
        config.log.level = level.to_string();
        assert_eq!(config.validate().is_ok(), valid);
    }
}
