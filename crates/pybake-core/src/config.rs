//! Bake configuration: the resolved answers a template is rendered with.
//!
//! A [`BakeConfig`] starts from [`BakeConfig::default`], can be loaded from a
//! JSON answers file, and accepts string overrides (the "extra context") keyed
//! by option name. Once rendering starts the configuration is never mutated.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{BakeError, Result};

/// Command-line interface scaffolded into the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CliChoice {
    #[serde(rename = "Click")]
    Click,
    #[serde(rename = "Argparse")]
    Argparse,
    #[serde(rename = "No command-line interface")]
    None,
}

impl CliChoice {
    pub const ALL: [CliChoice; 3] = [Self::Click, Self::Argparse, Self::None];

    /// The display name used in answers files and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "Click",
            Self::Argparse => "Argparse",
            Self::None => "No command-line interface",
        }
    }
}

impl fmt::Display for CliChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CliChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "click" => Ok(Self::Click),
            "argparse" => Ok(Self::Argparse),
            "none" | "no command-line interface" => Ok(Self::None),
            other => Err(format!(
                "unknown command-line interface '{other}' (supported: click, argparse, none)"
            )),
        }
    }
}

/// License the generated project is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum License {
    #[serde(rename = "MIT license")]
    Mit,
    #[serde(rename = "BSD license")]
    Bsd,
    #[serde(rename = "ISC license")]
    Isc,
    #[serde(rename = "Apache Software License 2.0")]
    Apache2,
    #[serde(rename = "GNU General Public License v3")]
    Gpl3,
    #[serde(rename = "Other/Proprietary License")]
    Proprietary,
}

impl License {
    pub const ALL: [License; 6] = [
        Self::Mit,
        Self::Bsd,
        Self::Isc,
        Self::Apache2,
        Self::Gpl3,
        Self::Proprietary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT license",
            Self::Bsd => "BSD license",
            Self::Isc => "ISC license",
            Self::Apache2 => "Apache Software License 2.0",
            Self::Gpl3 => "GNU General Public License v3",
            Self::Proprietary => "Other/Proprietary License",
        }
    }

    /// SPDX identifier written into `pyproject.toml`. `None` for proprietary code.
    pub fn spdx(&self) -> Option<&'static str> {
        match self {
            Self::Mit => Some("MIT"),
            Self::Bsd => Some("BSD-3-Clause"),
            Self::Isc => Some("ISC"),
            Self::Apache2 => Some("Apache-2.0"),
            Self::Gpl3 => Some("GPL-3.0-or-later"),
            Self::Proprietary => None,
        }
    }

    pub fn is_open_source(&self) -> bool {
        !matches!(self, Self::Proprietary)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Some(license) = Self::ALL
            .iter()
            .find(|l| l.as_str().to_ascii_lowercase() == wanted)
        {
            return Ok(*license);
        }
        match wanted.as_str() {
            "mit" => Ok(Self::Mit),
            "bsd" | "bsd-3-clause" => Ok(Self::Bsd),
            "isc" => Ok(Self::Isc),
            "apache" | "apache-2.0" | "apache2" => Ok(Self::Apache2),
            "gpl" | "gpl3" | "gplv3" | "gpl-3.0" => Ok(Self::Gpl3),
            "proprietary" | "other" => Ok(Self::Proprietary),
            _ => Err(format!("unknown license '{}'", s.trim())),
        }
    }
}

// Answers files accept the same spellings as `--set`.
fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for CliChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for License {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

/// Resolved configuration a project is baked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub project_name: String,
    /// Top-level directory name, `<namespace>.<package>`.
    pub project_slug: String,
    pub project_short_description: String,
    pub version: String,
    pub python_version: String,
    #[serde(with = "yes_no")]
    pub create_author_file: bool,
    #[serde(with = "yes_no")]
    pub use_pytest: bool,
    pub command_line_interface: CliChoice,
    pub license: License,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            full_name: "Veit Schiele".into(),
            email: "veit@cusy.io".into(),
            github_username: "veit".into(),
            project_name: "cusy example".into(),
            project_slug: "cusy.example".into(),
            project_short_description: "Python package template for namespaced projects.".into(),
            version: "0.1.0".into(),
            python_version: "3.10".into(),
            create_author_file: true,
            use_pytest: false,
            command_line_interface: CliChoice::Click,
            license: License::Mit,
        }
    }
}

impl BakeConfig {
    /// Option names accepted by [`BakeConfig::set`].
    pub const KEYS: [&'static str; 12] = [
        "full_name",
        "email",
        "github_username",
        "project_name",
        "project_slug",
        "project_short_description",
        "version",
        "python_version",
        "create_author_file",
        "use_pytest",
        "command_line_interface",
        "license",
    ];

    /// Load an answers file. Options it omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| BakeError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| BakeError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the configuration as a pretty-printed answers file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BakeError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Apply a set of string overrides on top of `self`.
    pub fn with_overrides<K, V, I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(self)
    }

    /// Set a single option from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: String| BakeError::InvalidOption {
            key: key.to_string(),
            reason,
        };
        match key {
            "full_name" => self.full_name = value.to_string(),
            "email" => self.email = value.to_string(),
            "github_username" => self.github_username = value.to_string(),
            "project_name" => self.project_name = value.to_string(),
            "project_slug" => self.project_slug = value.to_string(),
            "project_short_description" => self.project_short_description = value.to_string(),
            "version" => self.version = value.to_string(),
            "python_version" => self.python_version = value.to_string(),
            "create_author_file" => self.create_author_file = parse_flag(value).map_err(invalid)?,
            "use_pytest" => self.use_pytest = parse_flag(value).map_err(invalid)?,
            "command_line_interface" => {
                self.command_line_interface = value.parse().map_err(invalid)?
            }
            "license" => self.license = value.parse().map_err(invalid)?,
            _ => {
                return Err(invalid(format!(
                    "unknown option (supported: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Parse a `y`/`n` style flag.
pub fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        other => Err(format!("expected y/n, got '{other}'")),
    }
}

/// Answers files store flags as `"y"`/`"n"`; plain JSON booleans are accepted too.
mod yes_no {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "y" } else { "n" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Text(String),
        }

        match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => Ok(b),
            Flag::Text(s) => super::parse_flag(&s).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BakeConfig::default();
        assert_eq!(config.project_slug, "cusy.example");
        assert!(config.create_author_file);
        assert!(!config.use_pytest);
        assert_eq!(config.command_line_interface, CliChoice::Click);
        assert_eq!(config.license, License::Mit);
    }

    #[test]
    fn test_overrides() {
        let config = BakeConfig::default()
            .with_overrides([
                ("create_author_file", "n"),
                ("use_pytest", "y"),
                ("command_line_interface", "No command-line interface"),
                ("license", "ISC license"),
                ("full_name", "O'connor"),
            ])
            .unwrap();
        assert!(!config.create_author_file);
        assert!(config.use_pytest);
        assert_eq!(config.command_line_interface, CliChoice::None);
        assert_eq!(config.license, License::Isc);
        assert_eq!(config.full_name, "O'connor");
    }

    #[test]
    fn test_unknown_option() {
        let err = BakeConfig::default()
            .with_overrides([("colour", "blue")])
            .unwrap_err();
        assert!(matches!(err, BakeError::InvalidOption { ref key, .. } if key == "colour"));
    }

    #[test]
    fn test_bad_flag() {
        let err = BakeConfig::default()
            .with_overrides([("use_pytest", "maybe")])
            .unwrap_err();
        assert!(err.to_string().contains("use_pytest"));
    }

    #[test]
    fn test_cli_choice_is_a_closed_set() {
        assert_eq!("click".parse::<CliChoice>().unwrap(), CliChoice::Click);
        assert_eq!("ARGPARSE".parse::<CliChoice>().unwrap(), CliChoice::Argparse);
        assert_eq!("none".parse::<CliChoice>().unwrap(), CliChoice::None);
        // Strings that merely contain "no" are not a "no CLI" choice.
        assert!("notebook".parse::<CliChoice>().is_err());
        assert!("nothing".parse::<CliChoice>().is_err());
    }

    #[test]
    fn test_license_parsing() {
        for license in License::ALL {
            assert_eq!(license.as_str().parse::<License>().unwrap(), license);
        }
        assert_eq!("apache-2.0".parse::<License>().unwrap(), License::Apache2);
        assert!("WTFPL".parse::<License>().is_err());
        assert!(!License::Proprietary.is_open_source());
        assert!(License::Proprietary.spdx().is_none());
    }

    #[test]
    fn test_answers_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        let config = BakeConfig {
            use_pytest: true,
            license: License::Gpl3,
            ..BakeConfig::default()
        };
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""use_pytest": "y""#));
        assert!(raw.contains("GNU General Public License v3"));

        assert_eq!(BakeConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(
            &path,
            r#"{ "full_name": "Ada", "create_author_file": false, "command_line_interface": "None" }"#,
        )
        .unwrap();

        let config = BakeConfig::load(&path).unwrap();
        assert_eq!(config.full_name, "Ada");
        assert!(!config.create_author_file);
        assert_eq!(config.command_line_interface, CliChoice::None);
        assert_eq!(config.project_slug, "cusy.example");
    }

    #[test]
    fn test_answers_file_accepts_override_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(
            &path,
            r#"{ "license": "mit", "command_line_interface": "argparse" }"#,
        )
        .unwrap();
        let loaded = BakeConfig::load(&path).unwrap();

        let overridden = BakeConfig::default()
            .with_overrides([("license", "mit"), ("command_line_interface", "argparse")])
            .unwrap();
        assert_eq!(loaded, overridden);
        assert_eq!(loaded.license, License::Mit);
        assert_eq!(loaded.command_line_interface, CliChoice::Argparse);
    }

    #[test]
    fn test_answers_file_rejects_unknown_license() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{ "license": "WTFPL" }"#).unwrap();
        let err = BakeConfig::load(&path).unwrap_err();
        assert!(matches!(err, BakeError::ConfigParse { .. }));
        assert!(std::error::Error::source(&err)
            .unwrap()
            .to_string()
            .contains("unknown license 'WTFPL'"));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let err = BakeConfig::default()
            .save(Path::new("/nonexistent/pybake/answers.json"))
            .unwrap_err();
        assert!(matches!(err, BakeError::Io(_)));
    }

    #[test]
    fn test_load_nonexistent() {
        let result = BakeConfig::load(Path::new("/tmp/nonexistent_pybake_answers.json"));
        assert!(matches!(result, Err(BakeError::ConfigNotFound { .. })));
    }
}
