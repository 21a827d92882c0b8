use std::{fmt, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Report settings, read from a JSON file. Missing fields take their default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Lowest score rated as excellent.
    pub excellent: f64,
    /// Lowest score rated as good.
    pub good: f64,
    pub format: Format,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        if settings.good > settings.excellent {
            anyhow::bail!(
                "threshold for good ({}) must not exceed threshold for excellent ({})",
                settings.good,
                settings.excellent
            );
        }
        Ok(settings)
    }

    /// Map a score to a display bucket. A score of zero is always [`Rating::Failed`].
    #[must_use]
    pub fn rating(&self, score: f64) -> Rating {
        match score {
            s if s <= 0.0 => Rating::Failed,
            s if s >= self.excellent => Rating::Excellent,
            s if s >= self.good => Rating::Good,
            _ => Rating::Weak,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excellent: 8.0,
            good: 5.0,
            format: Format::Text,
        }
    }
}

#[derive(Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Weak,
    Failed,
}

impl Rating {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Rating::Excellent => "✅",
            Rating::Good => "👍",
            Rating::Weak => "⚠️",
            Rating::Failed => "❌",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Weak => "weak",
            Rating::Failed => "failed",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::above_excellent(10.7, 8.0, 5.0, Rating::Excellent)]
    #[case::equal_to_excellent(8.0, 8.0, 5.0, Rating::Excellent)]
    #[case::equal_to_good(5.0, 8.0, 5.0, Rating::Good)]
    #[case::below_good(3.3, 8.0, 5.0, Rating::Weak)]
    #[case::zero(0.0, 8.0, 5.0, Rating::Failed)]
    #[case::zero_with_zero_thresholds(0.0, 0.0, 0.0, Rating::Failed)]
    fn test_settings_rating(
        #[case] score: f64,
        #[case] excellent: f64,
        #[case] good: f64,
        #[case] expected: Rating,
    ) {
        let settings = Settings {
            excellent,
            good,
            ..Settings::default()
        };
        assert_eq!(settings.rating(score), expected);
    }

    #[test]
    fn test_settings_load_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"good": 4.5, "format": "json"}}"#).unwrap();

        assert_eq!(
            Settings::load(file.path()).unwrap(),
            Settings {
                excellent: 8.0,
                good: 4.5,
                format: Format::Json,
            }
        );
    }

    #[rstest]
    #[case::unknown_field(r#"{"great": 9.0}"#)]
    #[case::inverted_thresholds(r#"{"excellent": 2.0, "good": 3.0}"#)]
    #[case::no_json("excellent = 9.0")]
    fn test_settings_load_invalid(#[case] content: &str) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();

        assert!(Settings::load(file.path()).is_err());
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Failed.to_string(), "❌ failed");
    }
}
