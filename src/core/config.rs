//! Grade/subject configuration chosen before a run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::types::{GradeLevel, Subject};
use crate::utils::persistence::{self, PersistenceError};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown grade '{0}' (expected K or 1-5)")]
    UnknownGrade(String),
    #[error("unknown subject '{0}'")]
    UnknownSubject(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid seed '{0}'")]
    InvalidSeed(String),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Grade level and subject consumed by the question engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grade: GradeLevel,
    pub subject: Subject,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grade: GradeLevel::First,
            subject: Subject::MathMixed,
        }
    }
}

impl GameConfig {
    /// Load the saved config, falling back to defaults if missing or corrupt.
    pub fn load() -> Self {
        persistence::load_json_or_default(CONFIG_FILE)
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        persistence::save_json(CONFIG_FILE, self)
    }

    pub fn cycle_grade(&mut self, forward: bool) {
        self.grade = if forward {
            self.grade.higher()
        } else {
            self.grade.lower()
        };
    }

    pub fn cycle_subject(&mut self, forward: bool) {
        let all = Subject::ALL;
        let index = all.iter().position(|s| *s == self.subject).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        self.subject = all[next];
    }
}

pub fn parse_grade(raw: &str) -> Result<GradeLevel, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("k") {
        return Ok(GradeLevel::Kindergarten);
    }
    trimmed
        .parse::<u8>()
        .ok()
        .and_then(GradeLevel::from_number)
        .ok_or_else(|| ConfigError::UnknownGrade(raw.to_string()))
}

pub fn parse_subject(raw: &str) -> Result<Subject, ConfigError> {
    let key = raw.trim().to_ascii_lowercase();
    Subject::ALL
        .into_iter()
        .find(|s| s.key() == key)
        .ok_or_else(|| ConfigError::UnknownSubject(raw.to_string()))
}

/// Options taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub grade: Option<GradeLevel>,
    pub subject: Option<Subject>,
    pub seed: Option<u64>,
}

impl LaunchOptions {
    /// Parse `--grade`, `--subject` and `--seed` pairs.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--grade" | "-g" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--grade"))?;
                    options.grade = Some(parse_grade(value.as_ref())?);
                }
                "--subject" | "-s" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--subject"))?;
                    options.subject = Some(parse_subject(value.as_ref())?);
                }
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    let raw = value.as_ref();
                    options.seed = Some(
                        raw.parse()
                            .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))?,
                    );
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(options)
    }

    /// Overlay command-line choices on a saved config.
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(grade) = self.grade {
            config.grade = grade;
        }
        if let Some(subject) = self.subject {
            config.subject = subject;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("K"), Ok(GradeLevel::Kindergarten));
        assert_eq!(parse_grade("k"), Ok(GradeLevel::Kindergarten));
        assert_eq!(parse_grade(" 3 "), Ok(GradeLevel::Third));
        assert_eq!(
            parse_grade("6"),
            Err(ConfigError::UnknownGrade("6".to_string()))
        );
        assert!(parse_grade("first").is_err());
    }

    #[test]
    fn test_parse_subject() {
        assert_eq!(parse_subject("math-mixed"), Ok(Subject::MathMixed));
        assert_eq!(parse_subject("Music"), Ok(Subject::Music));
        assert!(parse_subject("history").is_err());
    }

    #[test]
    fn test_launch_options() {
        let opts = LaunchOptions::parse(["--grade", "2", "--subject", "division", "--seed", "42"])
            .unwrap();
        assert_eq!(opts.grade, Some(GradeLevel::Second));
        assert_eq!(opts.subject, Some(Subject::Division));
        assert_eq!(opts.seed, Some(42));

        let mut config = GameConfig::default();
        opts.apply(&mut config);
        assert_eq!(config.grade, GradeLevel::Second);
        assert_eq!(config.subject, Subject::Division);
    }

    #[test]
    fn test_launch_options_errors() {
        assert_eq!(
            LaunchOptions::parse(["--grade"]),
            Err(ConfigError::MissingValue("--grade"))
        );
        assert_eq!(
            LaunchOptions::parse(["--fly"]),
            Err(ConfigError::UnknownArgument("--fly".to_string()))
        );
        assert!(matches!(
            LaunchOptions::parse(["--seed", "abc"]),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_cycle_subject_wraps() {
        let mut config = GameConfig {
            subject: Subject::Music,
            ..GameConfig::default()
        };
        config.cycle_subject(true);
        assert_eq!(config.subject, Subject::Addition);
        config.cycle_subject(false);
        assert_eq!(config.subject, Subject::Music);
    }

    #[test]
    fn test_config_json_shape() {
        let config = GameConfig {
            grade: GradeLevel::Kindergarten,
            subject: Subject::Reading,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"grade":"K","subject":"reading"}"#);
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
