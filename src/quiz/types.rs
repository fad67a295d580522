//! Question data structures and the grade/subject configuration enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Question difficulty. Wrong answers step this down one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// One level easier, flooring at `Easy`.
    pub fn easier(self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            Self::Medium | Self::Easy => Self::Easy,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Multiplier applied to a grade's operand cap.
    pub(crate) fn magnitude_scale(&self) -> f64 {
        match self {
            Self::Easy => 0.5,
            Self::Medium => 1.0,
            Self::Hard => 1.5,
        }
    }
}

/// School grade, kindergarten through fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "K")]
    Kindergarten,
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 6] = [
        GradeLevel::Kindergarten,
        GradeLevel::First,
        GradeLevel::Second,
        GradeLevel::Third,
        GradeLevel::Fourth,
        GradeLevel::Fifth,
    ];

    /// 0 for kindergarten, 1..=5 otherwise.
    pub fn number(&self) -> u8 {
        match self {
            Self::Kindergarten => 0,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kindergarten => "K",
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Fifth => "5",
        }
    }

    pub fn lower(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(self)
    }

    pub fn higher(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    /// Largest addend/minuend for this grade at medium difficulty.
    pub(crate) fn operand_cap(&self) -> i64 {
        match self {
            Self::Kindergarten => 5,
            Self::First => 10,
            Self::Second => 20,
            Self::Third => 50,
            Self::Fourth => 100,
            Self::Fifth => 200,
        }
    }

    /// Largest multiplication/division factor at medium difficulty.
    pub(crate) fn factor_cap(&self) -> i64 {
        match self {
            Self::Kindergarten => 3,
            Self::First | Self::Second => 5,
            Self::Third => 10,
            Self::Fourth | Self::Fifth => 12,
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kindergarten => write!(f, "Kindergarten"),
            other => write!(f, "Grade {}", other.number()),
        }
    }
}

/// Question family chosen before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    MathMixed,
    Reading,
    Science,
    Vocabulary,
    Music,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::Addition,
        Subject::Subtraction,
        Subject::Multiplication,
        Subject::Division,
        Subject::MathMixed,
        Subject::Reading,
        Subject::Science,
        Subject::Vocabulary,
        Subject::Music,
    ];

    /// Command-line and config-file spelling.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::MathMixed => "math-mixed",
            Self::Reading => "reading",
            Self::Science => "science",
            Self::Vocabulary => "vocabulary",
            Self::Music => "music",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
            Self::MathMixed => "Mixed Math",
            Self::Reading => "Reading",
            Self::Science => "Science",
            Self::Vocabulary => "Vocabulary",
            Self::Music => "Music",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Addition
                | Self::Subtraction
                | Self::Multiplication
                | Self::Division
                | Self::MathMixed
        )
    }
}

/// Arithmetic operation used by math subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

/// Expected answer of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Numeric(i64),
    Text(String),
}

/// How the UI should prompt for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Numeric,
    Text,
}

/// Operands of an arithmetic question, kept for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub op: Operation,
    pub left: i64,
    pub right: i64,
}

/// A single question issued for a challenge tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: Answer,
    pub difficulty: Difficulty,
    pub subject: Subject,
    /// Present for arithmetic questions only.
    pub arithmetic: Option<Arithmetic>,
}

impl Question {
    pub fn answer_kind(&self) -> AnswerKind {
        match self.answer {
            Answer::Numeric(_) => AnswerKind::Numeric,
            Answer::Text(_) => AnswerKind::Text,
        }
    }
}

/// Result of submitting an answer to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct; the originating tile is now resolved.
    Correct { reward: u32 },
    /// Wrong; a replacement question comes at `next_difficulty`.
    Wrong { next_difficulty: Difficulty },
    /// No question was pending.
    NoQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easier_steps_down_and_floors() {
        assert_eq!(Difficulty::Hard.easier(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_all_is_ordered_by_magnitude() {
        assert_eq!(Difficulty::ALL[0], Difficulty::Easy);
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].magnitude_scale() < pair[1].magnitude_scale());
            assert_eq!(pair[1].easier(), pair[0]);
        }
    }

    #[test]
    fn test_grade_neighbors_clamp() {
        assert_eq!(GradeLevel::Kindergarten.lower(), GradeLevel::Kindergarten);
        assert_eq!(GradeLevel::Fifth.higher(), GradeLevel::Fifth);
        assert_eq!(GradeLevel::Third.lower(), GradeLevel::Second);
        assert_eq!(GradeLevel::Third.higher(), GradeLevel::Fourth);
    }

    #[test]
    fn test_grade_numbers_roundtrip() {
        for grade in GradeLevel::ALL {
            assert_eq!(GradeLevel::from_number(grade.number()), Some(grade));
        }
        assert_eq!(GradeLevel::from_number(6), None);
    }

    #[test]
    fn test_subject_serde_uses_kebab_keys() {
        let json = serde_json::to_string(&Subject::MathMixed).unwrap();
        assert_eq!(json, "\"math-mixed\"");
        let grade = serde_json::to_string(&GradeLevel::Kindergarten).unwrap();
        assert_eq!(grade, "\"K\"");
    }

    #[test]
    fn test_only_math_subjects_are_arithmetic() {
        let math: Vec<_> = Subject::ALL.iter().filter(|s| s.is_arithmetic()).collect();
        assert_eq!(math.len(), 5);
        assert!(!Subject::Music.is_arithmetic());
    }
}
