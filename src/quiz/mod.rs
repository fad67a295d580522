//! Question engine: arithmetic and trivia questions gated by grade and subject.

pub mod banks;
pub mod engine;
pub mod generation;
pub mod types;

pub use engine::{difficulty_for_row, QuestionEngine};
pub use generation::{evaluate, generate};
pub use types::{
    Answer, AnswerKind, AnswerOutcome, Arithmetic, Difficulty, GradeLevel, Operation, Question,
    Subject,
};
