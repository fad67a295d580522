//! Question state machine: issuing, answering and adaptive step-down.

use std::collections::HashSet;

use rand::Rng;

use super::generation::{evaluate, generate};
use super::types::{AnswerOutcome, Difficulty, Question};
use crate::core::config::GameConfig;
use crate::core::constants::{CORRECT_ANSWER_REWARD, HARD_ROW_FRACTION, MEDIUM_ROW_FRACTION};
use crate::grid::GridPos;

/// Difficulty for a challenge tile by how far north it sits.
pub fn difficulty_for_row(row: usize, rows: usize) -> Difficulty {
    let position = row as f64 / rows.max(1) as f64;
    if position < HARD_ROW_FRACTION {
        Difficulty::Hard
    } else if position < MEDIUM_ROW_FRACTION {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

#[derive(Debug, Clone)]
pub struct QuestionEngine {
    pub current: Option<Question>,
    pub current_difficulty: Difficulty,
    pub wrong_answer_count: u32,
    pub answered_tiles: HashSet<GridPos>,
    /// Tile that triggered the pending question.
    pub origin: Option<GridPos>,
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionEngine {
    pub fn new() -> Self {
        Self {
            current: None,
            current_difficulty: Difficulty::Medium,
            wrong_answer_count: 0,
            answered_tiles: HashSet::new(),
            origin: None,
        }
    }

    /// Forget everything, including resolved tiles. Called on restart.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether a challenge tile at `tile` should open a question.
    pub fn should_trigger(&self, tile: GridPos) -> bool {
        !self.answered_tiles.contains(&tile)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Issue a fresh question for a challenge tile.
    pub fn ask<R: Rng>(
        &mut self,
        tile: GridPos,
        difficulty: Difficulty,
        config: &GameConfig,
        rng: &mut R,
    ) -> &Question {
        self.origin = Some(tile);
        self.current_difficulty = difficulty;
        self.wrong_answer_count = 0;
        self.current
            .insert(generate(difficulty, config.subject, config.grade, rng))
    }

    /// Replace the pending question at the current (possibly lowered) difficulty.
    pub fn reissue<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> Option<&Question> {
        self.origin?;
        let question = generate(self.current_difficulty, config.subject, config.grade, rng);
        Some(self.current.insert(question))
    }

    /// Check an answer against the pending question.
    ///
    /// A correct answer resolves the origin tile. A wrong answer lowers the
    /// difficulty for the replacement question, which the caller issues later
    /// through `reissue`.
    pub fn submit(&mut self, raw_input: &str) -> AnswerOutcome {
        let Some(question) = self.current.as_ref() else {
            return AnswerOutcome::NoQuestion;
        };

        if evaluate(question, raw_input) {
            if let Some(tile) = self.origin {
                self.answered_tiles.insert(tile);
            }
            AnswerOutcome::Correct {
                reward: CORRECT_ANSWER_REWARD,
            }
        } else {
            self.wrong_answer_count += 1;
            self.current_difficulty = self.current_difficulty.easier();
            AnswerOutcome::Wrong {
                next_difficulty: self.current_difficulty,
            }
        }
    }

    /// Close the question after a correct answer.
    pub fn close(&mut self) {
        self.current = None;
        self.origin = None;
    }
}
