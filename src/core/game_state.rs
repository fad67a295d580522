//! Score, lives and run status.

use super::config::GameConfig;
use super::constants::STARTING_LIVES;

/// Top-level run status.
///
/// ```text
/// Title -> Running <-> Paused
///          Running <-> Question
///          Running -> Victory | Defeat -> (delayed restart) -> Title
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Title,
    Running,
    Paused,
    /// Question modal open; movement input is ignored.
    Question,
    Victory,
    Defeat,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    /// Whether the gameplay loop should draw and tick.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Running | Self::Question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub status: GameStatus,
    pub score: u32,
    pub lives: u32,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            status: GameStatus::Title,
            score: 0,
            lives: STARTING_LIVES,
            config,
        }
    }

    /// Fresh counters for a new run; keeps the config.
    pub fn reset_counters(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
    }

    pub fn running(&self) -> bool {
        self.status != GameStatus::Title && !self.status.is_terminal()
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// Running <-> Paused. Returns true if the status changed.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.status = GameStatus::Paused,
            GameStatus::Paused => self.status = GameStatus::Running,
            _ => return false,
        }
        true
    }

    /// Lose a life. Returns true when none remain.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_title() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.status, GameStatus::Title);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(!state.running());
    }

    #[test]
    fn test_toggle_pause_only_from_running_or_paused() {
        let mut state = GameState::new(GameConfig::default());
        assert!(!state.toggle_pause());
        assert_eq!(state.status, GameStatus::Title);

        state.status = GameStatus::Running;
        assert!(state.toggle_pause());
        assert!(state.paused());
        assert!(state.running());
        assert!(state.toggle_pause());
        assert_eq!(state.status, GameStatus::Running);

        state.status = GameStatus::Question;
        assert!(!state.toggle_pause());
        state.status = GameStatus::Defeat;
        assert!(!state.toggle_pause());
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut state = GameState::new(GameConfig::default());
        assert!(!state.lose_life());
        assert!(!state.lose_life());
        assert!(state.lose_life());
        assert!(state.lose_life());
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_terminal_states() {
        assert!(GameStatus::Victory.is_terminal());
        assert!(GameStatus::Defeat.is_terminal());
        assert!(!GameStatus::Paused.is_terminal());
        assert!(GameStatus::Question.is_live());
        assert!(!GameStatus::Paused.is_live());
    }
}
