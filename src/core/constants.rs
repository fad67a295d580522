// Frame pacing
pub const FRAME_MS: u64 = 16; // ~60 FPS

// Movement
pub const MOVE_DELAY_MS: u64 = 200;
pub const MOVE_SPEED_PX: f64 = 5.0;

// Run
pub const STARTING_LIVES: u32 = 3;
pub const CORRECT_ANSWER_REWARD: u32 = 10;
pub const BONUS_REWARD: u32 = 10;

// Delayed actions
pub const QUESTION_CLOSE_DELAY_MS: u64 = 1000;
pub const NEXT_QUESTION_DELAY_MS: u64 = 1500;
pub const HAZARD_FEEDBACK_MS: u64 = 1500;
pub const VICTORY_RESTART_DELAY_MS: u64 = 3000;
pub const DEFEAT_RESTART_DELAY_MS: u64 = 2000;

// Grid defaults
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 12;
pub const BARRIER_ROWS: [usize; 3] = [5, 10, 15];
pub const FORCED_BARRIER_ROW: usize = 10;
pub const BARRIER_GAP_COLS: [usize; 3] = [2, 6, 9];
pub const BARRIER_HAZARD_CHANCE: f64 = 0.3;
pub const FIELD_HAZARD_CHANCE: f64 = 0.08;
pub const NORTH_CHALLENGE_CHANCE: f64 = 0.15;
pub const SOUTH_CHALLENGE_CHANCE: f64 = 0.08;
pub const BONUS_CHANCE: f64 = 0.04;
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

// Hex geometry (flat-top, column offset)
pub const HORIZONTAL_SPACING: f64 = 0.90;
pub const VERTICAL_SPACING: f64 = 1.18;
pub const COLUMN_OFFSET_MULTIPLIER: f64 = 0.5;
pub const DEFAULT_HEX_RADIUS: f64 = 30.0;
pub const DEFAULT_ORIGIN: (f64, f64) = (150.0, 50.0);

// Challenge difficulty bands by row fraction (north = harder)
pub const HARD_ROW_FRACTION: f64 = 0.33;
pub const MEDIUM_ROW_FRACTION: f64 = 0.66;
