//! Optional glyph sprites for the actor and goal.
//!
//! A sprite is the first non-blank line of `~/.hexquest/sprites/<name>.txt`.
//! Missing or empty files fall back to procedural shapes.

use hexquest::utils::persistence::read_asset;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    pub actor: Option<String>,
    pub goal: Option<String>,
}

impl Sprites {
    pub fn load() -> Self {
        let sprites = Self {
            actor: load_glyph("sprites/actor.txt"),
            goal: load_glyph("sprites/goal.txt"),
        };
        if sprites.actor.is_none() || sprites.goal.is_none() {
            log::info!("sprite assets missing, drawing procedural shapes");
        }
        sprites
    }
}

fn load_glyph(relative: &str) -> Option<String> {
    read_asset(relative).and_then(|text| first_glyph_line(&text))
}

fn first_glyph_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(4).collect())
}
