//! Hex board drawn on a braille canvas.
//!
//! The session works in a virtual pixel space of one unit per braille dot
//! (2 x 4 dots per terminal cell), y growing downward. The canvas y axis
//! grows upward, so every y is flipped against the viewport height.

use hexquest::grid::TileKind;
use hexquest::hex::GridPos;
use hexquest::session::{paint, DrawState, Renderer};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points, Rectangle},
    Frame,
};

use super::sprites::Sprites;

/// Braille dots per terminal cell.
const DOTS_X: u16 = 2;
const DOTS_Y: u16 = 4;

/// Outlines are drawn slightly inside the layout radius so neighbors don't merge.
const OUTLINE_SCALE: f64 = 0.92;

/// Virtual viewport size (in dots) for a board area.
pub fn viewport_for(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width * DOTS_X),
        f64::from(area.height * DOTS_Y),
    )
}

/// Map a terminal cell inside `area` to the center of its dot block.
pub fn cell_to_pixel(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let inside = column >= area.x
        && row >= area.y
        && column < area.x + area.width
        && row < area.y + area.height;
    if !inside {
        return None;
    }
    let x = f64::from((column - area.x) * DOTS_X) + f64::from(DOTS_X) / 2.0;
    let y = f64::from((row - area.y) * DOTS_Y) + f64::from(DOTS_Y) / 2.0;
    Some((x, y))
}

pub fn render_board(frame: &mut Frame, area: Rect, state: &DrawState, sprites: &Sprites) {
    let (width, height) = state.viewport;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let mut painter = CanvasPainter {
                ctx,
                sprites,
                height,
            };
            paint(state, &mut painter);
        });
    frame.render_widget(canvas, area);
}

struct CanvasPainter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    sprites: &'a Sprites,
    height: f64,
}

impl CanvasPainter<'_, '_> {
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    fn hexagon(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let corners: Vec<(f64, f64)> = (0..6)
            .map(|i| {
                let angle = std::f64::consts::FRAC_PI_3 * f64::from(i);
                (cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        for i in 0..6 {
            let (x1, y1) = corners[i];
            let (x2, y2) = corners[(i + 1) % 6];
            self.ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    fn filled_square(&mut self, cx: f64, cy: f64, half: f64, color: Color) {
        let half = half.max(1.0);
        let mut coords = Vec::new();
        let mut y = cy - half;
        while y <= cy + half {
            let mut x = cx - half;
            while x <= cx + half {
                coords.push((x, y));
                x += 1.0;
            }
            y += 1.0;
        }
        self.ctx.draw(&Points {
            coords: &coords,
            color,
        });
    }

    fn glyph(&mut self, x: f64, y: f64, glyph: &str, color: Color) {
        // Center on the cell: back off one dot column per glyph char.
        let offset = glyph.chars().count() as f64;
        self.ctx.print(
            x - offset,
            y,
            Span::styled(
                glyph.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        );
    }
}

impl Renderer for CanvasPainter<'_, '_> {
    fn draw_background(&mut self, state: &DrawState) {
        let (width, height) = state.viewport;
        self.ctx.draw(&Rectangle {
            x: 0.0,
            y: 0.0,
            width: width - 1.0,
            height: height - 1.0,
            color: Color::DarkGray,
        });
        self.ctx.layer();
    }

    fn draw_grid(&mut self, state: &DrawState) {
        let radius = state.layout.radius * OUTLINE_SCALE;
        for tile in state.grid.tiles() {
            let pos = GridPos::new(tile.col, tile.row);
            let (x, y) = state.layout.hex_to_pixel(pos);
            let y = self.flip(y);
            let answered = state.answered_tiles.contains(&pos);

            let color = match tile.kind {
                TileKind::Normal => Color::Green,
                TileKind::Hazard => Color::Red,
                TileKind::Challenge if answered => Color::Green,
                TileKind::Challenge => Color::Yellow,
            };
            self.hexagon(x, y, radius, color);

            match tile.kind {
                TileKind::Hazard => self.filled_square(x, y, radius * 0.35, Color::LightRed),
                TileKind::Challenge if !answered => self.glyph(x, y, "?", Color::Yellow),
                _ => {}
            }

            if tile.has_bonus {
                self.ctx.draw(&Circle {
                    x,
                    y,
                    radius: (radius * 0.25).max(1.0),
                    color: Color::LightYellow,
                });
            }
        }
        self.ctx.layer();
    }

    fn draw_goal(&mut self, state: &DrawState) {
        let x = state.goal.pixel_x;
        let y = self.flip(state.goal.pixel_y);
        match self.sprites.goal.clone() {
            Some(sprite) => self.glyph(x, y, &sprite, Color::Magenta),
            None => {
                let radius = state.layout.radius;
                self.ctx.draw(&Circle {
                    x,
                    y,
                    radius: (radius * 0.6).max(1.0),
                    color: Color::Magenta,
                });
                self.ctx.draw(&Circle {
                    x,
                    y,
                    radius: (radius * 0.3).max(0.5),
                    color: Color::LightMagenta,
                });
            }
        }
        self.ctx.layer();
    }

    fn draw_actor(&mut self, state: &DrawState) {
        let actor = &state.actor;
        let x = actor.pixel_x;
        let y = self.flip(actor.pixel_y);
        match self.sprites.actor.clone() {
            Some(sprite) => self.glyph(x, y, &sprite, Color::Cyan),
            None => {
                let half = state.layout.radius * 0.35;
                self.filled_square(x, y, half, Color::Cyan);
                let nose = if actor.facing_right { x + half + 1.0 } else { x - half - 1.0 };
                self.ctx.draw(&Points {
                    coords: &[(nose, y)],
                    color: Color::White,
                });
            }
        }
        self.ctx.layer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_counts_braille_dots() {
        assert_eq!(viewport_for(Rect::new(3, 4, 40, 20)), (80.0, 80.0));
    }

    #[test]
    fn test_cell_to_pixel_inside_and_outside() {
        let area = Rect::new(2, 1, 10, 5);
        assert_eq!(cell_to_pixel(area, 2, 1), Some((1.0, 2.0)));
        assert_eq!(cell_to_pixel(area, 11, 5), Some((19.0, 18.0)));
        assert_eq!(cell_to_pixel(area, 1, 1), None);
        assert_eq!(cell_to_pixel(area, 12, 3), None);
    }
}
