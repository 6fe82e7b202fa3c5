use macroquad::prelude::*;
use crate::application::{Puzzle, TileCanvas};
use crate::domain::Rect;
use crate::ui::{Button, PANEL_WIDTH, SizePicker, panel_x};

/// Canvas background behind the board
pub const BACKGROUND: Color = Color::new(0.902, 0.388, 0.341, 1.0);

/// Fill for the movable-tile hint (#f59e42 at 35%)
const HIGHLIGHT_FILL: Color = Color::new(0.961, 0.620, 0.259, 0.35);

/// Draws tiles by sampling regions of a loaded texture
pub struct TextureCanvas<'a> {
    texture: &'a Texture2D,
}

impl<'a> TextureCanvas<'a> {
    pub fn new(texture: &'a Texture2D) -> Self {
        Self { texture }
    }
}

impl TileCanvas for TextureCanvas<'_> {
    fn draw_region(&mut self, source: Rect, target: Rect) {
        draw_texture_ex(
            self.texture,
            target.x,
            target.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(target.w, target.h)),
                source: Some(macroquad::math::Rect::new(source.x, source.y, source.w, source.h)),
                ..Default::default()
            },
        );
    }

    fn highlight(&mut self, target: Rect) {
        draw_rectangle_lines(target.x, target.y, target.w, target.h, 1.0, BLACK);
        draw_rectangle(target.x, target.y, target.w, target.h, HIGHLIGHT_FILL);
    }
}

/// Draw the board, or a notice when there is no picture to play with
pub fn draw_board(puzzle: &Puzzle, texture: Option<&Texture2D>) {
    match texture {
        Some(texture) if puzzle.board().is_some() => {
            puzzle.draw(&mut TextureCanvas::new(texture));
        }
        _ => {
            let viewport = puzzle.viewport();
            draw_text(
                "No picture loaded",
                20.0,
                viewport.height / 2.0,
                28.0,
                WHITE,
            );
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Everything the side panel shows besides its widgets
pub struct PanelInfo<'a> {
    pub solved: bool,
    pub image_name: &'a str,
    pub shuffling: bool,
}

/// Draw the side panel with the title banner, size picker, buttons and help
pub fn draw_panel(info: &PanelInfo<'_>, buttons: &[Button], sizes: &SizePicker, mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let (title, title_color) = if info.solved {
        ("Congratulations!", Color::from_rgba(0, 255, 150, 255))
    } else {
        ("Puzzle", WHITE)
    };
    draw_text_label(title, px + 5.0, 30.0, 26.0, title_color);

    sizes.draw(mouse_pos);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let labels = [
        ("Picture:", px, 420.0, 16.0, WHITE),
        (info.image_name, px, 438.0, 13.0, GRAY),
        ("Controls:", px, 470.0, 14.0, WHITE),
        ("Arrows / swipe: slide", px, 485.0, 12.0, GRAY),
        ("Click: slide tile", px, 498.0, 12.0, GRAY),
        ("S: shuffle", px, 511.0, 12.0, GRAY),
        ("N: next picture", px, 524.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    if info.shuffling {
        draw_text_label("Shuffling...", px, 560.0, 16.0, Color::from_rgba(255, 165, 0, 255));
    }
}
