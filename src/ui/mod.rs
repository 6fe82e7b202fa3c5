mod button;
mod size_picker;

pub use button::Button;
pub use size_picker::SizePicker;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 300.0, PANEL_WIDTH, BUTTON_HEIGHT, "Shuffle"),
        Button::new(px, 350.0, PANEL_WIDTH, BUTTON_HEIGHT, "Next picture"),
    ]
}
