use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use clap::Parser;
use macroquad::prelude::*;
use slide_puzzle::{
    Config, LoadError, Puzzle, Size,
    input::{self, Command, SwipeTracker},
    rendering::{self, PanelInfo},
    ui::{self, SizePicker},
};
use tracing::{error, info, warn};

fn window_conf() -> Conf {
    let config = Config::parse();
    Conf {
        window_title: "Slide Puzzle".to_owned(),
        window_width: (config.board_size + ui::PANEL_WIDTH) as i32,
        window_height: config.board_size as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn load_picture(path: &Path) -> Result<Texture2D, LoadError> {
    let name = path.display().to_string();
    let texture = load_texture(&name)
        .await
        .map_err(|err| LoadError::unreadable(name.as_str(), err))?;
    if texture.width() <= 0.0 || texture.height() <= 0.0 {
        return Err(LoadError::Empty { path: name });
    }
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

/// Hand a load result to the engine, keeping the texture for drawing
fn apply_load(puzzle: &mut Puzzle, loaded: Result<Texture2D, LoadError>) -> Option<Texture2D> {
    match loaded {
        Ok(texture) => {
            puzzle.load_image(Ok(Size::new(texture.width(), texture.height())));
            Some(texture)
        }
        Err(err) => {
            puzzle.load_image(Err(err));
            None
        }
    }
}

fn image_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::parse();
    config.init_tracing();

    let dims = match config.validate() {
        Ok(dims) => dims,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let mut puzzle = Puzzle::new(dims, Size::new(config.board_size, config.board_size))
        .with_shuffle_delay(config.shuffle_delay());

    // Title banner follows the notification sink
    let solved = Rc::new(Cell::new(false));
    puzzle.on_finished({
        let solved = solved.clone();
        move || solved.set(true)
    });
    puzzle.on_unfinished({
        let solved = solved.clone();
        move || solved.set(false)
    });

    let mut image_index = 0;
    let mut texture = match config.images.first() {
        Some(path) => apply_load(&mut puzzle, load_picture(path).await),
        None => None,
    };

    let mut sizes = SizePicker::new(ui::panel_x() + 10.0, 70.0, dims.rows(), dims.cols());

    // Touches are handled as gestures, never as emulated clicks
    simulate_mouse_with_touch(false);
    let mut swipes = SwipeTracker::new();
    info!(rows = dims.rows(), cols = dims.cols(), "puzzle ready");

    loop {
        let mouse_pos = mouse_position();
        sizes.set_position(ui::panel_x() + 10.0, 70.0);
        let buttons = ui::create_buttons();

        // Clicks on the size picker never reach the buttons or the board
        let over_sizes = sizes.captures(mouse_pos);
        if let Some((rows, cols)) = sizes.update(mouse_pos) {
            if let Err(err) = puzzle.resize(rows, cols) {
                warn!(%err, "resize rejected");
            }
        }

        let mut commands = Vec::new();
        if !over_sizes {
            commands.extend(input::process_button_clicks(&buttons, mouse_pos));
            input::handle_pointer(&mut puzzle, mouse_pos);
        }
        commands.extend(input::process_keyboard_input(&mut puzzle));
        swipes.handle_touches(&mut puzzle);

        for command in commands {
            match command {
                Command::Shuffle => puzzle.shuffle(config.shuffle_moves),
                Command::NextImage if !config.images.is_empty() => {
                    image_index = (image_index + 1) % config.images.len();
                    let path = &config.images[image_index];
                    info!(image = %path.display(), "switching picture");
                    texture = apply_load(&mut puzzle, load_picture(path).await);
                }
                Command::NextImage => {}
            }
        }

        // Shuffle timer and frame animations run on separate cadences
        puzzle.tick(get_frame_time());
        puzzle.advance_animations();

        clear_background(rendering::BACKGROUND);
        rendering::draw_board(&puzzle, texture.as_ref());

        let image_name = config
            .images
            .get(image_index)
            .map(|path| image_label(path))
            .unwrap_or_default();
        let info = PanelInfo {
            solved: solved.get(),
            image_name: &image_name,
            shuffling: puzzle.is_shuffling(),
        };
        rendering::draw_panel(&info, &buttons, &sizes, mouse_pos);

        next_frame().await;
    }
}
