use macroquad::prelude::*;
use crate::application::Puzzle;
use crate::domain::Direction;
use crate::ui::Button;

/// Minimum drag in pixels before a touch counts as a swipe
pub const SWIPE_THRESHOLD: f32 = 10.0;

/// Requests the input layer hands back to the game loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Shuffle,
    NextImage,
}

/// Arrow keys slide tiles in the arrow's direction
pub fn key_direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Direction of a drag from `start` to `end`, by its dominant axis.
/// `None` until the drag is long enough.
pub fn swipe_direction(start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
    let dx = start.0 - end.0;
    let dy = start.1 - end.1;
    if dx.abs().max(dy.abs()) < SWIPE_THRESHOLD {
        return None;
    }
    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Left } else { Direction::Right }
    } else if dy > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(direction)
}

/// Process keyboard input: arrows move, `S` and `N` become commands
pub fn process_keyboard_input(puzzle: &mut Puzzle) -> Option<Command> {
    const ARROWS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

    ARROWS
        .into_iter()
        .filter(|&key| is_key_pressed(key))
        .filter_map(key_direction)
        .for_each(|direction| {
            puzzle.move_direction(direction);
        });

    if is_key_pressed(KeyCode::S) {
        Some(Command::Shuffle)
    } else if is_key_pressed(KeyCode::N) {
        Some(Command::NextImage)
    } else {
        None
    }
}

/// Process panel button clicks; button order matches [`crate::ui::create_buttons`]
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .position(|btn| btn.is_clicked(mouse_pos))
        .and_then(|idx| match idx {
            0 => Some(Command::Shuffle),
            1 => Some(Command::NextImage),
            _ => None,
        })
}

/// Hover highlights movable tiles; a left click moves the tile under the
/// cursor and drops the highlight.
pub fn handle_pointer(puzzle: &mut Puzzle, mouse_pos: (f32, f32)) {
    let (x, y) = mouse_pos;
    puzzle.highlight_tile(x, y);
    if is_mouse_button_pressed(MouseButton::Left) {
        puzzle.move_tile(x, y);
        puzzle.highlight_tile(-1.0, -1.0);
    }
}

/// What one touch gesture asks for
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Swipe(Direction),
    /// Finger lifted without travelling far enough to swipe
    Tap((f32, f32)),
}

/// Turns raw touch events into at most one gesture per touch. Mouse emulation
/// for touches must be off (see `main`), so a tap never also arrives as a click.
#[derive(Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    swiped: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one touch event; returns the gesture it completed, if any
    pub fn track(&mut self, phase: TouchPhase, pos: (f32, f32)) -> Option<Gesture> {
        match phase {
            TouchPhase::Started => {
                self.start = Some(pos);
                self.swiped = false;
                None
            }
            TouchPhase::Moved if !self.swiped => {
                let direction = swipe_direction(self.start?, pos)?;
                self.swiped = true;
                Some(Gesture::Swipe(direction))
            }
            TouchPhase::Ended => {
                let start = self.start.take()?;
                (!std::mem::take(&mut self.swiped)).then_some(Gesture::Tap(start))
            }
            TouchPhase::Cancelled => {
                self.start = None;
                self.swiped = false;
                None
            }
            TouchPhase::Moved | TouchPhase::Stationary => None,
        }
    }

    /// Feed one touch event and apply its gesture to the puzzle
    pub fn apply(&mut self, puzzle: &mut Puzzle, phase: TouchPhase, pos: (f32, f32)) {
        match self.track(phase, pos) {
            Some(Gesture::Swipe(direction)) => {
                puzzle.move_direction(direction);
            }
            Some(Gesture::Tap((x, y))) => puzzle.move_tile(x, y),
            None => {}
        }
    }

    /// Handle this frame's touches
    pub fn handle_touches(&mut self, puzzle: &mut Puzzle) {
        for touch in touches() {
            self.apply(puzzle, touch.phase, (touch.position.x, touch.position.y));
        }
    }
}
