//! Live terminal view of an evolving grid.

use crate::config::{SeedPattern, ViewConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runtime state for interactive controls
struct VizState {
    speed: f32,       // Current speed (time per frame)
    color_scheme: u8, // Current color scheme
    paused: bool,
}

impl VizState {
    fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            color_scheme: 0,
            paused: false,
        }
    }

    /// Handle keypress, returns true if should quit
    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            // Number keys: change speed (1=fastest, 9=slowest, 0=very slow)
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let n = c.to_digit(10).unwrap() as u8;
                self.speed = match n {
                    1 => 0.005,
                    2 => 0.01,
                    3 => 0.02,
                    4 => 0.03,
                    5 => 0.05,
                    6 => 0.07,
                    7 => 0.1,
                    8 => 0.15,
                    _ => 0.2,
                };
            }
            // Shift+number picks a color scheme
            KeyCode::Char('!') => self.color_scheme = 1, // fire
            KeyCode::Char('@') => self.color_scheme = 2, // ice
            KeyCode::Char('&') => self.color_scheme = 3, // mono
            KeyCode::Char(')') => self.color_scheme = 0, // green
            _ => {}
        }
        false
    }
}

/// Color an alive cell by how crowded its neighborhood is: 2 neighbors means
/// it merely survives, 3 means it sits in a birth-dense region.
fn scheme_color(scheme: u8, neighbors: u8) -> (Color, bool) {
    let intensity = match neighbors {
        2 => 1,
        3 => 2,
        _ => 0,
    };
    match scheme {
        1 => match intensity {
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            _ => (Color::Yellow, true),
        },
        2 => match intensity {
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            _ => (Color::Cyan, true),
        },
        3 => match intensity {
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            _ => (Color::White, true),
        },
        _ => match intensity {
            0 => (Color::DarkGreen, false),
            1 => (Color::Green, false),
            _ => (Color::Green, true),
        },
    }
}

fn seed_grid(config: &ViewConfig, rng: &mut StdRng) -> Grid {
    match config.pattern {
        SeedPattern::Random => Grid::random(config.size, rng),
        SeedPattern::Spaceship => Grid::spaceship(config.size),
        SeedPattern::Oscillator => Grid::oscillator(config.size),
    }
}

/// Run the live view until q/Esc. One `step` per frame; the grid keeps its
/// configured size regardless of the window and is clipped to fit.
pub fn run(config: &ViewConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = seed_grid(config, &mut rng);

    let mut term = Terminal::new()?;
    let mut state = VizState::new(config.time_step);
    let mut generation = 0u64;

    loop {
        // Track window resizes so the status line and clipping stay correct;
        // the grid itself never changes size.
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or_else(|_| term.size());
        if (new_w, new_h) != term.size() {
            term.resize(new_w, new_h);
            term.clear_screen()?;
        }

        if let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                break;
            }
        }

        if state.paused {
            term.sleep(0.1);
            continue;
        }

        let counts = grid.neighbor_counts();
        term.clear();
        for (row, col) in grid.alive_cells() {
            let neighbors = counts[row * grid.size() + col];
            let (color, bold) = scheme_color(state.color_scheme, neighbors);
            term.set(col as i32, row as i32 + 1, config.draw_char, Some(color), bold);
        }

        let status = format!(
            " gen {generation}  pop {}  [space] pause  [1-9] speed  [q] quit",
            grid.population()
        );
        term.set_str(0, 0, &status, Some(Color::White), false);

        term.render()?;
        term.sleep(state.speed);

        grid = grid.step();
        generation += 1;
    }

    Ok(())
}
