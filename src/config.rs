use crate::error::{Error, Result};
use crate::patterns::{self, DEFAULT_DENSITY};
use crate::settings::ViewSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

/// Default seconds per generation in the terminal view
pub const DEFAULT_TIME_STEP: f32 = 0.05;
/// Slowest allowed pace, seconds per generation
pub const MAX_TIME_STEP: f32 = 60.0;
pub const DEFAULT_DRAW_CHAR: char = '#';

/// Where the starting cells come from
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Builtin(String),
    Coords(String),
    File(PathBuf),
    Random { width: u32, height: u32, density: f64 },
}

impl Default for Source {
    fn default() -> Self {
        Self::Random {
            width: 64,
            height: 32,
            density: DEFAULT_DENSITY,
        }
    }
}

impl Source {
    /// Live starting positions. `seed` only affects random soups.
    pub fn load(&self, seed: Option<u64>) -> Result<Vec<(i64, i64)>> {
        let cells = match self {
            Self::Builtin(name) => patterns::find(name)?.coords()?,
            Self::Coords(list) => patterns::parse_coords(list)?,
            Self::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| Error::PatternFile {
                    path: path.clone(),
                    source,
                })?;
                patterns::parse_plaintext(&text)?
            }
            Self::Random { width, height, density } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                patterns::random_soup(*width, *height, *density, &mut rng)?
            }
        };
        Ok(cells)
    }
}

/// Configuration for an interactive terminal run
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub time_step: f32,
    pub draw_char: char,
    pub color_scheme: u8,
    pub show_border: bool,
    pub clip: bool,
    pub infinite: bool,
    pub max_generations: Option<u64>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            draw_char: DEFAULT_DRAW_CHAR,
            color_scheme: 0,
            show_border: false,
            clip: false,
            infinite: false,
            max_generations: None,
        }
    }
}

/// Command line values for the view; `None` means "not given"
#[derive(Clone, Debug, Default)]
pub struct ViewArgs {
    pub time_step: Option<f32>,
    pub draw_char: Option<char>,
    pub color_scheme: Option<u8>,
    pub show_border: bool,
    pub clip: bool,
    pub infinite: bool,
    pub max_generations: Option<u64>,
}

impl ViewConfig {
    /// Layer: built-in defaults, then the settings file, then the command line
    pub fn resolve(file: &ViewSettings, args: &ViewArgs) -> Self {
        let defaults = Self::default();
        Self {
            time_step: clamp_time_step(args.time_step.or(file.time_step).unwrap_or(defaults.time_step)),
            draw_char: args.draw_char.or(file.draw_char).unwrap_or(defaults.draw_char),
            color_scheme: args.color_scheme.or(file.color_scheme).unwrap_or(defaults.color_scheme).min(9),
            show_border: args.show_border || file.show_border.unwrap_or(defaults.show_border),
            clip: args.clip || file.clip.unwrap_or(defaults.clip),
            infinite: args.infinite,
            max_generations: args.max_generations,
        }
    }
}

/// Keep the pace sleepable: NaN falls back to the default, anything else
/// is clamped to `0..=MAX_TIME_STEP`
fn clamp_time_step(seconds: f32) -> f32 {
    if seconds.is_nan() {
        DEFAULT_TIME_STEP
    } else {
        seconds.clamp(0.0, MAX_TIME_STEP)
    }
}
