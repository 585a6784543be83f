//! Starting patterns: built-in library, coordinate lists and plaintext files

use rand::Rng;
use thiserror::Error;

/// Default probability of a cell being alive in a random soup
pub const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum PatternError {
    #[error("unknown pattern '{name}' (available: {available})")]
    Unknown { name: String, available: String },
    #[error("invalid coordinate '{token}': expected x,y with integer x and y")]
    BadCoordinate { token: String },
    #[error("line {line}, column {column}: unexpected character '{found}'")]
    BadCell { line: usize, column: usize, found: char },
    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}

/// A named pattern stored in plaintext (`.cells`) form
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub cells: &'static str,
}

impl Pattern {
    /// Live positions of this pattern, top-left at the origin
    pub fn coords(&self) -> Result<Vec<(i64, i64)>, PatternError> {
        parse_plaintext(self.cells)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        aliases: &[],
        cells: "OO\nOO",
    },
    Pattern {
        name: "blinker",
        aliases: &[],
        cells: "OOO",
    },
    Pattern {
        name: "toad",
        aliases: &[],
        cells: ".OOO\nOOO.",
    },
    Pattern {
        name: "beacon",
        aliases: &[],
        cells: "OO..\nOO..\n..OO\n..OO",
    },
    Pattern {
        name: "glider",
        aliases: &[],
        cells: ".O.\n..O\nOOO",
    },
    Pattern {
        name: "r-pentomino",
        aliases: &["rpentomino", "r"],
        cells: ".OO\nOO.\n.O.",
    },
    Pattern {
        name: "diehard",
        aliases: &[],
        cells: "......O.\nOO......\n.O...OOO",
    },
    Pattern {
        name: "acorn",
        aliases: &[],
        cells: ".O.....\n...O...\nOO..OOO",
    },
    Pattern {
        name: "pulsar",
        aliases: &[],
        cells: "\
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..",
    },
    Pattern {
        name: "gosper-glider-gun",
        aliases: &["gosper", "gun"],
        cells: "\
! Gosper glider gun
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................",
    },
];

/// Names of the built-in patterns, comma separated
pub fn available() -> String {
    PATTERNS.iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
}

/// Look up a built-in pattern by name or alias, ignoring case
pub fn find(name: &str) -> Result<&'static Pattern, PatternError> {
    PATTERNS
        .iter()
        .find(|p| p.matches(name))
        .ok_or_else(|| PatternError::Unknown {
            name: name.to_string(),
            available: available(),
        })
}

/// Parse a list like `"0,0 1,0; 2,-1"`. Separators are whitespace or `;`.
pub fn parse_coords(input: &str) -> Result<Vec<(i64, i64)>, PatternError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
        .map(|token| {
            let bad = || PatternError::BadCoordinate { token: token.to_string() };
            let (x, y) = token.split_once(',').ok_or_else(bad)?;
            let x = x.trim().parse::<i64>().map_err(|_| bad())?;
            let y = y.trim().parse::<i64>().map_err(|_| bad())?;
            Ok((x, y))
        })
        .collect()
}

/// Parse the plaintext `.cells` format.
///
/// Lines starting with `!` are comments. `O` or `*` is a live cell, `.` a
/// dead one. Each remaining line is a row: column is x, row is y.
pub fn parse_plaintext(input: &str) -> Result<Vec<(i64, i64)>, PatternError> {
    let mut coords = Vec::new();
    let mut y = 0i64;

    for (line_no, line) in input.lines().enumerate() {
        if line.starts_with('!') {
            continue;
        }
        for (x, ch) in line.trim_end().chars().enumerate() {
            match ch {
                'O' | 'o' | '*' => coords.push((x as i64, y)),
                '.' => {}
                found => {
                    return Err(PatternError::BadCell {
                        line: line_no + 1,
                        column: x + 1,
                        found,
                    })
                }
            }
        }
        y += 1;
    }

    Ok(coords)
}

/// Random fill of a `width` x `height` rectangle centred on the origin
pub fn random_soup<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    density: f64,
    rng: &mut R,
) -> Result<Vec<(i64, i64)>, PatternError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(PatternError::InvalidDensity(density));
    }
    let (w, h) = (i64::from(width), i64::from(height));
    let mut coords = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if rng.gen_bool(density) {
                coords.push((x - w / 2, y - h / 2));
            }
        }
    }
    Ok(coords)
}
