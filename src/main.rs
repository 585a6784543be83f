use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sparselife::config::{Source, ViewArgs, ViewConfig};
use sparselife::life::{self, Coord, KeepAll, Limit, UntilStable};
use sparselife::patterns::{self, DEFAULT_DENSITY};
use sparselife::settings::Settings;
use sparselife::terminal::Terminal;
use sparselife::view;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Generation cap for headless runs, so oscillators and spaceships terminate
const DEFAULT_PRINT_GENERATIONS: u64 = 1000;

#[derive(Parser)]
#[command(name = "sparselife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Sparse Conway's Game of Life: only live cells and their border are tracked", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Seconds per generation
        #[arg(short, long)]
        time: Option<f32>,

        /// Character used for live cells
        #[arg(short, long)]
        char: Option<String>,

        /// Colour scheme (0-9)
        #[arg(long)]
        scheme: Option<u8>,

        /// Also draw the tracked dead border cells
        #[arg(short = 'b', long)]
        show_border: bool,

        /// Drop cells that leave the screen from the simulation
        #[arg(long)]
        clip: bool,

        /// Keep running after the pattern stabilises
        #[arg(short, long)]
        infinite: bool,
    },

    /// Run without a display and print a JSON summary
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the built-in patterns
    List,
}

#[derive(Args)]
struct SourceArgs {
    /// Built-in pattern (see `list`)
    #[arg(short, long, conflicts_with_all = ["cells", "file"])]
    pattern: Option<String>,

    /// Live cells as "x,y x,y ...", may start with a negative coordinate
    #[arg(short = 'C', long, conflicts_with = "file", allow_hyphen_values = true)]
    cells: Option<String>,

    /// Plaintext (.cells) pattern file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Width of the random soup used when no pattern is given
    #[arg(long, default_value = "64")]
    width: u32,

    /// Height of the random soup
    #[arg(long, default_value = "32")]
    height: u32,

    /// Probability of a soup cell being alive
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,
}

impl SourceArgs {
    fn source(&self) -> Source {
        if let Some(name) = &self.pattern {
            Source::Builtin(name.clone())
        } else if let Some(cells) = &self.cells {
            Source::Coords(cells.clone())
        } else if let Some(path) = &self.file {
            Source::File(path.clone())
        } else {
            Source::Random {
                width: self.width,
                height: self.height,
                density: self.density,
            }
        }
    }

    fn load(&self) -> sparselife::Result<Vec<(i64, i64)>> {
        let source = self.source();
        let cells = source.load(self.seed)?;
        info!(?source, cells = cells.len(), "loaded starting cells");
        Ok(cells)
    }
}

#[derive(Serialize)]
struct Summary {
    generations: u64,
    stable: bool,
    population: usize,
    tracked: usize,
    cells: Vec<Coord>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sparselife: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(command: Commands) -> sparselife::Result<()> {
    match command {
        Commands::Run {
            source,
            time,
            char: draw_char,
            scheme,
            show_border,
            clip,
            infinite,
        } => {
            let cells = source.load()?;
            let settings = Settings::load();
            let args = ViewArgs {
                time_step: time,
                draw_char: draw_char.and_then(|s| s.chars().next()),
                color_scheme: scheme,
                show_border,
                clip,
                infinite,
                max_generations: source.generations,
            };
            let config = ViewConfig::resolve(&settings.view, &args);

            let (outcome, generations) = {
                let mut term = Terminal::new()?;
                view::run(&mut term, &config, cells)?
            };
            println!("{outcome:?} after {generations} generations");
        }
        Commands::Print { source, pretty } => {
            let cells = source.load()?;
            let max = source.generations.unwrap_or(DEFAULT_PRINT_GENERATIONS);
            let summary = life::run(cells, KeepAll, Limit::new(UntilStable, max));
            if !summary.stable {
                warn!(generations = summary.steps, "stopped before the pattern stabilised");
            }

            let report = Summary {
                generations: summary.steps,
                stable: summary.stable,
                population: summary.last.population(),
                tracked: summary.last.len(),
                cells: summary.last.active_coords(),
            };
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Commands::List => {
            for pattern in patterns::PATTERNS {
                let size = pattern.coords()?.len();
                let aliases = if pattern.aliases.is_empty() {
                    String::new()
                } else {
                    format!(" (also: {})", pattern.aliases.join(", "))
                };
                println!("{:<20} {:>3} cells{}", pattern.name, size, aliases);
            }
        }
    }

    Ok(())
}
