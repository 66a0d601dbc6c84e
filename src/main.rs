// dsviz: data structure and sorting visualizer for the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use dsviz::config::VisualizerConfig;
use dsviz::narrator::{
    Algorithm, AnimationSpeed, NoDelay, Narrator, Pacer, SleepPacer, SpeedControl, StepEvent,
};
use dsviz::ops::{parse_value, StructureKind};
use dsviz::sequence::Sequence;
use dsviz::ui::App;

#[derive(Parser, Debug)]
#[command(author, version, about = "Data structure and sorting visualizer", long_about = None)]
struct Cli {
    /// TOML config file with seeds, speed and pacing
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Animation speed, 1 (slowest) to 100 (fastest)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=100))]
    speed: Option<u8>,

    /// Structure shown at startup
    #[arg(long)]
    structure: Option<StructureKind>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the narrated steps of a sort without starting the TUI.
    Trace {
        /// Sorting algorithm to narrate.
        #[arg(short, long, value_enum, default_value = "bubble")]
        algorithm: Algorithm,

        /// Sleep between steps using the configured pacing.
        #[arg(long)]
        delay: bool,

        /// Values to sort.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Trace { .. }) => init_tracing_to_stderr(),
        None => {
            if let Some(path) = &cli.log_file {
                init_tracing_to_file(path)?;
            }
        }
    }

    let mut config = match &cli.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.speed = AnimationSpeed::clamped(i64::from(speed));
    }
    if let Some(structure) = cli.structure {
        config.structure = structure;
    }

    match cli.command {
        Some(Commands::Trace {
            algorithm,
            delay,
            values,
        }) => run_trace(&config, algorithm, delay, &values)?,
        None => run_tui(config)?,
    }

    Ok(())
}

fn init_tracing_to_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn init_tracing_to_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn run_trace(
    config: &VisualizerConfig,
    algorithm: Algorithm,
    delay: bool,
    values: &[String],
) -> dsviz::Result<()> {
    let values = values
        .iter()
        .map(|text| parse_value(text))
        .collect::<Result<Vec<_>, _>>()?;
    let sequence = Sequence::from_values(&values);

    println!("{} of {}", algorithm, sequence);

    let narrator = Narrator::new(config.pacing, SpeedControl::new(config.speed));
    let mut pacer: Box<dyn Pacer> = if delay {
        Box::new(SleepPacer)
    } else {
        Box::new(NoDelay)
    };
    let mut number = 0usize;
    let outcome = narrator.run(
        sequence,
        algorithm,
        |step: &StepEvent| {
            number += 1;
            println!(
                "{:>4}  {:<9} {:<24} {}",
                number,
                step.kind.label(),
                step.snapshot.to_string(),
                step.narration
            );
        },
        || false,
        pacer.as_mut(),
    );

    println!("Sorted {} in {} steps", outcome.sequence(), outcome.steps());
    Ok(())
}

fn run_tui(config: VisualizerConfig) -> io::Result<()> {
    tracing::info!(structure = config.structure.title(), speed = %config.speed, "starting TUI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
