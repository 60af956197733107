//! Command-line interface driving an interactive partition session

use crate::io::configuration::{DEFAULT_LOG_LEVEL, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_source_image, save_reduced_image};
use crate::io::keys::Command;
use crate::io::progress::StatisticsDisplay;
use crate::workflow::{Session, SessionEvent};
use clap::Parser;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockreduce")]
#[command(
    author,
    version,
    about = "Reduce an image by averaging hand-entered grid blocks"
)]
/// Command-line arguments for the block reduction tool
pub struct Cli {
    /// Source image to partition
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Path of the reduced image (defaults to <image>_reduced.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keystrokes to apply instead of reading stdin
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Suppress the statistics display
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Check if the statistics display should be drawn
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { DEFAULT_LOG_LEVEL }
    }

    /// Output path for the n-th reduction of this run (1-based)
    ///
    /// The first reduction uses `--output` or `<stem>_reduced.png`; later ones
    /// append `_2`, `_3`, ... to the stem.
    pub fn output_path(&self, reduction: usize) -> PathBuf {
        let base = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.image));

        if reduction <= 1 {
            return base;
        }

        let stem = base.file_stem().unwrap_or_default().to_string_lossy();
        let extension = base
            .extension()
            .map_or_else(|| OUTPUT_EXTENSION.into(), |e| e.to_string_lossy());
        base.with_file_name(format!("{stem}_{reduction}.{extension}"))
    }
}

/// `<stem>_reduced.png` next to the input image
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Runs one partition session from keystrokes to saved reduced images
pub struct Driver {
    cli: Cli,
    session: Session,
    display: StatisticsDisplay,
    saved: Vec<PathBuf>,
}

impl Driver {
    /// Create a driver for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let display = if cli.should_show_progress() {
            StatisticsDisplay::new()
        } else {
            StatisticsDisplay::hidden()
        };

        Self {
            cli,
            session: Session::new(),
            display,
            saved: Vec::new(),
        }
    }

    /// Load the image and apply keystrokes from `--keys` or stdin
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, stdin cannot be read,
    /// or a reduced image cannot be saved
    pub fn run(&mut self) -> Result<()> {
        match self.cli.keys.clone() {
            Some(keys) => self.run_with(keys.as_bytes(), std::io::stderr()),
            None => self.run_with(std::io::stdin().lock(), std::io::stderr()),
        }
    }

    /// Load the image and apply keystrokes read line by line from `input`
    ///
    /// Rejected keystrokes are reported to `feedback` and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error before any input is read if the first output path
    /// already exists without `--force`. Otherwise returns an error if the
    /// image cannot be loaded, `input` cannot be read, or a reduced image
    /// cannot be saved
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut feedback: W) -> Result<()> {
        let first_output = self.cli.output_path(1);
        if first_output.exists() && !self.cli.force {
            return Err(invalid_parameter(
                "output",
                &first_output.display(),
                &"file exists, pass --force to overwrite",
            ));
        }

        let image = load_source_image(&self.cli.image)?;
        let statistics = self.session.load(image);
        let name = self
            .cli
            .image
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.display.start(&name, &statistics);

        for line in input.lines() {
            let line = line?;
            for command in Command::parse_line(&line) {
                self.handle(command, &mut feedback)?;
            }
        }

        self.display.finish();
        Ok(())
    }

    /// Paths of the reduced images written so far
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Output path for the latest reduction, skipping past files created
    /// since the run started unless `--force` is set
    fn next_output_path(&self) -> PathBuf {
        let mut reduction = self.session.reductions();
        let mut path = self.cli.output_path(reduction);
        while !self.cli.force && path.exists() {
            warn!("{} already exists, trying the next name", path.display());
            reduction += 1;
            path = self.cli.output_path(reduction);
        }
        path
    }

    fn handle<W: Write>(&mut self, command: Command, feedback: &mut W) -> Result<()> {
        match self.session.apply(command) {
            Ok(SessionEvent::StatisticsChanged(statistics)) => self.display.update(&statistics),
            Ok(SessionEvent::PhaseChanged { to, statistics, .. }) => {
                debug!("Now entering {to}");
                self.display.update(&statistics);
            }
            Ok(SessionEvent::EmptyUndo) => {
                writeln!(feedback, "Nothing to undo")?;
            }
            Ok(SessionEvent::Reduced(reduced)) => {
                let path = self.next_output_path();
                save_reduced_image(&reduced, &path)?;
                writeln!(
                    feedback,
                    "Saved reduced image to {}",
                    path.file_name().unwrap_or_default().to_string_lossy()
                )?;
                self.saved.push(path);
                if let Some(statistics) = self.session.statistics() {
                    self.display.update(&statistics);
                }
            }
            Err(error) if error.is_rejected_input() => {
                warn!("{error}");
                writeln!(feedback, "{error}")?;
            }
            Err(error) => return Err(error),
        }
        Ok(())
    }
}
