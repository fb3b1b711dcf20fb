//! nbclean CLI - Jupyter notebook widget-metadata cleaner
//!
//! A command-line interface for stripping broken `widgets` metadata from
//! notebook cells and inspecting notebooks before cleaning.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use nbclean_core::{clean_notebook_file_to, cleaned_output_path, parse_notebook};
use std::path::{Path, PathBuf};

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Normal output (default)
    Normal,
    /// Verbose output with extra details
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if output should be shown (not quiet)
    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if verbose output is requested
    const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "nbclean",
    about = "Strip broken widget metadata from Jupyter notebooks",
    long_about = "Strip broken widget metadata from Jupyter notebooks.\n\
                  \n\
                  Old ipywidgets versions saved widget state into each cell's\n\
                  metadata under the 'widgets' key; corrupt state there breaks\n\
                  rendering on GitHub and nbviewer. nbclean removes that key from\n\
                  every cell and writes the result to a new file, leaving the\n\
                  original notebook untouched.",
    version
)]
struct Args {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show detailed processing information
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove widget metadata from a notebook and write a cleaned copy
    #[command(long_about = "Remove the 'widgets' metadata key from every cell.\n\
                      \n\
                      The cleaned notebook is written next to the input with a\n\
                      CLEANED_ prefix (analysis.ipynb -> CLEANED_analysis.ipynb)\n\
                      unless -o is given. The input file is never modified.")]
    Clean {
        /// Input notebook path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file path (default: CLEANED_<input name> next to the input)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Overwrite existing output files without prompting
        #[arg(long)]
        force: bool,

        /// Never overwrite existing files (exit with error if output exists)
        #[arg(long, conflicts_with = "force")]
        no_clobber: bool,

        /// Show what would be cleaned without actually writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect notebook structure and widget metadata without cleaning
    #[command(long_about = "Inspect a notebook without writing anything.\n\
                      \n\
                      Shows the nbformat version, cell counts by type, and how\n\
                      many cells carry widget metadata.\n\
                      \n\
                      Examples:\n\
                        nbclean info analysis.ipynb        # Show summary\n\
                        nbclean info analysis.ipynb --json # Output as JSON")]
    Info {
        /// Input notebook to inspect
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Extract global verbosity settings
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    match args.command {
        Commands::Clean {
            input,
            output,
            force,
            no_clobber,
            dry_run,
        } => clean_command(&input, output, force, no_clobber, dry_run, verbosity),
        Commands::Info { input, json } => info_command(&input, json),
    }
}

fn clean_command(
    input: &Path,
    output: Option<PathBuf>,
    force: bool,
    no_clobber: bool,
    dry_run: bool,
    verbosity: Verbosity,
) -> Result<()> {
    // Verify input file exists before doing anything else
    if !input.exists() {
        eprintln!(
            "{} Input file not found: {}",
            "Error:".red().bold(),
            input.display()
        );
        eprintln!(
            "{} Check that the file path is correct and the file exists",
            "Help:".cyan().bold()
        );
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let output = output.unwrap_or_else(|| cleaned_output_path(input));

    // Handle --dry-run: show what would be cleaned without doing it
    if dry_run {
        println!("Would clean: {} → {}", input.display(), output.display());
        return Ok(());
    }

    // Check for existing file and handle --force / --no-clobber flags
    if output.exists() && !force {
        if no_clobber {
            eprintln!(
                "{} Output file already exists: {} (--no-clobber specified)",
                "Error:".red().bold(),
                output.display()
            );
            std::process::exit(1);
        }
        eprintln!(
            "{} Output file already exists: {}",
            "Error:".red().bold(),
            output.display()
        );
        eprintln!(
            "{} Use --force to overwrite existing files",
            "Help:".cyan().bold()
        );
        std::process::exit(1);
    }

    let report = clean_notebook_file_to(input, &output)?;

    if verbosity.should_show_output() {
        println!(
            "{} Cleaned notebook saved as: {}",
            "✓".green().bold(),
            report.output.display().to_string().bright_white()
        );
    }
    if verbosity.is_verbose() {
        eprintln!(
            "{} Removed widget metadata from {} of {} cells",
            "Info:".blue().bold(),
            report.cleaned_cells,
            report.total_cells
        );
    }

    Ok(())
}

fn info_command(input: &Path, json: bool) -> Result<()> {
    let notebook = parse_notebook(input)?;
    let summary = notebook.summarize();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} {}", "File:".cyan().bold(), input.display());
    println!(
        "{} {}.{}",
        "Format:".cyan().bold(),
        summary.nbformat,
        summary.nbformat_minor
    );
    println!(
        "{} {} (code: {}, markdown: {}, raw: {})",
        "Cells:".cyan().bold(),
        summary.total_cells,
        summary.code_cells,
        summary.markdown_cells,
        summary.raw_cells
    );
    if summary.widget_cells > 0 {
        println!(
            "{} {} cells carry widget metadata",
            "Widgets:".yellow().bold(),
            summary.widget_cells
        );
    } else {
        println!("{} no widget metadata found", "Widgets:".green().bold());
    }

    Ok(())
}
