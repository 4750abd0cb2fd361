//! Main CLI application for the zero forcing explorer

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use zero_forcing::{
    config::{CliOverrides, OutputFormat, Settings},
    forcing::{ForcingValidator, ZeroForcingProblem},
    graph::{create_example_graphs, load_graph_from_file, read_graph},
    utils::{ColorOutput, ReportFormatter},
};

#[derive(Parser)]
#[command(name = "zero_forcing")]
#[command(about = "Exhaustive zero forcing sets of small graphs")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all (minimal) zero forcing sets and the zero forcing number
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Graph file (overrides config; stdin when neither is given)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Report format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Largest accepted vertex count (overrides config)
        #[arg(long)]
        max_vertices: Option<usize>,

        /// Leave the full subset listing out of the report
        #[arg(long)]
        no_catalog: bool,

        /// Directory to save the report in (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether one vertex set is zero forcing
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Graph file (overrides config; stdin when neither is given)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Comma-separated vertices, e.g. 0,1
        #[arg(short, long, value_delimiter = ',', num_args = 0..)]
        set: Vec<usize>,

        /// Show each propagation round
        #[arg(long)]
        show_rounds: bool,
    },

    /// Create example configuration and graph files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Analyze { verbose: true, .. });
    init_logging(verbose)?;

    match cli.command {
        Commands::Analyze {
            config, graph, format, max_vertices, no_catalog, output, verbose
        } => {
            let overrides = CliOverrides {
                graph_file: graph,
                max_vertices,
                format,
                show_catalog: no_catalog.then_some(false),
                output_dir: output,
                show_progress: verbose,
            };
            analyze_command(config, overrides, verbose)
        }
        Commands::Check { config, graph, set, show_rounds } => {
            check_command(config, graph, set, show_rounds)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Failed to initialize logging")
}

/// Load the config file when present, defaults otherwise
fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(&config_path.to_path_buf())
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults",
            config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn analyze_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Graph file: {}", settings.input.graph_file.as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string()));
        eprintln!("  Max vertices: {}", settings.analysis.max_vertices);
        eprintln!("  Format: {:?}", settings.output.format);
        eprintln!();
    }

    settings.validate()
        .context("Configuration validation failed")?;

    let mut problem = ZeroForcingProblem::new(settings.clone())
        .context("Failed to load graph")?;
    let report = problem.solve();

    match settings.output.format {
        OutputFormat::Text => print!("{}", ReportFormatter::format_report(&report)),
        OutputFormat::Json => println!("{}", report.to_json().context("Failed to serialize report")?),
    }

    if verbose {
        eprintln!("\n{}", report.statistics);
        eprintln!("{}", ColorOutput::success(&format!(
            "Analyzed {} subsets in {:.3}s",
            problem.catalog().len(),
            report.solve_time.as_secs_f64()
        )));
    }

    if let Some(ref output_dir) = settings.output.output_directory {
        let path = ReportFormatter::save_report(&report, output_dir, &settings.output.format)
            .context("Failed to save report")?;
        eprintln!("{}", ColorOutput::success(&format!("Report saved to {}", path.display())));
    }

    Ok(())
}

fn check_command(
    config_path: PathBuf,
    graph_file: Option<PathBuf>,
    set: Vec<usize>,
    show_rounds: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        graph_file,
        ..Default::default()
    });
    settings.validate()
        .context("Configuration validation failed")?;
    let max_vertices = settings.analysis.max_vertices;

    let graph = match settings.input.graph_file {
        Some(path) => load_graph_from_file(&path, max_vertices)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        None => read_graph(std::io::stdin().lock(), max_vertices)
            .context("Failed to read graph from stdin")?,
    };

    let result = ForcingValidator::new(&graph).check(&set)
        .context("Check failed")?;

    println!("{}", ReportFormatter::format_check(&result, show_rounds));

    if result.is_zero_forcing {
        println!("{}", ColorOutput::success("Set is zero forcing"));
    } else {
        println!("{}", ColorOutput::error("Set is not zero forcing"));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let graph_dir = directory.join("input/graphs");

    for dir in [&config_dir, &graph_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.graph_file = Some(graph_dir.join("path3.txt"));
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_graphs(&graph_dir)
        .context("Failed to create example graphs")?;
    println!("Created example graphs in: {}", graph_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your graphs to {}", graph_dir.display());
    println!("3. Run: cargo run -- analyze --config config/default.yaml");

    Ok(())
}
