//! Command-line driver for diffusion experiments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use cascade_analysis::{
    default_config_toml, load_graph, lt_summary, run_experiment, AnalysisConfig, AnalysisError,
    RecordWriter,
};
use cascade_core::rng::seeded;
use cascade_core::{
    select_seeds, IndependentCascade, InfluenceGraph, LinearThreshold, SeedSelection,
    ThresholdMode, DEFAULT_MAX_ROUNDS,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "cascade_sim")]
#[command(about = "Independent Cascade and Linear Threshold diffusion experiments")]
struct Args {
    /// Random seed for reproducibility (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one Independent Cascade and print its trace
    Ic {
        /// Graph description (JSON)
        #[arg(long)]
        graph: PathBuf,
        /// Seed node; a random node when omitted
        #[arg(long)]
        source: Option<String>,
        /// Activation probability
        #[arg(long, default_value_t = 0.1)]
        p: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },
    /// Run one Linear Threshold diffusion from random seeds and print node states
    Lt {
        #[arg(long)]
        graph: PathBuf,
        /// Number of random seeds
        #[arg(long, default_value_t = 5)]
        k: usize,
        /// Shared threshold; random per node when omitted
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Run the full experiment and write result files
    Analyze {
        #[arg(long)]
        graph: PathBuf,
        /// TOML configuration; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(long, default_value = "output")]
        output: PathBuf,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AnalysisError> {
    match args.command {
        Command::Ic {
            graph,
            source,
            p,
            max_rounds,
        } => {
            let graph = load_graph(&graph)?;
            let mut rng = seeded(args.seed.unwrap_or(42));
            let engine = IndependentCascade::new(p, max_rounds)?;
            let source = match source {
                Some(s) => s,
                None => select_seeds(&graph, SeedSelection::Random, 1, &mut rng)?
                    .into_iter()
                    .next()
                    .unwrap_or_default(),
            };

            let out = engine.run(&graph, &source, &mut rng)?;
            println!("IC from {} with p={}", source, p);
            for (round, nodes) in out.cascade.trace().rounds().iter().enumerate() {
                let names: Vec<&str> = nodes.iter().map(String::as_str).collect();
                println!("  round {:>3}: {}", round, names.join(", "));
            }
            println!(
                "activated {} of {} nodes in {} rounds{}",
                out.activated_count(),
                graph.node_count(),
                out.round_count(),
                if out.truncated { " (truncated)" } else { "" }
            );
        }
        Command::Lt {
            graph,
            k,
            threshold,
        } => {
            let graph = load_graph(&graph)?;
            let mut rng = seeded(args.seed.unwrap_or(42));
            let mode = match threshold {
                Some(value) => ThresholdMode::Fixed { value },
                None => ThresholdMode::AutoRandom,
            };
            let engine = LinearThreshold::new(mode)?;
            let seeds = select_seeds(&graph, SeedSelection::Random, k, &mut rng)?;

            let out = engine.run(&graph, &seeds, &mut rng)?;
            println!("LT from {} seeds ({})", seeds.len(), mode.label());
            println!("{:<20} {:>6} {:>9} {:>9} {:>5}", "node", "degree", "threshold", "activated", "step");
            for row in lt_summary(&graph, &out) {
                let step = row
                    .activation_step
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:>6} {:>9.3} {:>9} {:>5}",
                    row.node, row.degree, row.threshold, row.activated, step
                );
            }
            println!(
                "activated {} of {} nodes in {} rounds",
                out.activated_count(),
                graph.node_count(),
                out.round_count()
            );
        }
        Command::Analyze {
            graph,
            config,
            output,
        } => {
            let graph = load_graph(&graph)?;
            let mut config = match config {
                Some(path) => AnalysisConfig::from_file(&path)?,
                None => AnalysisConfig::default(),
            };
            if let Some(seed) = args.seed {
                config.rng_seed = seed;
            }
            info!(rng_seed = config.rng_seed, "starting experiment");

            let report = run_experiment(&graph, &config, &mut seeded(config.rng_seed))?;
            let mut writer = RecordWriter::new(&output)?;
            let summary = writer.write_report(&report)?;

            println!("{} | {}", summary.ic_label, summary.lt_label);
            for record in &report.comparison {
                println!(
                    "  {:<4} {:<20} activated {:>5} rounds {:>3}",
                    record.model, record.seed, record.activated_count, record.round_count
                );
            }
            if summary.sweep_failures > 0 {
                println!("{} sweep values failed, see sweep_failures.jsonl", summary.sweep_failures);
            }
            println!("results written to {}", writer.output_dir().display());
        }
        Command::DefaultConfig => {
            print!("{}", default_config_toml()?);
        }
    }
    Ok(())
}
