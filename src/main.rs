use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zemedic_demo::catalog::{catalog, Category};
use zemedic_demo::cli_output::{OutputMode, OutputWriter};
use zemedic_demo::config::DemoConfig;
use zemedic_demo::generator::{demo_rng, DemoGenerator};
use zemedic_demo::heatmap::overlay_regions;
use zemedic_demo::record::{AnalysisRecord, RecentAnalyses};
use zemedic_demo::report::write_report;

#[derive(Parser)]
#[command(name = "zemedic-demo")]
#[command(about = "Generate simulated medical-imaging analysis results for demos", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: <config dir>/zemedic/demo.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate demo analysis results
    Generate {
        /// Analysis category (chest, skin, ct); defaults to the configured one
        #[arg(short, long)]
        category: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of analyses to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Include heatmap overlay geometry
        #[arg(long)]
        heatmap: bool,

        /// Output format (auto, human, plain, json)
        #[arg(short, long, default_value = "auto")]
        format: String,

        /// Write a markdown report of the last analysis to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Simulated analysis delay in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
    },

    /// List the condition catalogs
    Catalog {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output format (auto, human, plain, json)
        #[arg(short, long, default_value = "auto")]
        format: String,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output format (auto, human, plain, json)
        #[arg(short, long, default_value = "auto")]
        format: String,
    },

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stderr keeps stdout clean for JSON
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = run(cli).await {
        OutputWriter::new(OutputMode::auto()).error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            category,
            seed,
            count,
            heatmap,
            format,
            report,
            latency_ms,
        } => {
            if count == 0 {
                bail!("--count must be at least 1");
            }

            let config = DemoConfig::load(cli.config.as_deref())?;
            let category = match category {
                Some(name) => name.parse::<Category>()?,
                None => config.default_category,
            };
            let seed = seed.or(config.seed);
            let latency = Duration::from_millis(latency_ms.unwrap_or(config.latency_ms));
            let output = OutputWriter::new(OutputMode::from_format(&format)?);

            debug!("Generating {} {} analysis(es), seed {:?}", count, category, seed);

            let generator = DemoGenerator::new().with_general_picks(config.general_picks);
            let mut rng = demo_rng(seed);
            let mut recent = RecentAnalyses::new(config.recent_limit);
            let mut batch = Vec::with_capacity(count);

            for i in 0..count {
                if !latency.is_zero() {
                    info!("Analyzing {} image...", category.display_name());
                    tokio::time::sleep(latency).await;
                }

                let result = generator.generate(category, &mut rng);
                let mut record = AnalysisRecord::new(category, result);
                if count > 1 {
                    record = record.with_sequence(i + 1);
                }
                if heatmap {
                    let overlay = overlay_regions(&record.predictions, &mut rng);
                    record = record.with_overlay(overlay);
                }

                if output.mode() != OutputMode::Json {
                    output.record(&record)?;
                }
                batch.push(record.clone());
                recent.push(record);
            }

            if output.mode() == OutputMode::Json {
                match batch.as_slice() {
                    [single] => output.json(single)?,
                    _ => output.json(&batch)?,
                }
            } else if count > 1 {
                output.recent(&recent)?;
            }

            if let (Some(path), Some(last)) = (report, recent.latest()) {
                write_report(last, &path)?;
                output.success(&format!("Report written to {}", path.display()));
            }

            Ok(())
        }

        Commands::Catalog { category, format } => {
            let output = OutputWriter::new(OutputMode::from_format(&format)?);
            let categories = match category {
                Some(name) => vec![name.parse::<Category>()?],
                None => Category::ALL.to_vec(),
            };
            let entries: Vec<_> = categories.into_iter().map(|c| (c, catalog(c))).collect();
            output.catalog(&entries)
        }

        Commands::Config { action } => {
            let path = match cli.config {
                Some(path) => path,
                None => DemoConfig::config_file_path()?,
            };

            match action {
                ConfigAction::Show { format } => {
                    let output = OutputWriter::new(OutputMode::from_format(&format)?);
                    let config = DemoConfig::load(Some(path.as_path()))?;
                    if output.mode() == OutputMode::Json {
                        return output.json(&config);
                    }

                    output.section("Demo Configuration");
                    output.table(&[
                        ("Default category", config.default_category.to_string()),
                        (
                            "Seed",
                            config
                                .seed
                                .map(|s| s.to_string())
                                .unwrap_or_else(|| "random".to_string()),
                        ),
                        ("General picks", config.general_picks.to_string()),
                        ("Recent limit", config.recent_limit.to_string()),
                        ("Latency", format!("{} ms", config.latency_ms)),
                        ("Config file", path.display().to_string()),
                    ]);
                    if !path.exists() {
                        output.warning("Config file not found, showing defaults");
                    }
                    Ok(())
                }

                ConfigAction::Init { force } => {
                    if path.exists() && !force {
                        bail!(
                            "Config already exists at {}. Use --force to overwrite.",
                            path.display()
                        );
                    }
                    DemoConfig::default().save(&path)?;
                    OutputWriter::new(OutputMode::auto())
                        .success(&format!("Wrote default config to {}", path.display()));
                    Ok(())
                }
            }
        }
    }
}
