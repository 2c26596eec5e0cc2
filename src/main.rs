//! CLI entry point for the fish study tool.
//!
//! Runs the built-in field survey and prints its report, species trends,
//! or per-sample details.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use fish_study::{
    demo::demo_study,
    labels::{Labels, Locale},
    output::{OutputFormat, write_trends},
    study::FishStudy,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fish_study")]
#[command(about = "Field survey reporting for fish studies", long_about = None)]
struct Cli {
    /// Built-in label set for the report
    #[arg(short, long, value_enum, default_value_t = Locale::En, global = true)]
    locale: Locale,

    /// JSON file overriding report labels
    #[arg(long, value_name = "FILE", global = true)]
    labels: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the study report
    Report,
    /// Print the species distribution and observation count
    Trends {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print classification, metrics and recording details for each observation
    Samples,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/fish_study.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fish_study.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let labels = match &cli.labels {
        Some(path) => {
            info!(path = %path, "Loading report labels");
            Labels::load(path)?
        }
        None => Labels::for_locale(cli.locale),
    };

    let mut study = demo_study(Local::now().naive_local());

    match cli.command {
        None => {
            println!("{}", study.generate_report(&labels));
            write_trends(std::io::stdout().lock(), &study.analyze_trends(), OutputFormat::Text)?;
        }
        Some(Commands::Report) => {
            print!("{}", study.generate_report(&labels));
        }
        Some(Commands::Trends { format }) => {
            write_trends(std::io::stdout().lock(), &study.analyze_trends(), format)?;
        }
        Some(Commands::Samples) => {
            print_samples(&mut study, &labels);
        }
    }

    Ok(())
}

/// Prints every sample's classification and metrics, then analyzes and
/// exports each sound recording.
#[tracing::instrument(skip_all, fields(project = %study.project_name()))]
fn print_samples(study: &mut FishStudy, labels: &Labels) {
    for (i, obs) in study.observations_mut().enumerate() {
        let (lat, lon) = obs.location().coordinates();
        println!(
            "Observation {} at {} ({:.4}, {:.4}), {} by {}",
            i + 1,
            obs.location().name(),
            lat,
            lon,
            obs.date().format("%Y-%m-%d %H:%M"),
            obs.observer()
        );

        for sample in obs.fish_samples() {
            let metrics = sample.calculate_metrics();
            println!("  {}", sample.classify_species());
            println!(
                "    ratio={:.4} size={}",
                metrics.length_weight_ratio,
                metrics.size_category.label()
            );
        }

        for recording in obs.sound_recordings_mut() {
            let analysis = recording.analyze_sound();
            println!("  {}", recording.export_data());
            println!("    format={} duration={}s", analysis.format, analysis.duration);
        }

        if let Some(trap) = obs.trap_data() {
            println!(
                "  Trap {}: {} caught, efficiency {:.2}/h",
                trap.trap_type(),
                trap.catch_count(),
                trap.calculate_efficiency()
            );
        }

        if !obs.photos().is_empty() {
            println!("  {}", obs.photo_listing(labels));
        }
    }

    info!(observations = study.observations().len(), "Sample details printed");
}
