use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use vfxops_core::bytes_to_mb;
use vfxops_toolkit::{
    format_bytes, format_frame_ranges, init_logging, render_publishes_text, render_validation_text, DiskReport,
    ExitStatus, ListFilters, LogConfig, PublishListing, Toolkit, ValidationReport,
};

#[derive(Parser)]
#[command(name = "vfxops", version, about = "VFX Ops Toolkit - render validation, disk usage and publish tracking")]
struct Cli {
    /// Config file (YAML). May be repeated; the last one wins. Defaults to ./toolkit.yaml when present.
    #[arg(long, global = true)]
    config: Vec<PathBuf>,

    /// Directory for toolkit.log (overrides `log_dir` from config)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Mirror info-level logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report missing frames for every shot (exit 1 when any are missing)
    Validate {
        #[arg(long)]
        json: bool,
    },

    /// Report render disk usage per shot
    Disk {
        #[arg(long)]
        json: bool,
    },

    /// Record a publish snapshot for one shot (no files are moved)
    Publish {
        #[arg(long)]
        show: String,
        #[arg(long)]
        shot: String,
        #[arg(long)]
        version: String,
        #[arg(long, default_value = "")]
        note: String,
        /// Also write <publish_root>/<show>/<shot>/<version>/publish.json
        #[arg(long)]
        manifest: bool,
        #[arg(long)]
        publish_root: Option<PathBuf>,
    },

    /// List recorded publishes, newest first
    ListPublishes {
        #[arg(long)]
        show: Option<String>,
        #[arg(long)]
        shot: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Write a small demo frame sequence (frame 3 missing)
    DemoFrames {
        /// Render directory to write into (defaults to the demo shot under shows_root)
        #[arg(long)]
        dest: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(ExitStatus::Error.code())
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitStatus> {
    let cwd = std::env::current_dir()?;
    let tk = Toolkit::load(cli.config.last().map(PathBuf::as_path), cwd)?;

    let log_dir = match &cli.log_dir {
        Some(p) => tk.cwd.join(p),
        None => tk.cfg.log_dir(&tk.cwd),
    };
    let _guard = init_logging(LogConfig {
        log_dir: &log_dir,
        verbose: cli.verbose,
    })?;

    match cli.cmd {
        Command::Validate { json } => {
            let results = tk.validate();
            if json {
                let report = ValidationReport {
                    shows_root: tk.shows_root().display().to_string(),
                    results: &results,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_validation_text(&results));
            }
            Ok(ExitStatus::for_validation(&results))
        }
        Command::Disk { json } => {
            let usage = tk.disk_usage();
            let report = DiskReport::new(
                tk.shows_root().display().to_string(),
                tk.cfg.thresholds.disk_warning_mb,
                &usage,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(ExitStatus::Success)
        }
        Command::Publish {
            show,
            shot,
            version,
            note,
            manifest,
            publish_root,
        } => {
            let record = tk.publish(&show, &shot, &version, &note)?;
            println!(
                "Publish recorded: {}/{} {} [{}]",
                record.show, record.shot, record.version, record.status
            );
            println!(
                "  frames: {} found, missing: {}",
                record.frames_found.len(),
                if record.missing_frames.is_empty() {
                    "none".to_string()
                } else {
                    format_frame_ranges(&record.missing_frames)
                }
            );
            println!(
                "  size: {} in {} files ({:.2} MB)",
                format_bytes(record.total_bytes),
                record.file_count,
                bytes_to_mb(record.total_bytes)
            );
            if manifest {
                let path = tk.write_manifest(&record, publish_root.as_deref())?;
                println!("Manifest written: {}", path.display());
            }
            Ok(ExitStatus::Success)
        }
        Command::ListPublishes { show, shot, limit, json } => {
            let records = tk.list_publishes(show.as_deref(), shot.as_deref(), limit)?;
            if json {
                let listing = PublishListing {
                    filters: ListFilters { show, shot, limit },
                    count: records.len(),
                    records: &records,
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", render_publishes_text(&records));
            }
            Ok(ExitStatus::Success)
        }
        Command::DemoFrames { dest } => {
            let dir = tk.make_demo_frames(dest.as_deref())?;
            println!("Wrote demo frames to {}", dir.display());
            Ok(ExitStatus::Success)
        }
    }
}
