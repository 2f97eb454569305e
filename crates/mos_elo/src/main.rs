//! MOS-Elo CLI
//!
//! Compute codec Elo ratings from subjective score files and run bootstrap analysis.

use anyhow::{bail, Context};
use elo_core::{replay, RatingPair, ScoreProtocol};
use mos_elo::{
    read_paired_scores, read_scores, save_json, BootstrapMode, BootstrapReport, RunConfig,
    DEFAULT_CONFIG_FILE,
};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("MOS-Elo Runner");
    println!();
    println!("Usage:");
    println!("  mos_elo [OPTIONS] <command> [ARGS]");
    println!();
    println!("Commands:");
    println!("  replay <scores>                   One sequential pass, printing final ratings");
    println!("  bootstrap <scores>                Shuffle bootstrap over a CCR/diff corpus");
    println!("  bootstrap-acr <scores_a> <scores_b>  Batch bootstrap over two ACR lists");
    println!();
    println!("Options (accepted before or after the command):");
    println!("  --config FILE   Settings file (default: {})", DEFAULT_CONFIG_FILE);
    println!("  --rounds N      Bootstrap rounds");
    println!("  --seed S        Seed for a reproducible run");
    println!("  --protocol P    ccr | pair-ccr | diff");
    println!("  --reset         Restart every round from the initial ratings");
    println!("  --out FILE      Write the JSON result to FILE");
    println!();
    println!("Score files hold one integer per line.");
    println!();
    println!("Examples:");
    println!("  mos_elo replay MOS");
    println!("  mos_elo bootstrap MOS --rounds 5000 --seed 7 --out report.json");
    println!("  mos_elo --config runs.toml bootstrap-acr mosA mosB --rounds 5000");
}

/// Command name plus the flags shared by every subcommand
#[derive(Debug)]
struct Options {
    command: Option<String>,
    positional: Vec<String>,
    help: bool,
    config_path: PathBuf,
    rounds: Option<usize>,
    seed: Option<u64>,
    protocol: Option<ScoreProtocol>,
    reset: bool,
    out: Option<PathBuf>,
}

impl Options {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut options = Options {
            command: None,
            positional: Vec::new(),
            help: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            rounds: None,
            seed: None,
            protocol: None,
            reset: false,
            out: None,
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--rounds" | "-n" => {
                    options.rounds = Some(
                        value(args, i)?
                            .parse::<usize>()
                            .with_context(|| format!("invalid round count '{}'", args[i + 1]))?,
                    );
                    i += 1;
                }
                "--seed" | "-s" => {
                    options.seed = Some(
                        value(args, i)?
                            .parse::<u64>()
                            .with_context(|| format!("invalid seed '{}'", args[i + 1]))?,
                    );
                    i += 1;
                }
                "--protocol" | "-p" => {
                    options.protocol = Some(value(args, i)?.parse::<ScoreProtocol>()?);
                    i += 1;
                }
                "--config" | "-c" => {
                    options.config_path = PathBuf::from(value(args, i)?);
                    i += 1;
                }
                "--out" | "-o" => {
                    options.out = Some(PathBuf::from(value(args, i)?));
                    i += 1;
                }
                "--reset" => options.reset = true,
                "--help" | "-h" => options.help = true,
                flag if flag.starts_with('-') => bail!("unknown option: {}", flag),
                arg if options.command.is_none() => options.command = Some(arg.to_string()),
                arg => options.positional.push(arg.to_string()),
            }
            i += 1;
        }

        Ok(options)
    }

    /// Config file values with command-line overrides applied
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = RunConfig::load(&self.config_path)?;
        if let Some(rounds) = self.rounds {
            config.bootstrap.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.bootstrap.seed = Some(seed);
        }
        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        if self.reset {
            config.bootstrap.carry_over = false;
        }
        Ok(config)
    }

    fn require_paths(&self, count: usize, what: &str) -> anyhow::Result<Vec<&Path>> {
        if self.positional.len() != count {
            let files = if count == 1 {
                "one score file"
            } else {
                "two score files"
            };
            bail!("{} requires {}", what, files);
        }
        Ok(self.positional.iter().map(Path::new).collect())
    }
}

fn value(args: &[String], i: usize) -> anyhow::Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", args[i]))
}

fn run_replay(options: &Options) -> anyhow::Result<()> {
    let paths = options.require_paths(1, "replay")?;
    let config = options.run_config()?;
    let scores = read_scores(paths[0])?;

    let start = RatingPair::try_new(
        config.bootstrap.initial_rating_a,
        config.bootstrap.initial_rating_b,
    )?;
    let trajectory = replay(start, &scores, config.protocol)?;
    info!(judgments = scores.len(), protocol = %config.protocol, "replayed corpus");

    if let Some(last) = trajectory.last() {
        println!("=== Replay: {} ({}) ===", paths[0].display(), config.protocol);
        println!("Judgments: {}", trajectory.len());
        println!("Codec-A: {:.0}\tCodec-B: {:.0}", last.rating_a, last.rating_b);
    }

    if let Some(out) = &options.out {
        save_json(&trajectory, out)?;
        println!("Trajectory written to {}", out.display());
    }
    Ok(())
}

fn run_bootstrap(options: &Options) -> anyhow::Result<()> {
    let paths = options.require_paths(1, "bootstrap")?;
    let config = options.run_config()?;
    let bootstrap = config.bootstrap()?;
    let scores = read_scores(paths[0])?;

    info!(
        rounds = config.bootstrap.rounds,
        judgments = scores.len(),
        "running shuffle bootstrap"
    );
    let series = bootstrap.run_shuffle_seeded(&scores, config.protocol)?;

    let report = BootstrapReport::new(
        BootstrapMode::Shuffle,
        Some(config.protocol),
        scores.len(),
        config.bootstrap,
        series,
    )?;
    finish(&report, options.out.as_deref())
}

fn run_bootstrap_acr(options: &Options) -> anyhow::Result<()> {
    let paths = options.require_paths(2, "bootstrap-acr")?;
    let config = options.run_config()?;
    let bootstrap = config.bootstrap()?;
    let (scores_a, scores_b) = read_paired_scores(paths[0], paths[1])?;

    info!(
        rounds = config.bootstrap.rounds,
        judgments = scores_a.len(),
        "running batch bootstrap"
    );
    let series = bootstrap.run_batch_seeded(&scores_a, &scores_b)?;

    let report = BootstrapReport::new(
        BootstrapMode::Batch,
        None,
        scores_a.len(),
        config.bootstrap,
        series,
    )?;
    finish(&report, options.out.as_deref())
}

fn finish(report: &BootstrapReport, out: Option<&Path>) -> anyhow::Result<()> {
    report.print_report();
    if let Some(out) = out {
        report.save(out)?;
        println!("Report written to {}", out.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(&args)?;
    if options.help {
        print_usage();
        return Ok(());
    }

    match options.command.as_deref() {
        Some("replay") => run_replay(&options),
        Some("bootstrap") => run_bootstrap(&options),
        Some("bootstrap-acr") | Some("acr") => run_bootstrap_acr(&options),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}
