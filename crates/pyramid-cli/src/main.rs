use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pyramid_cli::{commands, logging, PyramidConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Path to a pyramid JSON document")
}

fn cli() -> Command {
    Command::new("pyramid")
        .version(pyramid_cli::VERSION)
        .about("Validate and inspect strategic pyramid documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("validate")
                .about("Run every validation check and report issues")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                )
                .arg(
                    Arg::new("weighting-threshold")
                        .long("weighting-threshold")
                        .value_parser(value_parser!(f64))
                        .help("Override the minimum primary share for weighted commitments"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Show entity counts and commitments per driver")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("balance")
                .about("Show drivers whose commitment share is out of balance")
                .arg(input_arg()),
        )
}

fn input_path(args: &ArgMatches) -> anyhow::Result<&PathBuf> {
    args.get_one::<PathBuf>("input").context("missing --input")
}

fn run(matches: &ArgMatches) -> anyhow::Result<bool> {
    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = PyramidConfig::load(config_path)?;
    logging::init(&config.log_filter, matches.get_flag("log-json"))?;
    tracing::debug!(?config_path, ?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some((name, _)) = matches.subcommand() {
        tracing::info!(command = name, "dispatching");
    }

    let passed = match matches.subcommand() {
        Some(("validate", args)) => {
            if let Some(threshold) = args.get_one::<f64>("weighting-threshold") {
                config = config.with_weighting_threshold(*threshold);
            }
            let manager = commands::load_document(input_path(args)?)?;
            commands::validate(&manager, &config, args.get_flag("json"), &mut out)?
        }
        Some(("summary", args)) => {
            let manager = commands::load_document(input_path(args)?)?;
            commands::summary(&manager, &mut out)?;
            true
        }
        Some(("balance", args)) => {
            let manager = commands::load_document(input_path(args)?)?;
            commands::balance(&manager, &mut out)?;
            true
        }
        _ => anyhow::bail!("no subcommand given"),
    };
    out.flush()?;
    Ok(passed)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
