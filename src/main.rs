use anyhow::{anyhow, Context, Result};
use clap::Parser;
use repro_options::{check, parse, serialize, Options, FIELDS};
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CheckArgs, Command, EnumerateArgs, ParseArgs, RootArgs, SerializeArgs};

fn main() -> Result<ExitCode> {
    let args = RootArgs::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Parse(args) => cmd_parse(args),
        Command::Check(args) => cmd_check(args),
        Command::Serialize(args) => cmd_serialize(args),
        Command::Enumerate(args) => cmd_enumerate(args),
        Command::Fields => cmd_fields(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_parse(args: ParseArgs) -> Result<ExitCode> {
    let opts = parse(&args.text).with_context(|| format!("parse options {:?}", args.text))?;
    let json = serde_json::to_string_pretty(&opts).context("serialize options JSON")?;
    println!("{json}");
    if args.check {
        return Ok(report_check(&opts));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: CheckArgs) -> Result<ExitCode> {
    let opts = parse(&args.text).with_context(|| format!("parse options {:?}", args.text))?;
    Ok(report_check(&opts))
}

fn cmd_serialize(args: SerializeArgs) -> Result<ExitCode> {
    let opts = read_options_json(&args.input)?;
    if args.check {
        check(&opts).map_err(|err| anyhow!("invalid options: {}: {err}", err.code()))?;
    }
    println!("{}", serialize(&opts));
    Ok(ExitCode::SUCCESS)
}

fn cmd_enumerate(args: EnumerateArgs) -> Result<ExitCode> {
    let all = if args.all {
        repro_options::all_options_permutations()
    } else {
        repro_options::all_options_single()
    };
    for opts in &all {
        println!("{opts}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_fields() -> Result<ExitCode> {
    for desc in &FIELDS {
        println!(
            "{:<12} {:<7} {} ({} sampled)",
            desc.name,
            desc.kind(),
            desc.domain,
            repro_options::enumerate::sample_count(&desc.domain)
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn report_check(opts: &Options) -> ExitCode {
    match check(opts) {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(code = err.code(), "options failed validation");
            println!("invalid: {}: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}

fn read_options_json(path: &Path) -> Result<Options> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("read options JSON from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("read {}", path.display()))?
    };
    serde_json::from_slice(&bytes).context("parse options JSON")
}
