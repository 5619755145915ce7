use anyhow::{Context, Result};
use flowmark_config::Config;
use flowmark_engine::{NamePolicy, splice_document};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "[--strict|--permissive] <parse|remark|legacy> <BLOCK> | scan [FILE]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Parse(String),
    Remark(String),
    Legacy(String),
    /// `None` reads from stdin.
    Scan(Option<PathBuf>),
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    policy: Option<NamePolicy>,
}

/// Parses arguments after the program name. The last policy flag wins.
fn parse_args(args: &[String]) -> Option<Invocation> {
    let mut policy = None;
    let mut positional = vec![];
    for arg in args {
        match arg.as_str() {
            "--strict" => policy = Some(NamePolicy::Strict),
            "--permissive" => policy = Some(NamePolicy::Permissive),
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        ["parse", block] => Command::Parse(block.to_string()),
        ["remark", block] => Command::Remark(block.to_string()),
        ["legacy", block] => Command::Legacy(block.to_string()),
        ["scan"] | ["scan", "-"] => Command::Scan(None),
        ["scan", file] => Command::Scan(Some(PathBuf::from(*file))),
        _ => return None,
    };
    Some(Invocation { command, policy })
}

fn load_config() -> Config {
    log::debug!("Config path: {}", Config::config_path().display());
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Continuing with default settings");
            Config::default()
        }
    }
}

fn run(invocation: Invocation, mut config: Config) -> Result<String> {
    if let Some(policy) = invocation.policy {
        config.name_policy = policy;
    }
    let parser = config.parser();

    let json = match invocation.command {
        Command::Parse(block) => serde_json::to_string_pretty(&parser.parse(&block))?,
        Command::Remark(block) => {
            serde_json::to_string_pretty(&parser.parse_to_remark_format(&block))?
        }
        Command::Legacy(block) => {
            serde_json::to_string_pretty(&parser.parse_interaction_format(&block))?
        }
        Command::Scan(path) => {
            let source = read_source(path)?;
            let fragments = splice_document(&source, &parser, &config.element_name);
            log::info!("spliced {} fragments", fragments.len());
            serde_json::to_string_pretty(&fragments)?
        }
    };
    Ok(json)
}

fn read_source(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            let path = Config::expand_path(&path).unwrap_or(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("flowmark");

    let Some(invocation) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} {USAGE}");
        process::exit(1);
    };

    let output = run(invocation, load_config())?;
    println!("{output}");
    Ok(())
}
