//! Command line and `athr.conf` handling.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use athrd_consensus::Network;
use athrd_log as logging;

pub const DEFAULT_CONF_FILE: &str = "athr.conf";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub network: Network,
    pub conf_path: PathBuf,
    pub log_level: logging::Level,
    pub log_format: logging::Format,
    pub log_timestamps: bool,
    pub output: OutputFormat,
    pub show_checkpoints: bool,
    pub show_seeds: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CliAction {
    Run(Config),
    PrintHelp,
    PrintVersion,
}

pub fn parse_args() -> Result<CliAction, String> {
    parse_args_from(std::env::args().skip(1))
}

/// Records one network choice, rejecting a second, different one.
fn choose_network(
    current: &mut Option<Network>,
    network: Network,
    source: &str,
) -> Result<(), String> {
    match *current {
        Some(previous) if previous != network => Err(format!(
            "no such network: {source} conflicts with {previous}\n{}",
            usage()
        )),
        _ => {
            *current = Some(network);
            Ok(())
        }
    }
}

pub fn parse_args_from<I>(raw_args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut network: Option<Network> = None;
    let mut conf_path: Option<PathBuf> = None;
    let mut log_level: Option<logging::Level> = None;
    let mut log_format: Option<logging::Format> = None;
    let mut log_timestamps: Option<bool> = None;
    let mut output = OutputFormat::Text;
    let mut show_checkpoints = false;
    let mut show_seeds = false;

    let mut args = raw_args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(CliAction::PrintHelp),
            "--version" | "-V" | "version" => return Ok(CliAction::PrintVersion),
            "--network" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --network\n{}", usage()))?;
                let parsed = Network::parse(&value)
                    .ok_or_else(|| format!("no such network '{value}'\n{}", usage()))?;
                choose_network(&mut network, parsed, "--network")?;
            }
            "--testnet" => choose_network(&mut network, Network::Testnet, "--testnet")?,
            "--regtest" => choose_network(&mut network, Network::Regtest, "--regtest")?,
            "--conf" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --conf\n{}", usage()))?;
                conf_path = Some(PathBuf::from(value));
            }
            "--log-level" | "--loglevel" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-level\n{}", usage()))?;
                log_level = Some(
                    logging::Level::parse(&value)
                        .ok_or_else(|| format!("invalid log level '{value}'\n{}", usage()))?,
                );
            }
            "--log-format" | "--logformat" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-format\n{}", usage()))?;
                log_format = Some(
                    logging::Format::parse(&value)
                        .ok_or_else(|| format!("invalid log format '{value}'\n{}", usage()))?,
                );
            }
            "--log-timestamps" | "--logtimestamps" => log_timestamps = Some(true),
            "--no-log-timestamps" | "--no-logtimestamps" => log_timestamps = Some(false),
            "--json" => output = OutputFormat::Json,
            "--checkpoints" => show_checkpoints = true,
            "--seeds" => show_seeds = true,
            other => {
                return Err(format!("unknown argument '{other}'\n{}", usage()));
            }
        }
    }

    let conf_file = conf_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONF_FILE));
    if let Some(conf) = load_athr_conf(&conf_file)? {
        if network.is_none() {
            network = conf_network(&conf, &conf_file)?;
        }
        if log_level.is_none() {
            if let Some(raw) = conf_last(&conf, "loglevel") {
                log_level = Some(logging::Level::parse(raw).ok_or_else(|| {
                    format!("invalid loglevel '{raw}' in {}", conf_file.display())
                })?);
            }
        }
        if log_format.is_none() {
            if let Some(raw) = conf_last(&conf, "logformat") {
                log_format = Some(logging::Format::parse(raw).ok_or_else(|| {
                    format!("invalid logformat '{raw}' in {}", conf_file.display())
                })?);
            }
        }
        if log_timestamps.is_none() {
            if let Some(raw) = conf_last(&conf, "logtimestamps") {
                log_timestamps = Some(parse_conf_bool(raw).ok_or_else(|| {
                    format!("invalid logtimestamps '{raw}' in {}", conf_file.display())
                })?);
            }
        }
    }

    let defaults = logging::LogConfig::default();
    Ok(CliAction::Run(Config {
        network: network.unwrap_or(Network::Main),
        conf_path: conf_file,
        log_level: log_level.unwrap_or(defaults.level),
        log_format: log_format.unwrap_or(defaults.format),
        log_timestamps: log_timestamps.unwrap_or(defaults.timestamps),
        output,
        show_checkpoints,
        show_seeds,
    }))
}

fn conf_last<'a>(conf: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    conf.get(key)
        .and_then(|values| values.last())
        .map(String::as_str)
}

fn conf_flag(
    conf: &HashMap<String, Vec<String>>,
    key: &str,
    conf_file: &Path,
) -> Result<bool, String> {
    match conf_last(conf, key) {
        None => Ok(false),
        Some(raw) => parse_conf_bool(raw)
            .ok_or_else(|| format!("invalid {key} value '{raw}' in {}", conf_file.display())),
    }
}

fn conf_network(
    conf: &HashMap<String, Vec<String>>,
    conf_file: &Path,
) -> Result<Option<Network>, String> {
    let mut network = None;
    if let Some(raw) = conf_last(conf, "network") {
        let parsed = Network::parse(raw).ok_or_else(|| {
            format!("no such network '{raw}' in {}\n{}", conf_file.display(), usage())
        })?;
        network = Some(parsed);
    }
    if conf_flag(conf, "testnet", conf_file)? {
        choose_network(&mut network, Network::Testnet, "testnet=1")?;
    }
    if conf_flag(conf, "regtest", conf_file)? {
        choose_network(&mut network, Network::Regtest, "regtest=1")?;
    }
    Ok(network)
}

/// Reads `key=value` lines; a missing file is not an error.
pub fn load_athr_conf(path: &Path) -> Result<Option<HashMap<String, Vec<String>>>, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("failed to read {}: {err}", path.display())),
    };
    Ok(Some(parse_conf(&contents)))
}

pub fn parse_conf(contents: &str) -> HashMap<String, Vec<String>> {
    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for raw_line in contents.lines() {
        let mut line = raw_line.trim();
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(idx) = line.find(['#', ';']) {
            line = &line[..idx];
        }
        line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, "1"),
        };
        if key.is_empty() {
            continue;
        }
        out.entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
    out
}

pub fn parse_conf_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return Some(true);
    }
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

pub fn usage() -> String {
    [
        "Usage:",
        "  athrd [options]",
        "",
        "Options:",
        "  --help, -h  Print this help and exit",
        "  --version, -V  Print version and exit",
        "  --network  Network to select (main|test|regtest|unittest) (default: main)",
        "  --testnet  Shorthand for --network test",
        "  --regtest  Shorthand for --network regtest",
        "  --conf  Config file path (default: ./athr.conf)",
        "  --log-level  Log verbosity (error|warn|info|debug|trace) (default: info)",
        "  --log-format  Log output format (text|json) (default: text)",
        "  --log-timestamps  Enable timestamps in text logs (default: on)",
        "  --no-log-timestamps  Disable timestamps in text logs",
        "  --json  Print the parameter report as JSON",
        "  --checkpoints  Include every checkpoint in the report",
        "  --seeds  Include DNS and fixed seeds in the report",
        "",
        "Config file keys: network, testnet, regtest, loglevel, logformat, logtimestamps",
    ]
    .join("\n")
}
