use std::fs;
use std::sync::{Mutex, MutexGuard};

use athrd::config::{parse_args_from, CliAction, Config, OutputFormat};
use athrd::run_with_config;
use athrd_consensus::Network;

// run_with_config selects on the process-wide registry.
static SELECTOR: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    SELECTOR.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn config_from(args: &[&str]) -> Result<Config, String> {
    match parse_args_from(args.iter().map(|s| s.to_string()))? {
        CliAction::Run(config) => Ok(config),
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn conf_file_selects_network_and_logging() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("athr.conf");
    fs::write(
        &path,
        "# athrd\nregtest=1\nloglevel=debug\nlogformat=json\nlogtimestamps=0\n",
    )
    .expect("write conf");
    let path = path.to_string_lossy().into_owned();

    let config = config_from(&["--conf", &path]).expect("config");
    assert_eq!(config.network, Network::Regtest);
    assert_eq!(config.log_level, athrd_log::Level::Debug);
    assert_eq!(config.log_format, athrd_log::Format::Json);
    assert!(!config.log_timestamps);
}

#[test]
fn command_line_wins_over_conf_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("athr.conf");
    fs::write(&path, "testnet=1\nregtest=1\nloglevel=trace\n").expect("write conf");
    let path = path.to_string_lossy().into_owned();

    let config = config_from(&["--conf", &path, "--network", "main", "--log-level", "warn"])
        .expect("config");
    assert_eq!(config.network, Network::Main);
    assert_eq!(config.log_level, athrd_log::Level::Warn);

    let err = config_from(&["--conf", &path]).unwrap_err();
    assert!(err.starts_with("no such network"), "{err}");
}

#[test]
fn invalid_conf_value_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("athr.conf");
    fs::write(&path, "network=signet\n").expect("write conf");
    let path = path.to_string_lossy().into_owned();
    let err = config_from(&["--conf", &path]).unwrap_err();
    assert!(err.starts_with("no such network 'signet'"), "{err}");
}

#[test]
fn testnet_text_report() {
    let _guard = lock();
    let mut config =
        config_from(&["--testnet", "--conf", "/nonexistent/athr.conf"]).expect("config");
    config.log_level = athrd_log::Level::Error;
    let text = run_with_config(&config).expect("run");
    assert!(text.starts_with("network: test\n"), "{text}");
    assert!(text.contains("default port: 24854"));
    assert!(text.contains(
        "genesis hash: 0000003c94d37c93846cd80ea6c1735c0cd0aa43de717445c81ad41eec76941f"
    ));
}

#[test]
fn unittest_json_report() {
    let _guard = lock();
    let mut config = config_from(&[
        "--network",
        "unittest",
        "--json",
        "--checkpoints",
        "--conf",
        "/nonexistent/athr.conf",
    ])
    .expect("config");
    config.log_level = athrd_log::Level::Error;
    assert_eq!(config.output, OutputFormat::Json);

    let json = run_with_config(&config).expect("run");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["network"], "unittest");
    assert_eq!(value["default_port"], 26_854);
    assert_eq!(value["checkpoints"]["entries"][3]["height"], 100_000);
    assert_eq!(
        value["genesis"]["hash"],
        "000009411fe9341392a7fc47bdb5759bcfb7e2053e2172b2a96f33bf61736708"
    );
}
