use albumwatch::configuration::{create_config, DEFAULT_CONFIG_FILE};
use albumwatch::startup::run;
use albumwatch::DEFAULT_POLL_INTERVAL;
use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Respects RUST_LOG; stays quiet by default so the console shows notifications only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Command::new("albumwatch")
        .about("💿 Watches a remote album collection and reports new albums 💿")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file with the [SERVER] section")
                .default_value(DEFAULT_CONFIG_FILE)
                .global(true),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .short('i')
                .value_name("SECONDS")
                .help("Seconds to wait between polls")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("5"),
        )
        .subcommand(
            Command::new("config").about("🛠️ Create a template configuration file"),
        )
        .get_matches();

    match args.subcommand() {
        Some(("config", sub_args)) => {
            let cfg_file = config_path(sub_args);
            println!("\x1b[1m\x1b[34mConfiguring albumwatch...\x1b[0m");
            create_config(Path::new(cfg_file))
                .with_context(|| format!("Unable to write configuration to '{}'", cfg_file))
        }
        _ => {
            let cfg_file = config_path(&args);
            let interval = args
                .get_one::<u64>("interval")
                .copied()
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_POLL_INTERVAL);
            run(cfg_file, interval).await
        }
    }
}

fn config_path(args: &ArgMatches) -> &str {
    args.get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE)
}
