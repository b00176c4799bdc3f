mod cmd;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use roulette_core::config::RouletteConfig;

use crate::cmd::CliCommand;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
  /// INI file with spin settings and the default meetings
  #[clap(long, global = true, value_parser)]
  config: Option<PathBuf>,

  #[clap(subcommand)]
  command: CliCommand,
}

#[tokio::main]
async fn main() {
  let default_log_level = "info";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  let cli = Cli::parse();
  let res = match RouletteConfig::load(cli.config.as_deref()) {
    Ok(config) => cli.command.run(&config).await,
    Err(err) => Err(err),
  };

  if let Err(err) = res {
    error!("{err:?}");
    process::exit(1);
  }
}
