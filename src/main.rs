// irc_overlay — An in-game IRC chat overlay for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Context as _;
use clap::Parser;
use irc_overlay::Cli;
use irc_overlay::config::{self, ResolvedConfig};
use irc_overlay::error::AppError;
use std::fs::OpenOptions;

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        if let Some(app_error) = extract_app_error(&err) {
            eprintln!("{}", app_error.user_message());
            if let Some(cause) = err.chain().nth(1) {
                eprintln!("  {cause}");
            }
            std::process::exit(app_error.exit_code());
        }
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = load_config(&cli).context(AppError::InvalidConfig)?;
    tracing::info!(
        nickname = %config.nickname,
        channel = %config.channel,
        users = config.users.len(),
        anim_step = config.anim_step,
        "configuration resolved"
    );

    // Everything runs on one thread; the loopback echo channel is drained by the frame loop.
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(async move {
        let mut app = irc_overlay::app::App::new(&config);
        irc_overlay::app::run_tui(&mut app).await
    })
}

fn load_config(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    let path = cli.config.clone().or_else(config::default_config_path);
    let file = match path.as_deref() {
        Some(path) => {
            let file = config::load_config_file(path)?;
            tracing::debug!(path = %path.display(), found = file.is_some(), "config file");
            file
        }
        None => None,
    };
    Ok(config::resolve(file, cli)?)
}

fn extract_app_error(err: &anyhow::Error) -> Option<AppError> {
    err.downcast_ref::<AppError>()
        .cloned()
        .or_else(|| err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned()))
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "RUST_LOG is set, but tracing is disabled without --log-file <PATH>. \
Use --log-file to enable diagnostics."
            );
        }
        return Ok(());
    };

    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        log_filter = %directives,
        log_append = cli.log_append,
        "tracing enabled"
    );

    Ok(())
}
