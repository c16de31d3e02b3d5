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

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod highlight;
pub mod panel;
pub mod store;
pub mod transport;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "irc-overlay", about = "In-game IRC chat overlay for the terminal")]
pub struct Cli {
    /// Nickname used for the loopback connection
    #[arg(long)]
    pub nick: Option<String>,

    /// Channel shown in the chat panel title
    #[arg(long)]
    pub channel: Option<String>,

    /// Config file (defaults to <config dir>/irc-overlay/config.toml)
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Panel animation progress per frame, in (0, 1]
    #[arg(long)]
    pub anim_step: Option<f32>,

    /// Write tracing diagnostics to this file
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
