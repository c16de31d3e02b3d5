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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Terminal setup failed")]
    TerminalSetup,
}

impl AppError {
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 30;
    pub const TERMINAL_SETUP_EXIT_CODE: i32 = 31;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig => Self::INVALID_CONFIG_EXIT_CODE,
            Self::TerminalSetup => Self::TERMINAL_SETUP_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidConfig => {
                "The configuration is invalid. Check config.toml and the command-line flags."
            }
            Self::TerminalSetup => "Could not set up the terminal. Run irc-overlay in a TTY.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(AppError::InvalidConfig.exit_code(), AppError::TerminalSetup.exit_code());
    }
}
