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

//! Named zero-argument commands the host can bind keys or a console to.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("command `{0}` is already registered")]
    Duplicate(String),
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("command `{name}` takes no arguments, got {count}")]
    UnexpectedArguments { name: String, count: usize },
}

pub struct CommandSpec<C> {
    pub name: &'static str,
    pub help: &'static str,
    run: fn(&mut C),
}

impl<C> std::fmt::Debug for CommandSpec<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec").field("name", &self.name).field("help", &self.help).finish()
    }
}

/// Command table over a context `C` that handlers mutate.
#[derive(Debug)]
pub struct CommandRegistry<C> {
    commands: BTreeMap<&'static str, CommandSpec<C>>,
}

impl<C> CommandRegistry<C> {
    pub fn new() -> Self {
        Self { commands: BTreeMap::new() }
    }

    pub fn register(
        &mut self,
        name: &'static str,
        help: &'static str,
        run: fn(&mut C),
    ) -> Result<(), CommandError> {
        if self.commands.contains_key(name) {
            return Err(CommandError::Duplicate(name.to_owned()));
        }
        self.commands.insert(name, CommandSpec { name, help, run });
        Ok(())
    }

    pub fn execute(&self, name: &str, ctx: &mut C) -> Result<(), CommandError> {
        let spec = self.commands.get(name).ok_or_else(|| CommandError::Unknown(name.to_owned()))?;
        tracing::debug!(command = spec.name, "executing command");
        (spec.run)(ctx);
        Ok(())
    }

    /// Parse and run a console line such as `"toggle_irc"`.
    pub fn execute_line(&self, line: &str, ctx: &mut C) -> Result<(), CommandError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let count = parts.count();
        if !self.commands.contains_key(name) {
            return Err(CommandError::Unknown(name.to_owned()));
        }
        if count > 0 {
            return Err(CommandError::UnexpectedArguments { name: name.to_owned(), count });
        }
        self.execute(name, ctx)
    }

    /// Registered commands sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec<C>> {
        self.commands.values()
    }
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bump(n: &mut u32) {
        *n += 1;
    }

    fn registry() -> CommandRegistry<u32> {
        let mut registry = CommandRegistry::new();
        registry.register("bump", "add one", bump).unwrap();
        registry
    }

    #[test]
    fn execute_runs_handler() {
        let registry = registry();
        let mut n = 0;
        registry.execute("bump", &mut n).unwrap();
        registry.execute_line("  bump  ", &mut n).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = registry();
        assert_eq!(
            registry.register("bump", "again", bump),
            Err(CommandError::Duplicate("bump".to_owned()))
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let registry = registry();
        let mut n = 0;
        assert_eq!(registry.execute("nope", &mut n), Err(CommandError::Unknown("nope".to_owned())));
        assert_eq!(registry.execute_line("", &mut n), Err(CommandError::Unknown(String::new())));
    }

    #[test]
    fn arguments_are_rejected() {
        let registry = registry();
        let mut n = 0;
        assert_eq!(
            registry.execute_line("bump 1 2", &mut n),
            Err(CommandError::UnexpectedArguments { name: "bump".to_owned(), count: 2 })
        );
        assert_eq!(n, 0);
    }

    #[test]
    fn iter_lists_help() {
        let registry = registry();
        let listed: Vec<_> = registry.iter().map(|c| (c.name, c.help)).collect();
        assert_eq!(listed, vec![("bump", "add one")]);
    }
}
