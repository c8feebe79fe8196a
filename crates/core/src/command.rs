// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument-vector command specification.
//!
//! A [`CommandSpec`] is the only shape in which a command travels through
//! the gateway: an ordered list of discrete tokens, never a shell string.
//! Every token is either a literal chosen by trusted code or a value that
//! passed the input sanitizer.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// An immutable program path plus argument vector.
///
/// Built once via the consuming builder methods, then passed by value
/// through the execution pipeline. The tokens are handed to the child
/// process as discrete `argv` entries; no shell ever interprets them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument token.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple argument tokens.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program path (first argv entry).
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The argument tokens (argv entries after the program).
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Single-string rendering with shell quoting, for logs and result
    /// payloads only. This string is never executed.
    pub fn display_quoted(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote(&self.program.display().to_string()));
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_quoted())
    }
}

/// Quote a token for display if it contains anything outside the
/// safe-to-print set, using POSIX single-quote rules.
fn quote(token: &str) -> String {
    let safe = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | ':' | '-' | '='));
    if safe {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
