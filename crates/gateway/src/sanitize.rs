// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allow-list validation of caller-supplied parameters.
//!
//! This module is the single security boundary of the gateway: it is the
//! only code path that turns untrusted input into command-line tokens.
//! Everything is validated against closed grammars that reject by default;
//! there is no blacklist anywhere.

use serde_json::Value;
use thiserror::Error;

/// Validation failures. All variants are raised before any process is
/// spawned — rejection is total, no prefix of a command ever runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("invalid controller selector: {selector:?}")]
    InvalidController { selector: String },

    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    #[error("only read-only 'show' commands are permitted, got {verb:?}")]
    NotReadOnly { verb: String },
}

/// Normalized controller selector for the RAID-management tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerTarget {
    /// All controllers (`/call`).
    All,
    /// A single numbered controller (`/cN`), digits carried verbatim.
    Index(String),
}

impl ControllerTarget {
    /// The literal token placed on the command line.
    pub fn as_token(&self) -> String {
        match self {
            ControllerTarget::All => "/call".to_string(),
            ControllerTarget::Index(digits) => format!("/c{digits}"),
        }
    }
}

/// Parse a controller selector.
///
/// The grammar is closed and enumerable: `all`, `*` or `call`
/// (case-insensitive, surrounding whitespace ignored) select all
/// controllers; a string of decimal digits selects that controller, the
/// digits carried verbatim into the token (`007` stays `/c007`);
/// everything else — including the empty string — is rejected.
pub fn controller_target(raw: &str) -> Result<ControllerTarget, SanitizeError> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "all" | "*" | "call" => Ok(ControllerTarget::All),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(ControllerTarget::Index(digits.to_string()))
        }
        _ => Err(SanitizeError::InvalidController {
            selector: raw.to_string(),
        }),
    }
}

/// Validate a caller-supplied argument list for a read-only query.
///
/// The input must be a non-empty sequence of JSON strings. Each value is
/// trimmed; values empty after trimming are dropped; every remaining
/// value must consist solely of `[A-Za-z0-9_./:-]` or the whole call
/// fails naming the offending token. The surviving sequence must be
/// non-empty and its first token must be `show` (case-insensitive) —
/// mutating verbs never pass, regardless of later tokens.
pub fn show_arguments(raw: &[Value]) -> Result<Vec<String>, SanitizeError> {
    if raw.is_empty() {
        return Err(SanitizeError::InvalidArguments {
            reason: "expected a non-empty list of arguments".to_string(),
        });
    }

    let mut cleaned = Vec::with_capacity(raw.len());
    for (index, value) in raw.iter().enumerate() {
        let Some(text) = value.as_str() else {
            return Err(SanitizeError::InvalidArguments {
                reason: format!("argument {index} is not a string"),
            });
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if !is_safe_token(text) {
            return Err(SanitizeError::InvalidArguments {
                reason: format!("invalid characters in {text:?}"),
            });
        }
        cleaned.push(text.to_string());
    }

    let Some(first) = cleaned.first() else {
        return Err(SanitizeError::InvalidArguments {
            reason: "no usable arguments after filtering".to_string(),
        });
    };
    if !first.eq_ignore_ascii_case("show") {
        return Err(SanitizeError::NotReadOnly {
            verb: first.clone(),
        });
    }

    Ok(cleaned)
}

/// Whether a token consists solely of the allow-listed character class
/// `[A-Za-z0-9_./:-]` — no shell metacharacters, whitespace, or quotes.
pub fn is_safe_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | ':' | '-'))
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
