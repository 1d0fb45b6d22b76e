//! Issue identifier prefix, shape, and parsing.
//!
//! IDs are generated by the store as `{prefix}-{hex}`, e.g.
//! `iss-3fa8b2c1d4e5f607`. Anything that does not match that shape is a
//! malformed identifier and can never match a stored document.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Prefix for issue IDs.
pub const PREFIX_ISSUE: &str = "iss";

/// Number of random bytes the store draws per ID.
pub const ID_RANDOM_BYTES: usize = 8;

/// Length of the hex suffix (two characters per random byte).
pub const ID_HEX_LEN: usize = ID_RANDOM_BYTES * 2;

/// A well-formed issue identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct IssueId(String);

impl IssueId {
    /// Parse a candidate identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedId` unless the input is `iss-` followed by
    /// exactly [`ID_HEX_LEN`] lowercase hex characters.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::MalformedId(raw.to_string());
        let hex = raw
            .strip_prefix(PREFIX_ISSUE)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(malformed)?;
        let well_formed = hex.len() == ID_HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if well_formed {
            Ok(Self(raw.to_string()))
        } else {
            Err(malformed())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IssueId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IssueId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IssueId> for String {
    fn from(id: IssueId) -> Self {
        id.0
    }
}
