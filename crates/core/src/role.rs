//! Speaker role of a transcript utterance.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Who produced an utterance in `call_transcripts`.
///
/// The database enforces the same domain with a CHECK constraint on the
/// `role` column; this enum is the Rust image of that constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    /// The caller.
    User,
    /// The automated agent on the call.
    Assistant,
}

impl TranscriptRole {
    pub const ALL_VARIANTS_STR: &'static str = "user|assistant";

    /// Returns the string representation stored in the `role` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for TranscriptRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(CoreError::InvalidRole(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_roles() {
        assert_eq!("user".parse::<TranscriptRole>().unwrap(), TranscriptRole::User);
        assert_eq!("Assistant".parse::<TranscriptRole>().unwrap(), TranscriptRole::Assistant);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "moderator".parse::<TranscriptRole>().unwrap_err();
        assert!(err.to_string().contains("moderator"));
    }

    #[test]
    fn display_matches_column_values() {
        assert_eq!(TranscriptRole::User.to_string(), "user");
        assert_eq!(TranscriptRole::Assistant.to_string(), "assistant");
    }
}
