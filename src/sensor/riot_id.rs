use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A player handle in `GameName#TagLine` form.
///
/// Only the separator is checked: both halves must be non-empty and exactly
/// one `#` must be present. Riot's own naming rules are left to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    game_name: String,
    tag_line: String,
}

impl RiotId {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Result<Self, AppError> {
        let game_name = game_name.into();
        let tag_line = tag_line.into();
        let input = format!("{game_name}#{tag_line}");

        if game_name.is_empty() {
            return Err(AppError::invalid_riot_id(input, "game name is empty"));
        }
        if tag_line.is_empty() {
            return Err(AppError::invalid_riot_id(input, "tag line is empty"));
        }
        if game_name.contains('#') || tag_line.contains('#') {
            return Err(AppError::invalid_riot_id(input, "more than one '#' separator"));
        }

        Ok(Self {
            game_name,
            tag_line,
        })
    }

    /// Parses `Name#Tag`, failing fast when the separator is missing.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let Some((game_name, tag_line)) = input.split_once('#') else {
            return Err(AppError::invalid_riot_id(
                input,
                "expected format Name#Tag (e.g. Faker#KR1)",
            ));
        };
        Self::new(game_name, tag_line)
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }
}

impl FromStr for RiotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_riot_id() {
        let id = RiotId::parse("TomTorjäger#007").unwrap();
        assert_eq!(id.game_name(), "TomTorjäger");
        assert_eq!(id.tag_line(), "007");
        assert_eq!(id.to_string(), "TomTorjäger#007");
    }

    #[test]
    fn test_parse_keeps_spaces_in_game_name() {
        let id: RiotId = "Hide on bush#KR1".parse().unwrap();
        assert_eq!(id.game_name(), "Hide on bush");
        assert_eq!(id.tag_line(), "KR1");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        for input in ["Faker", "", "FakerKR1"] {
            let result = RiotId::parse(input);
            assert!(
                matches!(result, Err(AppError::InvalidRiotId { .. })),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_halves() {
        assert!(RiotId::parse("#KR1").is_err());
        assert!(RiotId::parse("Faker#").is_err());
        assert!(RiotId::parse("#").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_separators() {
        let error = RiotId::parse("Fa#ker#KR1").unwrap_err();
        assert!(error.to_string().contains("more than one '#'"));
    }
}
