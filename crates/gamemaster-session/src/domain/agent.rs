//! Agent variants and the payload field each one expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of game-master agent the user is addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentVariant {
    /// Narrates the story in response to player actions.
    #[default]
    Storyteller,
    /// Answers questions about the rules.
    RulesKeeper,
    /// Rolls dice expressions.
    Thrower,
}

impl AgentVariant {
    /// All variants, in menu order.
    pub const ALL: [Self; 3] = [Self::Storyteller, Self::RulesKeeper, Self::Thrower];

    /// Returns the name used for this variant on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Storyteller => "storyteller",
            Self::RulesKeeper => "rules-keeper",
            Self::Thrower => "thrower",
        }
    }

    /// Returns the request field that carries the user's text for this variant.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Storyteller => "action",
            Self::RulesKeeper => "question",
            Self::Thrower => "expression",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Storyteller => "Storyteller",
            Self::RulesKeeper => "Rules Keeper",
            Self::Thrower => "Thrower",
        }
    }
}

impl fmt::Display for AgentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Returned when a string names no known agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent `{0}` (expected storyteller, rules-keeper or thrower)")]
pub struct ParseAgentVariantError(pub String);

impl FromStr for AgentVariant {
    type Err = ParseAgentVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.wire_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAgentVariantError(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_per_variant() {
        assert_eq!(AgentVariant::Storyteller.field_name(), "action");
        assert_eq!(AgentVariant::RulesKeeper.field_name(), "question");
        assert_eq!(AgentVariant::Thrower.field_name(), "expression");
    }

    #[test]
    fn test_wire_name_matches_serde_representation() {
        for variant in AgentVariant::ALL {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, variant.wire_name());
        }
    }

    #[test]
    fn test_parse_accepts_wire_names_case_insensitively() {
        assert_eq!(
            "rules-keeper".parse::<AgentVariant>(),
            Ok(AgentVariant::RulesKeeper)
        );
        assert_eq!(" THROWER ".parse::<AgentVariant>(), Ok(AgentVariant::Thrower));
        assert_eq!(
            "Storyteller".parse::<AgentVariant>(),
            Ok(AgentVariant::Storyteller)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "bard".parse::<AgentVariant>().unwrap_err();
        assert_eq!(err, ParseAgentVariantError("bard".to_owned()));
        assert!(err.to_string().contains("bard"));
    }

    #[test]
    fn test_default_is_storyteller() {
        assert_eq!(AgentVariant::default(), AgentVariant::Storyteller);
    }
}
