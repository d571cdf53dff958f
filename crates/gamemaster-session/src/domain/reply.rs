//! Interpretation of orchestrator responses.
//!
//! The orchestrator answers with loosely typed JSON. A body is classified
//! into one [`AgentReply`] variant, checked in a fixed priority order:
//! story, then rule, then dice roll, then a raw dump that accepts anything.

use serde_json::Value;

/// Agent text used when no response could be obtained.
pub const FAILURE_MESSAGE: &str =
    "La connexion avec le monde des esprits a échoué. Vérifiez la console.";

/// A classified orchestrator response.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentReply<'a> {
    /// Narrative text from the storyteller.
    Story(&'a Value),
    /// A rule explanation from the rules-keeper.
    Rule(&'a Value),
    /// A dice roll with its expression and numeric result.
    Roll {
        /// Roll detail, e.g. the individual dice.
        detail: &'a Value,
        /// The expression that was rolled.
        expression: &'a Value,
        /// The total.
        result: &'a Value,
    },
    /// Anything else.
    Raw(&'a Value),
}

impl<'a> AgentReply<'a> {
    /// Classifies `body`. Never fails: unknown shapes become [`AgentReply::Raw`].
    #[must_use]
    pub fn classify(body: &'a Value) -> Self {
        if let Some(story) = truthy_field(body, "story") {
            return Self::Story(story);
        }
        if let Some(rule) = truthy_field(body, "rule") {
            return Self::Rule(rule);
        }
        if let Some(detail) = truthy_field(body, "roll") {
            let expression = present_field(body, "expression");
            let result = present_field(body, "result");
            if let (Some(expression), Some(result)) = (expression, result) {
                return Self::Roll {
                    detail,
                    expression,
                    result,
                };
            }
        }
        Self::Raw(body)
    }

    /// Renders the display text for this reply. Always non-empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Story(value) | Self::Rule(value) => inline(value),
            Self::Roll {
                detail,
                expression,
                result,
            } => format!(
                "Lancer de dés ! Expression: {}, Résultat: {}, Détails: {}",
                inline(expression),
                inline(result),
                inline(detail)
            ),
            Self::Raw(body) => dump(body),
        }
    }
}

/// Turns an orchestrator response body into the agent's display text.
#[must_use]
pub fn interpret(body: &Value) -> String {
    AgentReply::classify(body).display_text()
}

fn present_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

fn truthy_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| is_truthy(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn dump(body: &Value) -> String {
    // Serializing a `Value` cannot fail; fall back to the compact form anyway.
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
