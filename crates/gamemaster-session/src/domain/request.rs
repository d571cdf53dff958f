//! Request payload sent to the orchestrator.

use serde_json::{Map, Value};

use super::agent::AgentVariant;

/// The body of one orchestrator request.
///
/// Its shape depends only on `agent`: the user's text travels under the field
/// named by [`AgentVariant::field_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPayload {
    /// The agent addressed.
    pub agent: AgentVariant,
    /// Opaque server-side conversation identifier.
    pub session_id: String,
    /// The user's text, verbatim.
    pub text: String,
}

impl RequestPayload {
    /// Builds a payload for `agent`.
    #[must_use]
    pub fn build(agent: AgentVariant, session_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            agent,
            session_id: session_id.into(),
            text: text.into(),
        }
    }

    /// Returns the name of the field carrying the user's text.
    #[must_use]
    pub fn text_field(&self) -> &'static str {
        self.agent.field_name()
    }

    /// Renders the payload as a JSON object with exactly three keys.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut body = Map::with_capacity(3);
        body.insert("agent".to_owned(), Value::from(self.agent.wire_name()));
        body.insert("sessionId".to_owned(), Value::from(self.session_id.as_str()));
        body.insert(self.text_field().to_owned(), Value::from(self.text.as_str()));
        Value::Object(body)
    }
}
