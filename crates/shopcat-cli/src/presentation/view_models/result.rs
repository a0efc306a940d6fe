use serde::Serialize;

use super::common::{StatusBadge, Tip};

/// What a one-shot command prints.
///
/// `failure` is never printed as such. A result that carries one is still
/// rendered in full (the failed-load notice is the content), after which the
/// command exits non-zero with that reason.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(rename = "suggestions", skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<Tip>,

    #[serde(skip)]
    pub failure: Option<String>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            tips: Vec::new(),
            failure: None,
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_tip(mut self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.tips.push(Tip::new(description, command));
        self
    }

    /// Render as usual, then fail the command with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_not_serialized() {
        let result = CommandResultViewModel::new(vec![1, 2])
            .with_tip("List products", "shopcat list")
            .failing("both sources failed");

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("failure").is_none());
        assert_eq!(json["suggestions"][0]["command"], "shopcat list");
        assert_eq!(result.failure.as_deref(), Some("both sources failed"));
    }
}
