//! Credential entry flow that produces a [`ConfigEntry`].

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigEntry, EntryData};

/// Title given to entries created by the flow.
pub const ENTRY_TITLE: &str = "Yandex IoT";
/// Name of the single form field.
pub const CONF_API_TOKEN: &str = "api_token";

/// Values the user submitted on the form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub api_token: String,
}

/// What the host should do after a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    /// Render the form, with per-field error keys.
    ShowForm {
        step_id: &'static str,
        fields: &'static [&'static str],
        errors: HashMap<String, String>,
    },
    /// Persist this entry and set it up.
    CreateEntry(ConfigEntry),
}

/// State of one credential entry session.
///
/// Each session owns its form data, so concurrent flows cannot see each
/// other's input.
///
/// # Example
///
/// ```
/// use yandex_iot_lights::{ConfigFlow, FlowResult, UserInput};
///
/// let mut flow = ConfigFlow::new();
/// assert!(matches!(flow.step_user(None), FlowResult::ShowForm { .. }));
///
/// let input = UserInput { api_token: "y0_token".to_string() };
/// match flow.step_user(Some(input)) {
///     FlowResult::CreateEntry(entry) => assert_eq!(entry.api_token(), "y0_token"),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigFlow {
    data: Option<EntryData>,
}

impl ConfigFlow {
    pub const STEP_USER: &'static str = "user";
    const FIELDS: &'static [&'static str] = &[CONF_API_TOKEN];

    pub fn new() -> Self {
        Self::default()
    }

    /// Data collected so far in this session.
    pub fn data(&self) -> Option<&EntryData> {
        self.data.as_ref()
    }

    /// Handles the user step: show the form, or create an entry from valid input.
    pub fn step_user(&mut self, input: Option<UserInput>) -> FlowResult {
        let mut errors = HashMap::new();

        if let Some(input) = input {
            let token = input.api_token.trim();
            if token.is_empty() {
                errors.insert(CONF_API_TOKEN.to_string(), "empty_token".to_string());
            } else {
                let data = EntryData {
                    api_token: token.to_string(),
                };
                self.data = Some(data.clone());
                debug!("config flow complete, creating entry");
                return FlowResult::CreateEntry(ConfigEntry::new(ENTRY_TITLE, data));
            }
        }

        FlowResult::ShowForm {
            step_id: Self::STEP_USER,
            fields: Self::FIELDS,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_step_shows_form() {
        let mut flow = ConfigFlow::new();
        match flow.step_user(None) {
            FlowResult::ShowForm {
                step_id,
                fields,
                errors,
            } => {
                assert_eq!(step_id, "user");
                assert_eq!(fields, &["api_token"]);
                assert!(errors.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_blank_token_rejected() {
        let mut flow = ConfigFlow::new();
        let result = flow.step_user(Some(UserInput {
            api_token: "   ".to_string(),
        }));
        match result {
            FlowResult::ShowForm { errors, .. } => {
                assert_eq!(errors.get("api_token").map(String::as_str), Some("empty_token"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(flow.data().is_none());
    }

    #[test]
    fn test_create_entry() {
        let mut flow = ConfigFlow::new();
        let result = flow.step_user(Some(UserInput {
            api_token: "y0_token".to_string(),
        }));
        let FlowResult::CreateEntry(entry) = result else {
            panic!("expected an entry");
        };
        assert_eq!(entry.title(), "Yandex IoT");
        assert_eq!(entry.api_token(), "y0_token");
        assert_eq!(flow.data().map(|d| d.api_token.as_str()), Some("y0_token"));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = ConfigFlow::new();
        let mut second = ConfigFlow::new();
        first.step_user(Some(UserInput {
            api_token: "first".to_string(),
        }));
        assert!(second.data().is_none());

        let FlowResult::CreateEntry(entry) = second.step_user(Some(UserInput {
            api_token: "second".to_string(),
        })) else {
            panic!("expected an entry");
        };
        assert_eq!(entry.api_token(), "second");
        assert_eq!(first.data().unwrap().api_token, "first");
    }
}
