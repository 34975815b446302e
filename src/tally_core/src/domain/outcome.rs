use serde::Serialize;

use super::validation::FieldErrors;

/// Result of one create, update or delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    ValidationFailed { errors: FieldErrors, message: String },
    StoreFailed { message: String },
}

impl MutationOutcome {
    /// The state handed back to the form, or `None` when the mutation went
    /// through and the caller navigates away instead.
    pub fn into_form_state(self) -> Option<FormState> {
        match self {
            Self::Success => None,
            Self::ValidationFailed { errors, message } => Some(FormState {
                errors: Some(errors),
                message: Some(message),
            }),
            Self::StoreFailed { message } => Some(FormState {
                errors: None,
                message: Some(message),
            }),
        }
    }
}

/// What the rendering layer shows next to a form after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A navigation to another path. Once produced, the request ends there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
