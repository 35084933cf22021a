//! Tool errors and classifications.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sgclient::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    NotFound,
    InvalidArguments,
    Configuration,
    External,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    pub retryable: bool,
    pub tool_name: Option<String>,
    pub tool_call_id: Option<String>,
    /// Underlying client failure for `External` errors.
    pub client_error: Option<ClientError>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            tool_name: None,
            tool_call_id: None,
            client_error: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message, false)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArguments, message, false)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Configuration, message, false)
    }

    /// Wraps a client failure without altering its message or retryability.
    pub fn external(error: ClientError) -> Self {
        let mut wrapped = Self::new(ToolErrorKind::External, error.message.clone(), error.retryable);
        wrapped.client_error = Some(error);
        wrapped
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Other, message, false)
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    pub fn with_tool_call_id(mut self, tool_call_id: impl Into<String>) -> Self {
        self.tool_call_id = Some(tool_call_id.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ToolErrorKind::InvalidArguments | ToolErrorKind::NotFound
        )
    }

    pub fn is_configuration_error(&self) -> bool {
        self.kind == ToolErrorKind::Configuration
    }

    pub fn client_error(&self) -> Option<&ClientError> {
        self.client_error.as_ref()
    }
}

impl From<ClientError> for ToolError {
    fn from(error: ClientError) -> Self {
        Self::external(error)
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.tool_name, &self.tool_call_id) {
            (Some(tool_name), Some(tool_call_id)) => write!(
                f,
                "{:?} [tool={}, call_id={}]: {}",
                self.kind, tool_name, tool_call_id, self.message
            ),
            (Some(tool_name), None) => {
                write!(f, "{:?} [tool={}]: {}", self.kind, tool_name, self.message)
            }
            _ => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.client_error
            .as_ref()
            .map(|error| error as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use sgclient::ClientErrorKind;

    use super::*;

    #[test]
    fn external_errors_keep_the_client_error_intact() {
        let client_error = ClientError::from_status(503, "service unavailable");
        let error = ToolError::from(client_error.clone());

        assert_eq!(error.kind, ToolErrorKind::External);
        assert_eq!(error.message, "service unavailable");
        assert!(error.is_retryable());
        assert_eq!(error.client_error(), Some(&client_error));
        assert_eq!(
            error.client_error().map(|inner| inner.kind),
            Some(ClientErrorKind::Unavailable)
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn classification_helpers() {
        assert!(ToolError::invalid_arguments("bad").is_user_error());
        assert!(ToolError::configuration("no key").is_configuration_error());
        assert!(!ToolError::configuration("no key").is_user_error());
        assert!(!ToolError::other("boom").is_retryable());
    }

    #[test]
    fn context_fields_are_included_in_display() {
        let error = ToolError::not_found("missing")
            .with_tool_name("SmartScraper")
            .with_tool_call_id("call_1");

        let rendered = error.to_string();
        assert!(rendered.contains("SmartScraper"));
        assert!(rendered.contains("call_1"));
    }
}
