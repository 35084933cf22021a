/// Creates a [`ToolCall`](crate::ToolCall) for a catalog tool with inline
/// JSON arguments.
///
/// ```rust
/// use sgtools::sg_call;
///
/// let call = sg_call!("call-1", SubmitFeedback, {
///     "request_id": "req-1",
///     "rating": 5,
///     "feedback_text": "Accurate"
/// });
/// assert_eq!(call.name, "SubmitFeedback");
///
/// let credits = sg_call!("call-2", GetCredits);
/// assert_eq!(credits.arguments, "{}");
/// ```
#[macro_export]
macro_rules! sg_call {
    ($id:expr, $kind:ident $(,)?) => {
        $crate::tool_call($id, $crate::ToolKind::$kind, $crate::serde_json::json!({}))
    };
    ($id:expr, $kind:ident, $($args:tt)+) => {
        $crate::tool_call($id, $crate::ToolKind::$kind, $crate::serde_json::json!($($args)+))
    };
}

/// Creates an array of [`ToolKind`](crate::ToolKind) values from bare names.
///
/// ```rust
/// use sgtools::{ToolKind, sg_tools};
///
/// let kinds = sg_tools![SmartScraper, Markdownify];
/// assert_eq!(kinds, [ToolKind::SmartScraper, ToolKind::Markdownify]);
/// ```
#[macro_export]
macro_rules! sg_tools {
    ($($kind:ident),* $(,)?) => {
        [$($crate::ToolKind::$kind),*]
    };
}
