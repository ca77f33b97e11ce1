/// Log target whose events are rendered as a success line by the terminal formatter.
pub const SUCCESS_TARGET: &str = "mksnmp::success";

/// Logs an `INFO` event that the terminal renders as a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "mksnmp::success", $($arg)*)
    };
}
