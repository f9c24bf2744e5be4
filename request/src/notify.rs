/// Side channel for user-visible failure notices (toasts, banners).
///
/// Fire-and-forget: implementations must not panic.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Logs notices at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str) {
        tracing::warn!(notice = message, "request failed");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn notify(&self, _message: &str) {}
}
