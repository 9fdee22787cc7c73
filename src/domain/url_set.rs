/// Return addresses the gateway redirects to, or calls, once a payment settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrlSet {
    pub success_url: String,
    pub failure_url: String,
    pub notification_url: String,
    pub pending_url: Option<String>,
}

impl ReturnUrlSet {
    pub fn new(
        success_url: impl Into<String>,
        failure_url: impl Into<String>,
        notification_url: impl Into<String>,
    ) -> Self {
        Self {
            success_url: success_url.into(),
            failure_url: failure_url.into(),
            notification_url: notification_url.into(),
            pending_url: None,
        }
    }

    pub fn with_pending_url(mut self, pending_url: impl Into<String>) -> Self {
        self.pending_url = Some(pending_url.into());
        self
    }
}
