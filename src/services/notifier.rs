use crate::config::NotifierConfig;
use crate::core::{Envelope, MessageRequest, Severity};
use crate::error::Result;
use crate::services::transport::{Delivery, HttpTransport, Transport};

/// Sends severity-tiered messages to one Slack incoming webhook.
///
/// Every `send_*` call performs exactly one blocking POST to
/// `base_url + destination` with the JSON envelope in the `payload` form field.
/// Transport errors are returned untouched and non-2xx statuses are reported in
/// the returned [`Delivery`]; nothing is retried or queued.
///
/// The notifier holds no mutable state, so it can be shared across threads
/// whenever the transport can.
#[derive(Debug, Clone)]
pub struct Notifier<T = HttpTransport> {
    config: NotifierConfig,
    transport: T,
}

impl Notifier<HttpTransport> {
    /// Notifier with default display name and icon.
    pub fn new(destination: impl Into<String>) -> Self {
        Self::from_config(NotifierConfig::new(destination))
    }

    pub fn from_config(config: NotifierConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Notifier<T> {
    pub fn with_transport(config: NotifierConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn display_name(&self) -> &str {
        &self.config.display_name
    }

    pub fn display_icon(&self) -> &str {
        &self.config.display_icon
    }

    pub fn webhook_url(&self) -> String {
        self.config.webhook_url()
    }

    /// Body defaults to "Success!".
    pub fn send_success(
        &self,
        title: &str,
        body: Option<&str>,
        link: Option<&str>,
        link_label: Option<&str>,
    ) -> Result<Delivery> {
        self.send_request(Severity::Success, &request(title, body, link, link_label))
    }

    pub fn send_info(
        &self,
        title: &str,
        body: &str,
        link: Option<&str>,
        link_label: Option<&str>,
    ) -> Result<Delivery> {
        self.send(title, Severity::Info, body, link, link_label)
    }

    pub fn send_warning(
        &self,
        title: &str,
        body: &str,
        link: Option<&str>,
        link_label: Option<&str>,
    ) -> Result<Delivery> {
        self.send(title, Severity::Warning, body, link, link_label)
    }

    pub fn send_error(
        &self,
        title: &str,
        body: &str,
        link: Option<&str>,
        link_label: Option<&str>,
    ) -> Result<Delivery> {
        self.send(title, Severity::Error, body, link, link_label)
    }

    /// Sends with an explicit tier.
    pub fn send(
        &self,
        title: &str,
        tier: Severity,
        body: &str,
        link: Option<&str>,
        link_label: Option<&str>,
    ) -> Result<Delivery> {
        self.send_request(tier, &request(title, Some(body), link, link_label))
    }

    /// Sends a prepared request.
    ///
    /// A request without a body renders "Success!" for [`Severity::Success`] and an
    /// empty second line for every other tier; use `send_info`, `send_warning`,
    /// `send_error` or `send` to have the body enforced by the signature.
    pub fn send_request(&self, tier: Severity, req: &MessageRequest) -> Result<Delivery> {
        let payload = self.payload_json(tier, req)?;
        let url = self.webhook_url();

        tracing::debug!(
            target: "slack_notify",
            severity = %tier,
            title = %req.title,
            "sending slack notification"
        );
        tracing::trace!(target: "slack_notify", %payload, "payload");

        self.transport.post_form(&url, &[("payload", payload.as_str())])
    }

    /// The envelope `send_request` would post, without sending it.
    pub fn payload(&self, tier: Severity, req: &MessageRequest) -> Envelope {
        Envelope::new(
            &self.config.display_name,
            &self.config.display_icon,
            req.attachments(tier),
        )
    }

    pub fn payload_json(&self, tier: Severity, req: &MessageRequest) -> Result<String> {
        Ok(self.payload(tier, req).to_json()?)
    }
}

fn request(
    title: &str,
    body: Option<&str>,
    link: Option<&str>,
    link_label: Option<&str>,
) -> MessageRequest {
    MessageRequest {
        title: title.to_string(),
        body: body.map(str::to_string),
        link: link.map(str::to_string),
        link_label: link_label.map(str::to_string),
    }
}
