use reqwest::blocking::Client;

use crate::error::{NotifyError, Result};

/// Outcome of a single POST. The status is reported as-is; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx status into [`NotifyError::Status`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(NotifyError::Status(self.status))
        }
    }
}

/// "POST these form fields to this URL". Implementations must not retry.
pub trait Transport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<Delivery>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<Delivery> {
        (**self).post_form(url, fields)
    }
}

/// Blocking reqwest client. Cloning shares the connection pool.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<Delivery> {
        let res = self.client.post(url).form(fields).send()?;
        let status = res.status().as_u16();
        tracing::debug!(target: "slack_notify::http", status, "webhook responded");
        Ok(Delivery { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_status_classes() {
        assert!(Delivery { status: 200 }.is_success());
        assert!(Delivery { status: 204 }.is_success());
        assert!(!Delivery { status: 404 }.is_success());
        assert!(!Delivery { status: 500 }.is_success());
    }

    #[test]
    fn error_for_status_keeps_code() {
        assert!(Delivery { status: 200 }.error_for_status().is_ok());
        let err = Delivery { status: 403 }.error_for_status().unwrap_err();
        assert!(matches!(err, NotifyError::Status(403)));
    }

    #[test]
    fn malformed_url_is_returned_not_swallowed() {
        let err = HttpTransport::new()
            .post_form("not a url", &[("payload", "{}")])
            .unwrap_err();
        assert!(matches!(err, NotifyError::Http(_)));
    }
}
