use serde::Deserialize;

use crate::config::defaults::{
    BASE_SLACK_URL, DEFAULT_ICON_EMOJI, DEFAULT_USERNAME, ENV_BASE_URL, ENV_ICON_EMOJI,
    ENV_USERNAME, ENV_WEBHOOK,
};
use crate::error::{NotifyError, Result};

/// Delivery settings for a [`Notifier`](crate::Notifier).
///
/// Built once and moved into the notifier, which never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NotifierConfig {
    /// Webhook id (`T000/B000/XXXX`), appended to `base_url`.
    pub destination: String,
    /// Sender name shown in the channel.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Sender emoji, without colons.
    #[serde(default = "default_display_icon")]
    pub display_icon: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_display_name() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_display_icon() -> String {
    DEFAULT_ICON_EMOJI.to_string()
}

fn default_base_url() -> String {
    BASE_SLACK_URL.to_string()
}

impl NotifierConfig {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            display_name: default_display_name(),
            display_icon: default_display_icon(),
            base_url: default_base_url(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_display_icon(mut self, icon: impl Into<String>) -> Self {
        self.display_icon = icon.into();
        self
    }

    /// Points delivery at a Slack-compatible receiver other than hooks.slack.com.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full delivery endpoint. No validation; a bad id surfaces when posting.
    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.base_url, self.destination)
    }

    /// Reads `SLACK_WEBHOOK` (required) plus optional `SLACK_USERNAME`,
    /// `SLACK_ICON_EMOJI` and `SLACK_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(destination) = get(ENV_WEBHOOK) else {
            return Err(NotifyError::MissingEnv(ENV_WEBHOOK));
        };

        let mut cfg = Self::new(destination);
        if let Some(name) = get(ENV_USERNAME) {
            cfg.display_name = name;
        }
        if let Some(icon) = get(ENV_ICON_EMOJI) {
            cfg.display_icon = icon;
        }
        if let Some(base) = get(ENV_BASE_URL) {
            cfg.base_url = base;
        }
        Ok(cfg)
    }
}
