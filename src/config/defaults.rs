/// Sender name shown in the channel when none is configured.
pub const DEFAULT_USERNAME: &str = "Slack Notifications";

/// Sender emoji (without colons) when none is configured.
pub const DEFAULT_ICON_EMOJI: &str = "slack";

/// Incoming-webhook base; the webhook id is appended verbatim.
pub const BASE_SLACK_URL: &str = "https://hooks.slack.com/services/";

pub const DEFAULT_SUCCESS_BODY: &str = "Success!";

pub const DEFAULT_LINK_LABEL: &str = "link";

// Environment keys read by `NotifierConfig::from_env`
pub const ENV_WEBHOOK: &str = "SLACK_WEBHOOK";
pub const ENV_USERNAME: &str = "SLACK_USERNAME";
pub const ENV_ICON_EMOJI: &str = "SLACK_ICON_EMOJI";
pub const ENV_BASE_URL: &str = "SLACK_BASE_URL";
