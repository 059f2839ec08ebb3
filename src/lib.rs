//! Slack incoming-webhook notifications in four tiers: success, info, warning, error.
//!
//! ```no_run
//! use slack_notify::Notifier;
//!
//! let slack = Notifier::new("T0000/B0000/XXXXXXXX");
//! slack.send_success("Deploy OK", None, None, None)?;
//! slack.send_error("Deploy failed", "exit code 1", Some("https://ci/123"), Some("build log"))?;
//! # Ok::<(), slack_notify::NotifyError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod observability;
pub mod services;

pub use config::{NotifierConfig, BASE_SLACK_URL, DEFAULT_ICON_EMOJI, DEFAULT_USERNAME};
pub use crate::core::{compose_attachment, compose_fallback, Attachment, Envelope, Field, MessageRequest, Severity};
pub use error::{NotifyError, Result};
pub use observability::init_tracing;
pub use services::{Delivery, HttpTransport, Notifier, Transport};
