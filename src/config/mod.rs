pub mod defaults;
pub mod notifier;

pub use defaults::{BASE_SLACK_URL, DEFAULT_ICON_EMOJI, DEFAULT_USERNAME};
pub use notifier::NotifierConfig;
