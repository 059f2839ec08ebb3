pub mod message;
pub mod severity;

pub use message::{compose_attachment, compose_fallback, Attachment, Envelope, Field, MessageRequest};
pub use severity::{Presentation, Severity, UnknownSeverity};
