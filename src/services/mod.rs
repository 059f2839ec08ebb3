pub mod notifier;
pub mod transport;

pub use notifier::Notifier;
pub use transport::{Delivery, HttpTransport, Transport};
