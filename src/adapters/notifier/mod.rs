//! Notifier adapters.
//!
//! Mail composition and delivery belong to an external collaborator; the
//! production adapter hands the signal to it via structured logs picked up
//! by the mailer pipeline, and tests use the recording variant.

mod recording;
mod tracing_notifier;

pub use recording::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
