use crate::notify::Notify;
use tracing::info;

/// The leaf notifier: delivery over email is the base behavior every chain
/// terminates in.
#[derive(Default, Clone, Copy, Debug)]
pub struct EmailNotifier;

impl Notify for EmailNotifier {
    fn send(&self, message: &str) {
        info!("Email sends {message}.");
    }
}
