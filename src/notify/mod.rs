//! The notifier chain: a base email sender that extra channels stack onto.
//!
//! Every channel wrapper forwards to its inner notifier first and emits its
//! own line afterwards, so the innermost (email) line always comes out first.

mod channels;
mod email;

pub use channels::{FacebookDecorator, FacebookNotifier, SlackDecorator, SlackNotifier, SmsDecorator, SmsNotifier};
pub use email::EmailNotifier;

use crate::decorator::{Decorator, DecoratorExt};

/// The capability every node in a notifier chain satisfies.
pub trait Notify {
    fn send(&self, message: &str);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn send(&self, message: &str) {
        (**self).send(message);
    }
}

impl<N: Notify + ?Sized> Notify for Box<N> {
    fn send(&self, message: &str) {
        (**self).send(message);
    }
}

/// Builds the full broadcast stack: `Slack(Facebook(Email))`.
///
/// Sending through the result emits the email line, then facebook, then
/// slack.
pub fn broadcast_notifier() -> impl Notify {
    DecoratorExt::<EmailNotifier>::and_then(FacebookDecorator, SlackDecorator).decorate(EmailNotifier)
}
