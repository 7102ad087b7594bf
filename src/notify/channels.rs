//! Channel wrappers stacked onto a base notifier.
//!
//! Each wrapper owns its inner notifier, forwards `send` to it first, then
//! emits its own channel line. Each comes with a unit [`Decorator`] so chains
//! can be assembled with `and_then` instead of hand-nesting constructors.

use crate::decorator::Decorator;
use crate::notify::Notify;
use tracing::info;

macro_rules! channel_notifier {
    ($(#[$doc:meta])* $wrapper:ident, $decorator:ident, $line:literal) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $wrapper<N: Notify> {
            inner: N,
        }

        impl<N: Notify> $wrapper<N> {
            pub fn new(inner: N) -> Self {
                Self { inner }
            }
        }

        impl<N: Notify> Notify for $wrapper<N> {
            fn send(&self, message: &str) {
                self.inner.send(message);
                info!(concat!($line, " sends {}."), message);
            }
        }

        #[derive(Default, Clone, Copy, Debug)]
        pub struct $decorator;

        impl<N: Notify> Decorator<N> for $decorator {
            type Out = $wrapper<N>;

            fn decorate(&self, inner: N) -> Self::Out {
                $wrapper::new(inner)
            }
        }
    };
}

channel_notifier!(
    /// Adds SMS delivery on top of the wrapped notifier.
    SmsNotifier,
    SmsDecorator,
    "SMS"
);

channel_notifier!(
    /// Adds Facebook delivery on top of the wrapped notifier.
    FacebookNotifier,
    FacebookDecorator,
    "Facebook"
);

channel_notifier!(
    /// Adds Slack delivery on top of the wrapped notifier.
    SlackNotifier,
    SlackDecorator,
    "Slack"
);
