//! Composable decorator chains over two small component families.
//!
//! This crate demonstrates the same wrapping idiom twice, over independent
//! component contracts:
//!
//! - [`Notify`]: a notification sender that additional channels (SMS,
//!   Facebook, Slack) can be stacked onto;
//! - [`DataSource`]: a readable/writable source that cross-cutting behaviors
//!   (encryption, compression, logging, email receipt) can be layered around.
//!
//! Every component performs its "work" by emitting a [`tracing`] event
//! describing the action; there is no real delivery, encryption, compression
//! or file I/O. What the crate actually exercises is the composition
//! mechanism: each wrapper owns exactly one inner component satisfying the
//! same trait, so chains of any depth stay transparent to the caller.
//!
//! Chains can be nested by hand, or assembled from [`decorator`] units:
//!
//! ```
//! use micro_wrap::decorator::{Decorator, DecoratorExt};
//! use micro_wrap::notify::{EmailNotifier, FacebookDecorator, Notify, SlackDecorator};
//!
//! let notifier = DecoratorExt::<EmailNotifier>::and_then(FacebookDecorator, SlackDecorator).decorate(EmailNotifier);
//! notifier.send("Alert!");
//! // emits, in order: email, facebook, slack
//! ```

mod error;

pub mod decorator;
pub mod notify;
pub mod source;

pub use error::ConfigError;
