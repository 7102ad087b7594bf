use micro_wrap::notify::{Notify, broadcast_notifier};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Slack(Facebook(Email)): the email line comes out first, slack last
    let notifier = broadcast_notifier();
    notifier.send("Alert!");
}
