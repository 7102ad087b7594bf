use micro_wrap::decorator::Decorator;
use micro_wrap::source::{DataSource, EmailReceiptDecorator, LoggingDecorator, secured_file};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Logging(EmailReceipt(Encryption(Compression(File)))): logging brackets
    // the whole write, the receipt quotes the fully wrapped payload
    let secured = secured_file("somefile.dat").expect("filename is valid");
    let source = LoggingDecorator.decorate(EmailReceiptDecorator.decorate(secured));

    source.write_data("$199/mo");
    source.read_data();
}
