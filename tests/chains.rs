//! End-to-end chain scenarios, observed through captured trace output.

use std::io;
use std::sync::{Arc, Mutex};

use micro_wrap::decorator::{Decorator, DecoratorExt};
use micro_wrap::notify::{
    EmailNotifier, FacebookDecorator, FacebookNotifier, Notify, SlackDecorator, SlackNotifier, SmsDecorator,
    SmsNotifier, broadcast_notifier,
};
use micro_wrap::source::{
    CompressedDataSource, DataSource, EmailReceiptDecorator, EncryptedDataSource, FileDataSource, LoggingDecorator,
    secured_file,
};
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer the fmt subscriber writes into, one line per event.
#[derive(Clone, Default)]
struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(|line| line.trim().to_owned()).collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` under a message-only subscriber and returns the emitted lines.
fn captured_lines<F: FnOnce()>(f: F) -> Vec<String> {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(capture.clone())
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.lines()
}

#[test]
fn notifier_chain_emits_inner_first() {
    let notifier = SlackNotifier::new(FacebookNotifier::new(EmailNotifier));

    let lines = captured_lines(|| notifier.send("Alert!"));

    assert_eq!(lines, ["Email sends Alert!.", "Facebook sends Alert!.", "Slack sends Alert!."]);
}

#[test]
fn broadcast_builder_matches_hand_built_chain() {
    let notifier = broadcast_notifier();

    let lines = captured_lines(|| notifier.send("Alert!"));

    assert_eq!(lines, ["Email sends Alert!.", "Facebook sends Alert!.", "Slack sends Alert!."]);
}

#[test]
fn decorator_units_build_the_same_chain() {
    let notifier = DecoratorExt::<EmailNotifier>::and_then(FacebookDecorator, SlackDecorator).decorate(EmailNotifier);

    let lines = captured_lines(|| notifier.send("Alert!"));

    assert_eq!(lines, ["Email sends Alert!.", "Facebook sends Alert!.", "Slack sends Alert!."]);
}

#[test]
fn n_decorators_emit_n_plus_one_lines() {
    let notifier = SlackNotifier::new(FacebookNotifier::new(SmsNotifier::new(EmailNotifier)));

    let lines = captured_lines(|| notifier.send("ping"));

    assert_eq!(lines, ["Email sends ping.", "SMS sends ping.", "Facebook sends ping.", "Slack sends ping."]);
}

#[test]
fn composer_groupings_build_identical_chains() {
    let left = DecoratorExt::<EmailNotifier>::and_then(
        DecoratorExt::<EmailNotifier>::and_then(SmsDecorator, FacebookDecorator),
        SlackDecorator,
    )
    .decorate(EmailNotifier);
    let right = DecoratorExt::<EmailNotifier>::and_then(
        SmsDecorator,
        DecoratorExt::<SmsNotifier<EmailNotifier>>::and_then(FacebookDecorator, SlackDecorator),
    )
    .decorate(EmailNotifier);

    let left_lines = captured_lines(|| left.send("Alert!"));
    let right_lines = captured_lines(|| right.send("Alert!"));

    assert_eq!(left_lines, ["Email sends Alert!.", "SMS sends Alert!.", "Facebook sends Alert!.", "Slack sends Alert!."]);
    assert_eq!(left_lines, right_lines);
}

#[test]
fn dyn_chain_depth_is_unbounded() {
    let mut notifier: Box<dyn Notify> = Box::new(EmailNotifier);
    for _ in 0..7 {
        notifier = Box::new(SlackNotifier::new(notifier));
    }

    let lines = captured_lines(|| notifier.send("deep"));

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Email sends deep.");
}

#[test]
fn write_transforms_outermost_first() {
    let file = FileDataSource::new("somefile.dat").unwrap();
    let source = EncryptedDataSource::new(CompressedDataSource::new(file));

    let mut written = String::new();
    let lines = captured_lines(|| written = source.write_data("$199/mo"));

    // encryption seals first, compression packs the sealed value, the leaf
    // receives and returns the fully wrapped string
    assert_eq!(written, "<compress><encrypt>$199/mo</encrypt></compress>");
    assert_eq!(lines, ["Write <compress><encrypt>$199/mo</encrypt></compress> to somefile.dat"]);
}

#[test]
fn read_unwinds_inner_first() {
    let file = FileDataSource::new("somefile.dat").unwrap();
    let source = EncryptedDataSource::new(CompressedDataSource::new(file));

    let lines = captured_lines(|| source.read_data());

    assert_eq!(lines, ["Read data from somefile.dat.", "Decompress the data.", "Decrypt the data."]);
}

#[test]
fn secured_file_builder_matches_scenario() {
    let source = secured_file("somefile.dat").unwrap();

    let mut written = String::new();
    let lines = captured_lines(|| written = source.write_data("$199/mo"));

    assert_eq!(written, "<compress><encrypt>$199/mo</encrypt></compress>");
    assert_eq!(lines.len(), 1);
}

#[test]
fn logging_brackets_both_operations() {
    let file = FileDataSource::new("log.dat").unwrap();
    let source = LoggingDecorator.decorate(file);

    let write_lines = captured_lines(|| {
        source.write_data("x");
    });
    assert_eq!(write_lines, ["Write Data Begin.", "Write x to log.dat", "Write Data End."]);

    let read_lines = captured_lines(|| source.read_data());
    assert_eq!(read_lines, ["Read Data Begin.", "Read data from log.dat.", "Read Data End."]);
}

#[test]
fn receipt_quotes_fully_transformed_data() {
    let file = FileDataSource::new("pay.dat").unwrap();
    let source = EmailReceiptDecorator.decorate(EncryptedDataSource::new(file));

    let mut written = String::new();
    let lines = captured_lines(|| written = source.write_data("$199/mo"));

    assert_eq!(written, "<encrypt>$199/mo</encrypt>");
    assert_eq!(lines, ["Write <encrypt>$199/mo</encrypt> to pay.dat", "Paycheck <encrypt>$199/mo</encrypt> sent."]);
}

#[test]
fn repeated_calls_reuse_the_chain() {
    let source = secured_file("again.dat").unwrap();

    let first = source.write_data("a");
    let second = source.write_data("a");

    assert_eq!(first, second);
}

#[test]
fn leaf_filename_survives_wrapping() {
    let file = FileDataSource::new("somefile.dat").unwrap();
    assert_eq!(file.filename(), "somefile.dat");

    let source = EncryptedDataSource::new(CompressedDataSource::new(&file));
    source.write_data("x");
    source.read_data();

    assert_eq!(file.filename(), "somefile.dat");
}
