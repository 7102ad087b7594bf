use crate::decorator::Decorator;
use crate::source::DataSource;
use tracing::info;

/// Emails a receipt after a successful write, quoting the data as the leaf
/// received it (the inner call's return, after every layer's transform).
/// Reads forward unchanged.
#[derive(Debug)]
pub struct EmailReceiptDataSource<S: DataSource> {
    inner: S,
}

impl<S: DataSource> EmailReceiptDataSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: DataSource> DataSource for EmailReceiptDataSource<S> {
    fn write_data(&self, data: &str) -> String {
        let written = self.inner.write_data(data);
        info!("Paycheck {written} sent.");
        written
    }

    fn read_data(&self) {
        self.inner.read_data();
    }
}

/// Unit decorator producing [`EmailReceiptDataSource`].
#[derive(Default, Clone, Copy, Debug)]
pub struct EmailReceiptDecorator;

impl<S: DataSource> Decorator<S> for EmailReceiptDecorator {
    type Out = EmailReceiptDataSource<S>;

    fn decorate(&self, inner: S) -> Self::Out {
        EmailReceiptDataSource::new(inner)
    }
}
