use crate::decorator::Decorator;
use crate::source::DataSource;
use tracing::info;

/// Brackets every forwarded operation with begin/end lines. The payload and
/// the inner result pass through untouched.
#[derive(Debug)]
pub struct LoggedDataSource<S: DataSource> {
    inner: S,
}

impl<S: DataSource> LoggedDataSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: DataSource> DataSource for LoggedDataSource<S> {
    fn write_data(&self, data: &str) -> String {
        info!("Write Data Begin.");
        let written = self.inner.write_data(data);
        info!("Write Data End.");
        written
    }

    fn read_data(&self) {
        info!("Read Data Begin.");
        self.inner.read_data();
        info!("Read Data End.");
    }
}

/// Unit decorator producing [`LoggedDataSource`].
#[derive(Default, Clone, Copy, Debug)]
pub struct LoggingDecorator;

impl<S: DataSource> Decorator<S> for LoggingDecorator {
    type Out = LoggedDataSource<S>;

    fn decorate(&self, inner: S) -> Self::Out {
        LoggedDataSource::new(inner)
    }
}
