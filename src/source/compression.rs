use crate::decorator::Decorator;
use crate::source::DataSource;
use tracing::info;

/// Seals written data in a `<compress>` envelope before it travels inward;
/// announces decompression after an inner read completes.
#[derive(Debug)]
pub struct CompressedDataSource<S: DataSource> {
    inner: S,
}

impl<S: DataSource> CompressedDataSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: DataSource> DataSource for CompressedDataSource<S> {
    fn write_data(&self, data: &str) -> String {
        let packed = format!("<compress>{data}</compress>");
        self.inner.write_data(&packed)
    }

    fn read_data(&self) {
        self.inner.read_data();
        info!("Decompress the data.");
    }
}

/// Unit decorator producing [`CompressedDataSource`].
#[derive(Default, Clone, Copy, Debug)]
pub struct CompressionDecorator;

impl<S: DataSource> Decorator<S> for CompressionDecorator {
    type Out = CompressedDataSource<S>;

    fn decorate(&self, inner: S) -> Self::Out {
        CompressedDataSource::new(inner)
    }
}
