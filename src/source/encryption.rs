use crate::decorator::Decorator;
use crate::source::DataSource;
use tracing::info;

/// Seals written data in an `<encrypt>` envelope before it travels inward;
/// announces decryption after an inner read completes.
#[derive(Debug)]
pub struct EncryptedDataSource<S: DataSource> {
    inner: S,
}

impl<S: DataSource> EncryptedDataSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: DataSource> DataSource for EncryptedDataSource<S> {
    fn write_data(&self, data: &str) -> String {
        let sealed = format!("<encrypt>{data}</encrypt>");
        self.inner.write_data(&sealed)
    }

    fn read_data(&self) {
        self.inner.read_data();
        info!("Decrypt the data.");
    }
}

/// Unit decorator producing [`EncryptedDataSource`].
#[derive(Default, Clone, Copy, Debug)]
pub struct EncryptionDecorator;

impl<S: DataSource> Decorator<S> for EncryptionDecorator {
    type Out = EncryptedDataSource<S>;

    fn decorate(&self, inner: S) -> Self::Out {
        EncryptedDataSource::new(inner)
    }
}
