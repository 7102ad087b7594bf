//! The data-source chain: a file-backed leaf that cross-cutting behaviors
//! wrap around.
//!
//! Write-style calls transform outermost-first: each layer applies its own
//! change to the payload before forwarding inward, so the leaf receives the
//! fully wrapped value and that value travels back up the chain as the return
//! of `write_data`. Read-style calls forward inward first and run each
//! layer's post-step on the way out.

mod compression;
mod encryption;
mod file;
mod logging;
mod receipt;

pub use compression::{CompressedDataSource, CompressionDecorator};
pub use encryption::{EncryptedDataSource, EncryptionDecorator};
pub use file::FileDataSource;
pub use logging::{LoggedDataSource, LoggingDecorator};
pub use receipt::{EmailReceiptDataSource, EmailReceiptDecorator};

use crate::decorator::{Decorator, DecoratorExt};
use crate::error::ConfigError;

/// The capability every node in a data-source chain satisfies.
///
/// `write_data` returns the payload as it arrived at the leaf, after every
/// layer above applied its transformation. `read_data` only emits trace
/// lines.
#[cfg_attr(test, mockall::automock)]
pub trait DataSource {
    fn write_data(&self, data: &str) -> String;

    fn read_data(&self);
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn write_data(&self, data: &str) -> String {
        (**self).write_data(data)
    }

    fn read_data(&self) {
        (**self).read_data();
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn write_data(&self, data: &str) -> String {
        (**self).write_data(data)
    }

    fn read_data(&self) {
        (**self).read_data();
    }
}

/// Builds the secured stack from the classic scenario:
/// `Encryption(Compression(File))`.
///
/// Writing through the result seals the payload in `<encrypt>`, then
/// `<compress>`, before the file leaf sees it.
pub fn secured_file<S: Into<String>>(filename: S) -> Result<impl DataSource, ConfigError> {
    let leaf = FileDataSource::new(filename)?;
    Ok(DecoratorExt::<FileDataSource>::and_then(CompressionDecorator, EncryptionDecorator).decorate(leaf))
}
