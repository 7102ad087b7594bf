use crate::error::ConfigError;
use crate::source::DataSource;
use tracing::info;

/// The leaf data source: holds the target filename and nothing else.
///
/// Construction is the only fallible step in a chain; an empty filename is
/// rejected up front so every later operation can stay infallible.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    filename: String,
}

impl FileDataSource {
    pub fn new<S: Into<String>>(filename: S) -> Result<Self, ConfigError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(ConfigError::invalid_config("filename must not be empty"));
        }
        Ok(Self { filename })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl DataSource for FileDataSource {
    fn write_data(&self, data: &str) -> String {
        info!("Write {data} to {}", self.filename);
        data.to_owned()
    }

    fn read_data(&self) {
        info!("Read data from {}.", self.filename);
    }
}
