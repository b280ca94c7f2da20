use std::env::{self, VarError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::trace;
use serde_yaml::{Mapping, Value};

#[cfg(test)]
use mockall::automock;

use super::{ConfigError, Configuration};

/// A single configuration layer.
///
/// `load` returns `None` if the layer is absent and must be skipped.
#[cfg_attr(test, automock)]
pub trait Source {
    fn name(&self) -> String;
    fn load(&self) -> Result<Option<Value>, ConfigError>;
}

// an empty document is an empty layer, anything but a mapping is rejected
fn parse_document(text: &str, origin: &str) -> Result<Value, ConfigError> {
    if text.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    let value: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(_) => Ok(value),
        _ => Err(ConfigError::NotAMapping {
            origin: origin.to_string(),
        }),
    }
}

#[derive(Debug, Default)]
pub struct DefaultsSource {
    defaults: Configuration,
}

impl DefaultsSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Source for DefaultsSource {
    fn name(&self) -> String {
        "defaults".to_string()
    }

    fn load(&self) -> Result<Option<Value>, ConfigError> {
        serde_yaml::to_value(&self.defaults)
            .map(Some)
            .map_err(ConfigError::Defaults)
    }
}

#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Source for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<Value>, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("{} does not exist", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        parse_document(&text, &self.name()).map(Some)
    }
}

#[derive(Debug)]
pub struct EnvSource {
    var: String,
}

impl EnvSource {
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Source for EnvSource {
    fn name(&self) -> String {
        format!("${}", self.var)
    }

    // always contributes a layer, an unset variable is an empty document
    fn load(&self) -> Result<Option<Value>, ConfigError> {
        let text = match env::var(&self.var) {
            Ok(text) => text,
            Err(VarError::NotPresent) => String::new(),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::EnvNotUnicode {
                    var: self.var.clone(),
                })
            }
        };

        parse_document(&text, &self.name()).map(Some)
    }
}
