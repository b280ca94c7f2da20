use log::debug;
use serde_yaml::{Mapping, Value};

use super::merge::{merge, strip_nulls};
use super::{locations, ConfigError, Configuration, DefaultsSource, EnvSource, FileSource, Source};

/// Folds an ordered list of sources into a single [`Configuration`].
///
/// Later sources override overlapping keys of earlier ones. Sources that are
/// absent are skipped, every other failure aborts loading.
pub struct Loader {
    sources: Vec<Box<dyn Source>>,
}

impl Loader {
    pub fn new(sources: Vec<Box<dyn Source>>) -> Self {
        Self { sources }
    }

    /// Defaults, `/etc/woa/config.yaml`, `~/.woa/config.yaml`,
    /// `./config.yaml` and finally `$WOA_CONFIG`.
    pub fn standard() -> Result<Self, ConfigError> {
        let mut sources: Vec<Box<dyn Source>> = vec![Box::new(DefaultsSource::new())];
        for path in locations(dirs::home_dir())? {
            sources.push(Box::new(FileSource::new(path)));
        }
        sources.push(Box::new(EnvSource::new(super::ENV_VAR)));

        Ok(Self::new(sources))
    }

    pub fn load(&self) -> Result<Configuration, ConfigError> {
        let merged = self.sources.iter().try_fold(
            Value::Mapping(Mapping::new()),
            |merged, source| -> Result<Value, ConfigError> {
                match source.load()? {
                    Some(layer) => {
                        debug!("applying configuration from {}", source.name());
                        Ok(merge(merged, layer))
                    }
                    None => {
                        debug!("skipping configuration from {}", source.name());
                        Ok(merged)
                    }
                }
            },
        )?;

        // keys cleared by a null fall back to their defaults
        let config: Configuration =
            serde_yaml::from_value(strip_nulls(merged)).map_err(ConfigError::Unmarshal)?;

        if let Some(index) = config
            .machines
            .iter()
            .position(|machine| machine.name.trim().is_empty())
        {
            return Err(ConfigError::EmptyMachineName { index });
        }

        Ok(config)
    }
}
