use std::path::PathBuf;

use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod machine;
mod merge;
mod ping;
mod server;
mod source;

pub use error::ConfigError;
pub use loader::Loader;
pub use machine::{Http, Machine};
pub use ping::Ping;
pub use server::Server;
pub use source::{DefaultsSource, EnvSource, FileSource, Source};

pub const FILENAME: &str = "config.yaml";
pub const SYSTEM_DIRECTORY: &str = "/etc/woa";
pub const USER_DIRECTORY: &str = ".woa";
pub const ENV_VAR: &str = "WOA_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub ping: Ping,
}

impl Configuration {
    // first case-insensitive match wins if names are duplicated
    pub fn find_machine(&self, name: &str) -> Option<&Machine> {
        self.machines
            .iter()
            .find(|machine| fold_case(&machine.name).eq(fold_case(name)))
    }
}

// per-character simple case folding, a final sigma folds like any other sigma
fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

/// Configuration files in the order they are applied, later files override
/// earlier ones.
pub fn locations(home: Option<PathBuf>) -> Result<Vec<PathBuf>, ConfigError> {
    let home = home.ok_or(ConfigError::HomeDirectory)?;

    Ok(vec![
        PathBuf::from(SYSTEM_DIRECTORY).join(FILENAME),
        home.join(USER_DIRECTORY).join(FILENAME),
        PathBuf::from(".").join(FILENAME),
    ])
}

/// Resolves the configuration from the defaults, the system, user and working
/// directory files and the `WOA_CONFIG` environment variable.
pub fn load() -> anyhow::Result<Configuration> {
    let loader = Loader::standard()?;
    Ok(loader.load()?)
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    static MACHINE_NAME: &str = "Bedroom-PC";
    static MACHINE_MAC: &str = "aa:bb:cc:dd:ee:ff";

    #[fixture]
    fn config() -> Configuration {
        Configuration {
            machines: vec![
                Machine::new(MACHINE_NAME, MACHINE_MAC),
                Machine::new("NAS", "11:22:33:44:55:66"),
                Machine::new("bedroom-pc", "01:02:03:04:05:06"),
            ],
            ..Default::default()
        }
    }

    #[rstest]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert!(config.machines.is_empty());
        assert_eq!(":7777", config.server.listen);
        assert!(!config.ping.privileged);
    }

    #[rstest]
    fn test_find_machine_ignores_case(config: Configuration) {
        let machine = config.find_machine("BEDROOM-pc").unwrap();
        assert_eq!(MACHINE_NAME, machine.name);
    }

    #[rstest]
    fn test_find_machine_returns_first_match(config: Configuration) {
        let machine = config.find_machine("bedroom-pc").unwrap();
        assert_eq!(MACHINE_MAC, machine.mac);
    }

    #[rstest]
    #[case("σας")]
    #[case("σασ")]
    #[case("ΣΑΣ")]
    fn test_find_machine_folds_final_sigma(#[case] name: &str) {
        let config = Configuration {
            machines: vec![Machine::new("ΣΑΣ", MACHINE_MAC)],
            ..Default::default()
        };
        assert_eq!("ΣΑΣ", config.find_machine(name).unwrap().name);
    }

    #[rstest]
    fn test_find_machine_requires_exact_name(config: Configuration) {
        assert!(config.find_machine("bedroom").is_none());
        assert!(config.find_machine("nonexistent").is_none());
    }

    #[rstest]
    fn test_locations_are_ordered_by_precedence() {
        let locations = locations(Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(
            vec![
                PathBuf::from("/etc/woa/config.yaml"),
                PathBuf::from("/home/user/.woa/config.yaml"),
                PathBuf::from("./config.yaml"),
            ],
            locations
        );
    }

    #[rstest]
    fn test_locations_fail_without_home_directory() {
        assert!(matches!(locations(None), Err(ConfigError::HomeDirectory)));
    }

    #[rstest]
    fn test_parse_example() {
        let mut config_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        config_path.push("config.yaml.example");

        let loader = Loader::new(vec![
            Box::new(DefaultsSource::new()),
            Box::new(FileSource::new(config_path)),
        ]);
        let config = loader.load().unwrap();

        assert_eq!(2, config.machines.len());
        assert!(config.machines[0].http.is_none());
        assert!(config.machines[1].http.is_some());
    }
}
