use log::{debug, info};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::configuration::Configuration;
use crate::dom::{Machine, Wakeup};
use crate::networking::{HttpWakeup, SendError, WakeOnLan, WakeupSender};
use crate::utils::{AddressParseError, HardwareAddr};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("either a MAC address or a machine name must be specified, but not both")]
    Usage,

    #[error("machine with name {name:?} not found")]
    NotFound { name: String },

    #[error(transparent)]
    Address(#[from] AddressParseError),

    #[error(transparent)]
    Send(#[from] SendError),
}

impl DispatchError {
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            DispatchError::Usage | DispatchError::NotFound { .. } | DispatchError::Address(_) => {
                exitcode::USAGE
            }
            DispatchError::Send(_) => exitcode::UNAVAILABLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Mac(String),
    Name(String),
}

impl Target {
    pub fn from_args(mac: Option<String>, name: Option<String>) -> Result<Self, DispatchError> {
        match (mac, name) {
            (Some(mac), None) => Ok(Target::Mac(mac)),
            (None, Some(name)) => Ok(Target::Name(name)),
            _ => Err(DispatchError::Usage),
        }
    }

    pub fn resolve(&self, config: &Configuration) -> Result<Machine, DispatchError> {
        match self {
            Target::Mac(mac) => {
                let mac: HardwareAddr = mac.parse()?;
                Ok(Machine::from_mac(mac))
            }
            Target::Name(name) => {
                let machine = config
                    .find_machine(name)
                    .ok_or_else(|| DispatchError::NotFound { name: name.clone() })?;
                Ok(Machine::try_from(machine)?)
            }
        }
    }
}

#[cfg_attr(test, automock)]
pub trait WakeupFactory {
    fn create_wakeup(&self, machine: &Machine) -> Result<Box<dyn WakeupSender>, SendError>;
}

pub struct Factory {}

impl WakeupFactory for Factory {
    fn create_wakeup(&self, machine: &Machine) -> Result<Box<dyn WakeupSender>, SendError> {
        match &machine.wakeup {
            Wakeup::MagicPacket(mac) => Ok(Box::new(WakeOnLan::new(&machine.name, *mac))),
            Wakeup::Http(http) => Ok(Box::new(HttpWakeup::new(&machine.name, http)?)),
        }
    }
}

/// Resolves the target against the configuration and wakes it up with the
/// method selected for the resolved machine.
pub fn wakeup(
    target: &Target,
    config: &Configuration,
    factory: &dyn WakeupFactory,
) -> Result<Machine, DispatchError> {
    let machine = target.resolve(config)?;
    debug!("resolved {:?} to {}", target, machine);

    let sender = factory.create_wakeup(&machine)?;
    match &machine.wakeup {
        Wakeup::MagicPacket(mac) => info!("sending magic packet to {} ({})", machine.name, mac),
        Wakeup::Http(http) => info!(
            "sending HTTP request to {} ({} {})",
            machine.name, http.method, http.endpoint
        ),
    }
    sender.wakeup()?;

    Ok(machine)
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::configuration::{self, Http};
    use crate::dom::machine::test::*;
    use crate::networking::MockWakeupSender;

    #[fixture]
    fn config(
        udp_machine: configuration::Machine,
        http_machine: configuration::Machine,
    ) -> Configuration {
        Configuration {
            machines: vec![
                udp_machine,
                http_machine,
                configuration::Machine::new("Broken", "01:02"),
            ],
            ..Default::default()
        }
    }

    fn sending_factory(times: usize) -> MockWakeupFactory {
        let mut factory = MockWakeupFactory::new();
        factory.expect_create_wakeup().times(times).returning(|_| {
            let mut sender = MockWakeupSender::new();
            sender.expect_wakeup().times(1).returning(|| Ok(()));
            Ok(Box::new(sender) as Box<dyn WakeupSender>)
        });
        factory
    }

    #[rstest]
    #[case(Some("01:02:03:04:05:06"), None, Target::Mac(MACHINE_MAC.to_string()))]
    #[case(None, Some("NAS"), Target::Name("NAS".to_string()))]
    fn test_target_from_args(
        #[case] mac: Option<&str>,
        #[case] name: Option<&str>,
        #[case] expected: Target,
    ) {
        let target =
            Target::from_args(mac.map(str::to_string), name.map(str::to_string)).unwrap();
        assert_eq!(expected, target);
    }

    #[rstest]
    #[case(Some("01:02:03:04:05:06"), Some("NAS"))]
    #[case(None, None)]
    fn test_target_from_args_requires_exactly_one(
        #[case] mac: Option<&str>,
        #[case] name: Option<&str>,
    ) {
        let err =
            Target::from_args(mac.map(str::to_string), name.map(str::to_string)).unwrap_err();
        assert!(matches!(err, DispatchError::Usage));
        assert_eq!(exitcode::USAGE, err.exit_code());
    }

    #[rstest]
    fn test_resolve_explicit_mac(config: Configuration) {
        let machine = Target::Mac("01-02-03-04-05-06".to_string())
            .resolve(&config)
            .unwrap();
        assert_eq!(
            Wakeup::MagicPacket(HardwareAddr::new([1, 2, 3, 4, 5, 6])),
            machine.wakeup
        );
    }

    #[rstest]
    fn test_resolve_explicit_mac_fails_on_malformed_text(config: Configuration) {
        let err = Target::Mac("01:02:03".to_string())
            .resolve(&config)
            .unwrap_err();
        match err {
            DispatchError::Address(e) => assert_eq!("01:02:03", e.value),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[rstest]
    fn test_resolve_name_ignores_case(config: Configuration) {
        let machine = Target::Name("bedroom-pc".to_string())
            .resolve(&config)
            .unwrap();
        assert_eq!(MACHINE_NAME, machine.name);
    }

    #[rstest]
    fn test_resolve_unknown_name_fails(config: Configuration) {
        let err = Target::Name("nonexistent".to_string())
            .resolve(&config)
            .unwrap_err();
        match err {
            DispatchError::NotFound { ref name } => assert_eq!("nonexistent", name),
            ref other => panic!("unexpected error {:?}", other),
        }
        assert!(err.to_string().contains("\"nonexistent\""));
    }

    #[rstest]
    fn test_resolve_name_with_malformed_mac_fails(config: Configuration) {
        let err = Target::Name("broken".to_string())
            .resolve(&config)
            .unwrap_err();
        assert!(matches!(err, DispatchError::Address(_)));
    }

    #[rstest]
    fn test_resolve_http_machine(config: Configuration, http: Http) {
        let machine = Target::Name("nas".to_string()).resolve(&config).unwrap();
        assert_eq!(Wakeup::Http(http), machine.wakeup);
    }

    #[rstest]
    fn test_wakeup_sends_once(config: Configuration) {
        let factory = sending_factory(1);
        let machine = wakeup(&Target::Name("Bedroom-PC".to_string()), &config, &factory).unwrap();
        assert_eq!(MACHINE_NAME, machine.name);
    }

    #[rstest]
    fn test_wakeup_unknown_name_never_creates_sender(config: Configuration) {
        let factory = sending_factory(0);
        let err = wakeup(&Target::Name("nonexistent".to_string()), &config, &factory).unwrap_err();
        assert_eq!(exitcode::USAGE, err.exit_code());
    }

    #[rstest]
    fn test_wakeup_bad_mac_never_creates_sender(config: Configuration) {
        let factory = sending_factory(0);
        assert!(wakeup(&Target::Mac("zz".to_string()), &config, &factory).is_err());
    }

    #[rstest]
    fn test_wakeup_reports_send_error(config: Configuration) {
        let mut factory = MockWakeupFactory::new();
        factory.expect_create_wakeup().times(1).returning(|_| {
            let mut sender = MockWakeupSender::new();
            sender.expect_wakeup().times(1).returning(|| {
                Err(SendError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "no broadcast",
                )))
            });
            Ok(Box::new(sender) as Box<dyn WakeupSender>)
        });

        let err = wakeup(&Target::Mac(MACHINE_MAC.to_string()), &config, &factory).unwrap_err();
        assert!(matches!(err, DispatchError::Send(SendError::Io(_))));
        assert_eq!(exitcode::UNAVAILABLE, err.exit_code());
    }

    #[rstest]
    fn test_factory_creates_sender_for_each_method(config: Configuration) {
        let factory = Factory {};
        for name in ["Bedroom-PC", "NAS"] {
            let machine = Target::Name(name.to_string()).resolve(&config).unwrap();
            assert!(factory.create_wakeup(&machine).is_ok());
        }
    }
}
