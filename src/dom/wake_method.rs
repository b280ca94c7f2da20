use super::super::configuration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WakeMethod {
    Udp,
    Http(configuration::Http),
}

impl WakeMethod {
    // presence of the HTTP section is the only thing that matters
    pub fn select(machine: &configuration::Machine) -> Self {
        match &machine.http {
            Some(http) => WakeMethod::Http(http.clone()),
            None => WakeMethod::Udp,
        }
    }
}

impl From<&configuration::Machine> for WakeMethod {
    fn from(machine: &configuration::Machine) -> Self {
        Self::select(machine)
    }
}
