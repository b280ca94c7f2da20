use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(default = "Server::default_listen")]
    pub listen: String,
}

impl Server {
    pub fn default_listen() -> String {
        ":7777".to_string()
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen: Server::default_listen(),
        }
    }
}
