use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::{Method, Url};

use super::{SendError, WakeupSender};
use crate::configuration::Http;

pub struct HttpWakeup {
    name: String,
    http: Http,
    client: Client,
}

impl HttpWakeup {
    pub fn new(name: &str, http: &Http) -> Result<Self, SendError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(name, http, client))
    }

    pub fn with_client(name: &str, http: &Http, client: Client) -> Self {
        Self {
            name: name.to_string(),
            http: http.clone(),
            client,
        }
    }

    // method, endpoint and body are used verbatim, an empty method means GET
    fn method(&self) -> Result<Method, SendError> {
        if self.http.method.is_empty() {
            return Ok(Method::GET);
        }

        Method::from_bytes(self.http.method.as_bytes()).map_err(|e| {
            SendError::InvalidRequest(format!("method {:?}: {}", self.http.method, e))
        })
    }

    fn url(&self) -> Result<Url, SendError> {
        Url::parse(&self.http.endpoint).map_err(|e| {
            SendError::InvalidRequest(format!("endpoint {:?}: {}", self.http.endpoint, e))
        })
    }
}

impl WakeupSender for HttpWakeup {
    fn wakeup(&self) -> Result<(), SendError> {
        let method = self.method()?;
        let url = self.url()?;

        debug!("sending {} {} to wake up {}", method, url, self.name);
        let mut request = self.client.request(method, url);
        if !self.http.body.is_empty() {
            request = request.body(self.http.body.clone());
        }

        let response = request.send().map_err(|e| {
            warn!("failed to send HTTP request for {}: {}", self.name, e);
            SendError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "HTTP request for {} to {} returned {}",
                self.name, self.http.endpoint, status
            );
            return Err(SendError::Status {
                endpoint: self.http.endpoint.clone(),
                status,
            });
        }

        Ok(())
    }
}
