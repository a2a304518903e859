use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::*;
use anyhow::Result;
use reqwest::Client;

pub struct RelayService {
    client: Client,
    api_url: String,
    api_key: String,
    service_name: String,
}

impl RelayService {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_url: config.api_url,
            api_key: config.api_key,
            service_name: config.service_name,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Forwards `message` to the remote service and returns its reply text.
    pub async fn send(&self, message: &str) -> Result<String, RelayError> {
        let request = RelayRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(RelayError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status));
        }

        let relay_response: RelayResponse =
            response.json().await.map_err(RelayError::from_body)?;

        Ok(relay_response.into_reply())
    }

    /// Runs one chat round trip. Relay failures become the reply text
    /// instead of an error so the chat page always renders.
    pub async fn exchange(&self, user_message: String) -> ChatExchange {
        let bot_response = match self.send(&user_message).await {
            Ok(reply) => {
                log::info!("Relay answered with {} characters", reply.chars().count());
                reply
            }
            Err(err) => {
                match std::error::Error::source(&err) {
                    Some(source) => log::warn!("Relay to {} failed: {}: {}", self.service_name, err, source),
                    None => log::warn!("Relay to {} failed: {}", self.service_name, err),
                }
                format!("Error connecting to {}: {}", self.service_name, err)
            }
        };

        ChatExchange {
            user_message,
            bot_response,
        }
    }
}
