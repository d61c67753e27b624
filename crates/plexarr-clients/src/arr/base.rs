use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ClientError;

/// Shape of the validation errors Radarr and Sonarr return on a failed add
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationFailure {
    error_message: String,
}

/// Pull `body[0].errorMessage` out of an *arr error response
pub fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<Vec<ValidationFailure>>(body)
        .ok()?
        .into_iter()
        .next()
        .map(|failure| failure.error_message)
}

pub(crate) struct BaseArrClient {
    client: Client,
    base_url: String,
    api_key: String,
    service: &'static str,
}

impl BaseArrClient {
    pub(crate) fn new(
        service: &'static str,
        base_url: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::request(service))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            service,
        })
    }

    pub(crate) fn service(&self) -> &'static str {
        self.service
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(self.url(path))
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(ClientError::request(self.service))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                service: self.service,
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(ClientError::request(self.service))
    }

    /// POST a resource; only `201 Created` is success
    pub(crate) async fn post_created<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .header("X-Api-Key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(ClientError::request(self.service))?;

        self.expect_created(response).await
    }

    async fn expect_created(&self, response: Response) -> Result<(), ClientError> {
        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        match rejection_message(&body) {
            Some(message) => Err(ClientError::Rejected {
                service: self.service,
                status: status.as_u16(),
                message,
            }),
            None => Err(ClientError::Status {
                service: self.service,
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_from_validation_array() {
        let body = r#"[{"propertyName": "TmdbId", "errorMessage": "This movie has already been added", "severity": "error"}]"#;
        assert_eq!(
            rejection_message(body).as_deref(),
            Some("This movie has already been added")
        );
    }

    #[test]
    fn test_rejection_message_unexpected_shapes() {
        assert_eq!(rejection_message(""), None);
        assert_eq!(rejection_message("[]"), None);
        assert_eq!(rejection_message(r#"{"message": "Unauthorized"}"#), None);
        assert_eq!(rejection_message(r#"[{"propertyName": "Path"}]"#), None);
        assert_eq!(rejection_message("<html>502 Bad Gateway</html>"), None);
    }
}
