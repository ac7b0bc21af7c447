use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

use crate::envelope::Envelope;

/// Shared HTTP client for the grocery backend. All responses travel in the
/// `{code, message, data}` envelope; transport failures map to `Network`,
/// malformed bodies to `Decode`, and non-200 envelope codes to `Backend`.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, GatewayError> {
        self.execute(self.client.get(self.url(path))).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Option<T>, GatewayError> {
        self.execute(self.client.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.execute_unit(self.client.post(self.url(path)).json(body))
            .await
    }

    /// Some write endpoints take their arguments as query parameters with an
    /// empty body (the confirm endpoint does).
    pub(crate) async fn post_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), GatewayError> {
        self.execute_unit(self.client.post(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.execute_unit(self.client.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.execute_unit(self.client.delete(self.url(path))).await
    }

    pub(crate) async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), GatewayError> {
        self.execute_unit(self.client.delete(self.url(path)).query(query))
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, GatewayError> {
        let response = request.send().await.map_err(|_| GatewayError::Network)?;
        if !response.status().is_success() {
            return Err(GatewayError::Network);
        }

        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|_| GatewayError::Decode)?;
        envelope.into_data()
    }

    async fn execute_unit(&self, request: RequestBuilder) -> Result<(), GatewayError> {
        let _: Option<serde_json::Value> = self.execute(request).await?;
        Ok(())
    }
}
