use crate::error::ClientError;
use serde_json::Value;
use shared::record::{
    OrderDraft, OrderRecord, ProductRecord, build_status_payload, normalize_order,
    normalize_product, serialize_order_payload, serialize_product_input,
};
use tracing::debug;

/// Environment variables consulted for the backend base URL, in order.
const BASE_URL_KEYS: &[&str] = &["API_URL", "BACKEND_URL", "PUBLIC_API_URL"];

const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Talks to the order-management REST API. Outbound bodies go through the
/// broadcast serializers, inbound bodies through the normalizers, so
/// callers only ever see the canonical record shapes.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        let candidates = BASE_URL_KEYS.iter().map(|key| std::env::var(key).ok());
        Self::new(pick_base_url(candidates))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, ClientError> {
        let body = expect_json(self.http.get(self.url("/products")).send().await?).await?;
        Ok(normalize_array(&body, normalize_product))
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductRecord, ClientError> {
        let body =
            expect_json(self.http.get(self.url(&format!("/products/{id}"))).send().await?).await?;
        Ok(normalize_product(&body))
    }

    pub async fn create_product(
        &self,
        name: &str,
        unit_price: f64,
    ) -> Result<ProductRecord, ClientError> {
        let payload = serialize_product_input(name, unit_price);
        debug!("POST /products {payload}");

        let response = self
            .http
            .post(self.url("/products"))
            .json(&payload)
            .send()
            .await?;
        Ok(normalize_product(&expect_json(response).await?))
    }

    pub async fn update_product(
        &self,
        id: i64,
        name: &str,
        unit_price: f64,
    ) -> Result<ProductRecord, ClientError> {
        let payload = serialize_product_input(name, unit_price);

        let response = self
            .http
            .put(self.url(&format!("/products/{id}")))
            .json(&payload)
            .send()
            .await?;
        Ok(normalize_product(&expect_json(response).await?))
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        expect_json(response).await?;
        Ok(())
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>, ClientError> {
        let body = expect_json(self.http.get(self.url("/orders")).send().await?).await?;
        Ok(normalize_array(&body, normalize_order))
    }

    pub async fn get_order(&self, id: i64) -> Result<OrderRecord, ClientError> {
        let body =
            expect_json(self.http.get(self.url(&format!("/orders/{id}"))).send().await?).await?;
        Ok(normalize_order(&body))
    }

    pub async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord, ClientError> {
        let payload = serialize_order_payload(draft);
        debug!("POST /orders {payload}");

        let response = self
            .http
            .post(self.url("/orders"))
            .json(&payload)
            .send()
            .await?;
        Ok(normalize_order(&expect_json(response).await?))
    }

    pub async fn update_order(
        &self,
        id: i64,
        draft: &OrderDraft,
    ) -> Result<OrderRecord, ClientError> {
        let payload = serialize_order_payload(draft);

        let response = self
            .http
            .put(self.url(&format!("/orders/{id}")))
            .json(&payload)
            .send()
            .await?;
        Ok(normalize_order(&expect_json(response).await?))
    }

    pub async fn set_order_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<OrderRecord, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/orders/{id}/status")))
            .json(&build_status_payload(status))
            .send()
            .await?;
        Ok(normalize_order(&expect_json(response).await?))
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/orders/{id}")))
            .send()
            .await?;
        expect_json(response).await?;
        Ok(())
    }
}

/// First non-blank candidate wins; without one the client assumes a local
/// backend on the port the server defaults to.
fn pick_base_url(candidates: impl IntoIterator<Item = Option<String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn normalize_array<T>(body: &Value, normalize: fn(&Value) -> T) -> Vec<T> {
    body.as_array()
        .map(|rows| rows.iter().map(normalize).collect())
        .unwrap_or_default()
}

async fn expect_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Error bodies are `{"status":"error","message":…}` on current
    // backends and `{"error":…}` on older ones.
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
