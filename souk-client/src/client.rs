//! Document API client implementation

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::models::company::{CompanyInfo, CompanyInfoUpdate};
use shared::models::credit_note::{
    CreditNote, CreditNoteCreate, CreditNoteStatus, CreditNoteStatusUpdate, CreditNoteUpdate,
};
use shared::models::purchase_order::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderStatus, PurchaseOrderStatusUpdate,
    PurchaseOrderUpdate,
};
use shared::response::{API_CODE_SUCCESS, ApiResponse};
use tracing::{debug, warn};

use crate::{ClientConfig, ClientError, ClientResult};

// ============================================================================
// DocumentApi Trait
// ============================================================================

/// Remote document API surface
#[async_trait]
pub trait DocumentApi: Send + Sync {
    // ---- Bons d'achat ----
    async fn list_purchase_orders(&self) -> ClientResult<Vec<PurchaseOrder>>;
    async fn get_purchase_order(&self, id: &str) -> ClientResult<PurchaseOrder>;
    async fn create_purchase_order(
        &self,
        payload: &PurchaseOrderCreate,
    ) -> ClientResult<PurchaseOrder>;
    async fn update_purchase_order(
        &self,
        id: &str,
        payload: &PurchaseOrderUpdate,
    ) -> ClientResult<PurchaseOrder>;
    async fn set_purchase_order_status(
        &self,
        id: &str,
        status: PurchaseOrderStatus,
    ) -> ClientResult<PurchaseOrder>;
    async fn delete_purchase_order(&self, id: &str) -> ClientResult<()>;

    // ---- Bons d'avoir ----
    async fn list_credit_notes(&self) -> ClientResult<Vec<CreditNote>>;
    async fn get_credit_note(&self, id: &str) -> ClientResult<CreditNote>;
    async fn create_credit_note(&self, payload: &CreditNoteCreate) -> ClientResult<CreditNote>;
    async fn update_credit_note(
        &self,
        id: &str,
        payload: &CreditNoteUpdate,
    ) -> ClientResult<CreditNote>;
    async fn set_credit_note_status(
        &self,
        id: &str,
        status: CreditNoteStatus,
    ) -> ClientResult<CreditNote>;
    async fn delete_credit_note(&self, id: &str) -> ClientResult<()>;

    // ---- Company (issuer block for printed documents) ----
    async fn get_company_info(&self) -> ClientResult<CompanyInfo>;
    async fn update_company_info(&self, payload: &CompanyInfoUpdate) -> ClientResult<CompanyInfo>;
}

// ============================================================================
// SoukClient - HTTP client
// ============================================================================

/// HTTP client for the back-office document API
#[derive(Debug, Clone)]
pub struct SoukClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl SoukClient {
    /// Create a new client from a configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Server base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Current bearer token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "POST");
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "PUT");
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!(path, "DELETE");
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_empty(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let envelope: ApiResponse<T> = Self::unwrap_envelope(resp).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into()))
    }

    async fn handle_empty(resp: reqwest::Response) -> ClientResult<()> {
        let _: ApiResponse<serde_json::Value> = Self::unwrap_envelope(resp).await?;
        Ok(())
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(%status, "document API returned an error");
            return Err(ClientError::from_status(status, text));
        }

        let envelope: ApiResponse<T> = resp.json().await?;
        if envelope.code != API_CODE_SUCCESS {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }
}

#[async_trait]
impl DocumentApi for SoukClient {
    async fn list_purchase_orders(&self) -> ClientResult<Vec<PurchaseOrder>> {
        self.get("/api/purchase-orders").await
    }

    async fn get_purchase_order(&self, id: &str) -> ClientResult<PurchaseOrder> {
        self.get(&format!("/api/purchase-orders/{}", id)).await
    }

    async fn create_purchase_order(
        &self,
        payload: &PurchaseOrderCreate,
    ) -> ClientResult<PurchaseOrder> {
        self.post("/api/purchase-orders", payload).await
    }

    async fn update_purchase_order(
        &self,
        id: &str,
        payload: &PurchaseOrderUpdate,
    ) -> ClientResult<PurchaseOrder> {
        self.put(&format!("/api/purchase-orders/{}", id), payload)
            .await
    }

    async fn set_purchase_order_status(
        &self,
        id: &str,
        status: PurchaseOrderStatus,
    ) -> ClientResult<PurchaseOrder> {
        let payload = PurchaseOrderStatusUpdate { status };
        self.post(&format!("/api/purchase-orders/{}/status", id), &payload)
            .await
    }

    async fn delete_purchase_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/purchase-orders/{}", id)).await
    }

    async fn list_credit_notes(&self) -> ClientResult<Vec<CreditNote>> {
        self.get("/api/credit-notes").await
    }

    async fn get_credit_note(&self, id: &str) -> ClientResult<CreditNote> {
        self.get(&format!("/api/credit-notes/{}", id)).await
    }

    async fn create_credit_note(&self, payload: &CreditNoteCreate) -> ClientResult<CreditNote> {
        self.post("/api/credit-notes", payload).await
    }

    async fn update_credit_note(
        &self,
        id: &str,
        payload: &CreditNoteUpdate,
    ) -> ClientResult<CreditNote> {
        self.put(&format!("/api/credit-notes/{}", id), payload).await
    }

    async fn set_credit_note_status(
        &self,
        id: &str,
        status: CreditNoteStatus,
    ) -> ClientResult<CreditNote> {
        let payload = CreditNoteStatusUpdate { status };
        self.post(&format!("/api/credit-notes/{}/status", id), &payload)
            .await
    }

    async fn delete_credit_note(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/credit-notes/{}", id)).await
    }

    async fn get_company_info(&self) -> ClientResult<CompanyInfo> {
        self.get("/api/company").await
    }

    async fn update_company_info(&self, payload: &CompanyInfoUpdate) -> ClientResult<CompanyInfo> {
        self.put("/api/company", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = SoukClient::new(&ClientConfig::new("https://api.example.ma/"));
        assert_eq!(client.base_url(), "https://api.example.ma");
    }

    #[test]
    fn test_token_handling() {
        let mut client = SoukClient::new(&ClientConfig::default());
        assert!(client.token().is_none());

        client.set_token("abc123");
        assert_eq!(client.token(), Some("abc123"));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc123"));

        client.clear_token();
        assert!(client.token().is_none());
        assert!(client.auth_header().is_none());
    }

    #[test]
    fn test_status_payload_wire_format() {
        let payload = PurchaseOrderStatusUpdate {
            status: PurchaseOrderStatus::Received,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "{\"status\":\"RECEIVED\"}");
    }
}
