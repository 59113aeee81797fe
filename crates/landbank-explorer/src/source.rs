use async_trait::async_trait;
use landbank_client::{AdsQuery, ClientError, LandbankClient, LandbankResponse};
use serde_json::Value;

/// Anything that can answer a listing query with a LandBank envelope.
///
/// The explorer only talks to this trait, so tests can drive it with
/// canned envelopes instead of an HTTP server.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, query: &AdsQuery) -> Result<LandbankResponse<Value>, ClientError>;
}

#[async_trait]
impl ListingSource for LandbankClient {
    async fn fetch(&self, query: &AdsQuery) -> Result<LandbankResponse<Value>, ClientError> {
        self.list_ads(query).await
    }
}
