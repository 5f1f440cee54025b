/*
[INPUT]:  Token names and creation/redemption sizes
[OUTPUT]: Leveraged token data and creation/redemption results
[POS]:    HTTP layer - leveraged token endpoints
[UPDATE]: When adding new token endpoints or changing response format
*/

use reqwest::Method;
use serde_json::json;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{
    EtfRebalanceInfo, LeveragedToken, LeveragedTokenBalance, LeveragedTokenCreationRequest,
    LeveragedTokenRedemptionRequest,
};

impl FtxClient {
    /// List all leveraged tokens
    ///
    /// GET /lt/tokens
    pub async fn list_leveraged_tokens(&self) -> Result<Vec<LeveragedToken>> {
        self.call(Request::new(Method::GET, "/lt/tokens", false))
            .await
    }

    /// Get info for a single leveraged token (e.g. `BULL`, `ETHBEAR`)
    ///
    /// GET /lt/{token_name}
    pub async fn get_leveraged_token_info(&self, token_name: &str) -> Result<LeveragedToken> {
        self.call(Request::new(Method::GET, format!("/lt/{token_name}"), false))
            .await
    }

    /// Get leveraged token balances
    ///
    /// GET /lt/balances
    pub async fn get_leveraged_token_balances(&self) -> Result<Vec<LeveragedTokenBalance>> {
        self.call(Request::new(Method::GET, "/lt/balances", true))
            .await
    }

    /// List pending and past creation requests
    ///
    /// GET /lt/creations
    pub async fn list_leveraged_token_creation_requests(
        &self,
    ) -> Result<Vec<LeveragedTokenCreationRequest>> {
        self.call(Request::new(Method::GET, "/lt/creations", true))
            .await
    }

    /// Request creation of leveraged token shares
    ///
    /// POST /lt/{token_name}/create
    pub async fn request_leveraged_token_creation(
        &self,
        token_name: &str,
        size: f64,
    ) -> Result<LeveragedTokenCreationRequest> {
        self.call(
            Request::new(Method::POST, format!("/lt/{token_name}/create"), true)
                .json_body(&json!({ "size": size }))?,
        )
        .await
    }

    /// List pending and past redemption requests
    ///
    /// GET /lt/redemptions
    pub async fn list_leveraged_token_redemption_requests(
        &self,
    ) -> Result<Vec<LeveragedTokenRedemptionRequest>> {
        self.call(Request::new(Method::GET, "/lt/redemptions", true))
            .await
    }

    /// Request redemption of leveraged token shares
    ///
    /// POST /lt/{token_name}/redeem
    pub async fn request_leveraged_token_redemption(
        &self,
        token_name: &str,
        size: f64,
    ) -> Result<LeveragedTokenRedemptionRequest> {
        self.call(
            Request::new(Method::POST, format!("/lt/{token_name}/redeem"), true)
                .json_body(&json!({ "size": size }))?,
        )
        .await
    }

    /// Get the ETF rebalance schedule
    ///
    /// GET /etfs/rebalance_info
    pub async fn request_etf_rebalance_info(&self) -> Result<EtfRebalanceInfo> {
        self.call(Request::new(Method::GET, "/etfs/rebalance_info", true))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, FtxClient};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FtxClient {
        FtxClient::new(ClientConfig {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            endpoint: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
    }

    #[tokio::test]
    async fn test_request_leveraged_token_creation() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": true,
            "result": {
                "id": 123,
                "token": "BULL",
                "requestedSize": 31431.0,
                "pending": true,
                "cost": 100000.0,
                "fee": 100.0,
                "requestedAt": "2019-03-05T09:56:55.728933+00:00"
            }
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/lt/BULL/create"))
            .and(body_json(serde_json::json!({"size": 31431.0})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = client_for(&server)
            .request_leveraged_token_creation("BULL", 31431.0)
            .await
            .expect("creation request failed");

        assert_eq!(request.token, "BULL");
        assert!(request.pending);
        assert_eq!(request.created_size, None);
    }
}
