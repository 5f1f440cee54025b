/*
[INPUT]:  Account credentials via signed headers
[OUTPUT]: Account state (margin, positions, leverage)
[POS]:    HTTP layer - account endpoints (require auth)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;
use serde_json::json;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{Account, Position};

impl FtxClient {
    /// Get account information including all open positions
    ///
    /// GET /account
    pub async fn get_account(&self) -> Result<Account> {
        self.call(Request::new(Method::GET, "/account", true)).await
    }

    /// Get open positions; `show_avg_price` adds recent average open
    /// price fields to each position
    ///
    /// GET /positions?showAvgPrice={show_avg_price}
    pub async fn get_positions(&self, show_avg_price: bool) -> Result<Vec<Position>> {
        self.call(
            Request::new(Method::GET, "/positions", true)
                .param("showAvgPrice", show_avg_price),
        )
        .await
    }

    /// Change the account-wide maximum leverage
    ///
    /// POST /account/leverage
    pub async fn change_account_leverage(&self, leverage: f64) -> Result<()> {
        self.call_ok(
            Request::new(Method::POST, "/account/leverage", true)
                .json_body(&json!({ "leverage": leverage }))?,
        )
        .await
    }
}
