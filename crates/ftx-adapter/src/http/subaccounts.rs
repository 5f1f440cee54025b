/*
[INPUT]:  Sub-account nicknames and transfer parameters
[OUTPUT]: Sub-account management results
[POS]:    HTTP layer - sub-account endpoints (require auth)
[UPDATE]: When adding new sub-account endpoints or changing response format
*/

use reqwest::Method;
use serde_json::json;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{SubAccount, SubAccountTransfer, TransferBetweenSubAccountsParams};

impl FtxClient {
    /// List all sub-accounts
    ///
    /// GET /subaccounts
    pub async fn get_subaccounts(&self) -> Result<Vec<SubAccount>> {
        self.call(Request::new(Method::GET, "/subaccounts", true))
            .await
    }

    /// Create a sub-account
    ///
    /// POST /subaccounts
    pub async fn create_subaccount(&self, nickname: &str) -> Result<SubAccount> {
        self.call(
            Request::new(Method::POST, "/subaccounts", true)
                .json_body(&json!({ "nickname": nickname }))?,
        )
        .await
    }

    /// Rename a sub-account
    ///
    /// POST /subaccounts/update_name
    pub async fn change_subaccount_name(&self, nickname: &str, new_nickname: &str) -> Result<()> {
        self.call_ok(
            Request::new(Method::POST, "/subaccounts/update_name", true)
                .json_body(&json!({ "nickname": nickname, "newNickname": new_nickname }))?,
        )
        .await
    }

    /// Delete a sub-account; it must hold no balances
    ///
    /// DELETE /subaccounts
    pub async fn delete_subaccount(&self, nickname: &str) -> Result<()> {
        self.call_ok(
            Request::new(Method::DELETE, "/subaccounts", true)
                .json_body(&json!({ "nickname": nickname }))?,
        )
        .await
    }

    /// Transfer between sub-accounts (`"main"` names the main account)
    ///
    /// POST /subaccounts/transfer
    pub async fn transfer_between_subaccounts(
        &self,
        params: TransferBetweenSubAccountsParams,
    ) -> Result<SubAccountTransfer> {
        self.call(
            Request::new(Method::POST, "/subaccounts/transfer", true).json_body(&params)?,
        )
        .await
    }
}
