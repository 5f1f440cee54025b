/*
[INPUT]:  Coin identifiers, transfer windows, withdrawal parameters
[OUTPUT]: Wallet data (coins, balances, deposits, withdrawals, saved addresses)
[POS]:    HTTP layer - wallet endpoints (require auth)
[UPDATE]: When adding new wallet endpoints or changing response format
*/

use std::collections::HashMap;

use reqwest::Method;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{
    Airdrop, Balance, Coin, CreateSavedAddressParams, Deposit, DepositAddress, SavedAddress,
    Withdrawal, WithdrawalFee, WithdrawParams,
};

impl FtxClient {
    /// List all coins the exchange knows about
    ///
    /// GET /wallet/coins
    pub async fn get_coins(&self) -> Result<Vec<Coin>> {
        self.call(Request::new(Method::GET, "/wallet/coins", true))
            .await
    }

    /// Get balances for the account (or sub-account) this client is scoped to
    ///
    /// GET /wallet/balances
    pub async fn get_balances(&self) -> Result<Vec<Balance>> {
        self.call(Request::new(Method::GET, "/wallet/balances", true))
            .await
    }

    /// Get balances across all accounts, keyed by account nickname
    /// (`"main"` for the main account)
    ///
    /// GET /wallet/all_balances
    pub async fn get_all_balances(&self) -> Result<HashMap<String, Vec<Balance>>> {
        self.call(Request::new(Method::GET, "/wallet/all_balances", true))
            .await
    }

    /// Get a deposit address; `method` disambiguates multi-chain coins
    /// (e.g. `erc20`, `trx`, `sol`)
    ///
    /// GET /wallet/deposit_address/{coin}?method={method}
    pub async fn get_deposit_address(
        &self,
        coin: &str,
        method: Option<&str>,
    ) -> Result<DepositAddress> {
        self.call(
            Request::new(Method::GET, format!("/wallet/deposit_address/{coin}"), true)
                .opt_param("method", method),
        )
        .await
    }

    /// List every deposit address on the account
    ///
    /// POST /wallet/deposit_address/list
    pub async fn get_deposit_address_list(&self) -> Result<Vec<DepositAddress>> {
        self.call(Request::new(
            Method::POST,
            "/wallet/deposit_address/list",
            true,
        ))
        .await
    }

    /// Get deposit history within an optional window (unix seconds)
    ///
    /// GET /wallet/deposits
    pub async fn get_deposit_history(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Deposit>> {
        self.call(
            Request::new(Method::GET, "/wallet/deposits", true)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get withdrawal history within an optional window (unix seconds)
    ///
    /// GET /wallet/withdrawals
    pub async fn get_withdrawal_history(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Withdrawal>> {
        self.call(
            Request::new(Method::GET, "/wallet/withdrawals", true)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Request a withdrawal
    ///
    /// POST /wallet/withdrawals
    pub async fn withdraw(&self, params: WithdrawParams) -> Result<Withdrawal> {
        self.call(Request::new(Method::POST, "/wallet/withdrawals", true).json_body(&params)?)
            .await
    }

    /// Get airdrop history within an optional window (unix seconds)
    ///
    /// GET /wallet/airdrops
    pub async fn get_airdrops(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Airdrop>> {
        self.call(
            Request::new(Method::GET, "/wallet/airdrops", true)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Estimate the fee for a prospective withdrawal
    ///
    /// GET /wallet/withdrawal_fee
    pub async fn get_withdrawal_fees(
        &self,
        coin: &str,
        size: f64,
        address: &str,
        tag: Option<&str>,
        method: Option<&str>,
    ) -> Result<WithdrawalFee> {
        self.call(
            Request::new(Method::GET, "/wallet/withdrawal_fee", true)
                .param("coin", coin)
                .param("size", size)
                .param("address", address)
                .opt_param("tag", tag)
                .opt_param("method", method),
        )
        .await
    }

    /// List saved addresses, optionally filtered by coin
    ///
    /// GET /wallet/saved_addresses
    pub async fn get_saved_addresses(&self, coin: Option<&str>) -> Result<Vec<SavedAddress>> {
        self.call(
            Request::new(Method::GET, "/wallet/saved_addresses", true).opt_param("coin", coin),
        )
        .await
    }

    /// Save a withdrawal address
    ///
    /// POST /wallet/saved_addresses
    pub async fn create_saved_addresses(
        &self,
        params: CreateSavedAddressParams,
    ) -> Result<SavedAddress> {
        self.call(
            Request::new(Method::POST, "/wallet/saved_addresses", true).json_body(&params)?,
        )
        .await
    }

    /// Delete a saved address; the result is a confirmation string
    ///
    /// DELETE /wallet/saved_addresses/{saved_address_id}
    pub async fn delete_saved_addresses(&self, saved_address_id: i64) -> Result<String> {
        self.call(Request::new(
            Method::DELETE,
            format!("/wallet/saved_addresses/{saved_address_id}"),
            true,
        ))
        .await
    }
}
