/*
[INPUT]:  Quote request parameters and quote identifiers
[OUTPUT]: Options RFQ flow results and options market stats
[POS]:    HTTP layer - options endpoints
[UPDATE]: When adding new options endpoints or changing response format
*/

use reqwest::Method;
use serde_json::json;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{
    AccountOptionsInfo, CreateQuoteRequestParams, HistoricalOpenInterest,
    HistoricalOptionsVolume, OptionOpenInterest, OptionQuote, OptionsTrade, OptionsVolume,
    QuoteRequest,
};

impl FtxClient {
    /// List all open quote requests
    ///
    /// GET /options/requests
    pub async fn list_quote_requests(&self) -> Result<Vec<QuoteRequest>> {
        self.call(Request::new(Method::GET, "/options/requests", false))
            .await
    }

    /// List your own quote requests (includes received quotes)
    ///
    /// GET /options/my_requests
    pub async fn get_my_quote_requests(&self) -> Result<Vec<QuoteRequest>> {
        self.call(Request::new(Method::GET, "/options/my_requests", true))
            .await
    }

    /// Create a quote request
    ///
    /// POST /options/requests
    pub async fn create_quote_request(
        &self,
        params: CreateQuoteRequestParams,
    ) -> Result<QuoteRequest> {
        self.call(Request::new(Method::POST, "/options/requests", true).json_body(&params)?)
            .await
    }

    /// Cancel a quote request
    ///
    /// DELETE /options/requests/{request_id}
    pub async fn cancel_quote_request(&self, request_id: i64) -> Result<QuoteRequest> {
        self.call(Request::new(
            Method::DELETE,
            format!("/options/requests/{request_id}"),
            true,
        ))
        .await
    }

    /// Get quotes received for your quote request
    ///
    /// GET /options/requests/{request_id}/quotes
    pub async fn get_quotes_for_quote_request(
        &self,
        request_id: i64,
    ) -> Result<Vec<OptionQuote>> {
        self.call(Request::new(
            Method::GET,
            format!("/options/requests/{request_id}/quotes"),
            true,
        ))
        .await
    }

    /// Quote someone else's request
    ///
    /// POST /options/requests/{request_id}/quotes
    pub async fn create_quote(&self, request_id: i64, price: f64) -> Result<OptionQuote> {
        self.call(
            Request::new(
                Method::POST,
                format!("/options/requests/{request_id}/quotes"),
                true,
            )
            .json_body(&json!({ "price": price }))?,
        )
        .await
    }

    /// List quotes you have created
    ///
    /// GET /options/my_quotes
    pub async fn get_my_quotes(&self) -> Result<Vec<OptionQuote>> {
        self.call(Request::new(Method::GET, "/options/my_quotes", true))
            .await
    }

    /// Cancel one of your quotes
    ///
    /// DELETE /options/quotes/{quote_id}
    pub async fn cancel_quote(&self, quote_id: i64) -> Result<OptionQuote> {
        self.call(Request::new(
            Method::DELETE,
            format!("/options/quotes/{quote_id}"),
            true,
        ))
        .await
    }

    /// Accept a quote for your request, executing the trade
    ///
    /// POST /options/quotes/{quote_id}/accept
    pub async fn accept_options_quote(&self, quote_id: i64) -> Result<OptionQuote> {
        self.call(Request::new(
            Method::POST,
            format!("/options/quotes/{quote_id}/accept"),
            true,
        ))
        .await
    }

    /// Get options account info (USD balance, liquidation state)
    ///
    /// GET /options/account_info
    pub async fn get_account_options_info(&self) -> Result<AccountOptionsInfo> {
        self.call(Request::new(Method::GET, "/options/account_info", true))
            .await
    }

    /// Get recent public options trades
    ///
    /// GET /options/trades
    pub async fn get_public_options_trades(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<OptionsTrade>> {
        self.call(
            Request::new(Method::GET, "/options/trades", false)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get 24h options volume
    ///
    /// GET /stats/24h_options_volume
    pub async fn get_24h_option_volume(&self) -> Result<OptionsVolume> {
        self.call(Request::new(Method::GET, "/stats/24h_options_volume", false))
            .await
    }

    /// Get historical daily options volumes
    ///
    /// GET /options/historical_volumes/BTC
    pub async fn get_historical_24h_option_volume(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<HistoricalOptionsVolume>> {
        self.call(
            Request::new(Method::GET, "/options/historical_volumes/BTC", false)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get current options open interest
    ///
    /// GET /options/open_interest/BTC
    pub async fn get_option_open_interest(&self) -> Result<OptionOpenInterest> {
        self.call(Request::new(Method::GET, "/options/open_interest/BTC", false))
            .await
    }

    /// Get historical options open interest
    ///
    /// GET /options/historical_open_interest/BTC
    pub async fn get_historical_open_interest(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<HistoricalOpenInterest>> {
        self.call(
            Request::new(Method::GET, "/options/historical_open_interest/BTC", false)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }
}
