/*
[INPUT]:  Coin/market identifiers, lending offer parameters
[OUTPUT]: Spot margin rates, histories and lending offer state
[POS]:    HTTP layer - spot margin and lending endpoints
[UPDATE]: When adding new spot margin endpoints or changing response format
*/

use reqwest::Method;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{
    BorrowedAmount, BorrowHistory, LendingInfo, LendingOffer, MarginRate, MyLendingHistory,
    PublicLendingHistory, SpotMarginMarketInfo, SubmitLendingOfferParams,
};

impl FtxClient {
    /// Get exchange-wide lending history
    ///
    /// GET /spot_margin/history
    pub async fn get_lending_history(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<PublicLendingHistory>> {
        self.call(
            Request::new(Method::GET, "/spot_margin/history", false)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get current borrow rates
    ///
    /// GET /spot_margin/borrow_rates
    pub async fn get_borrow_rates(&self) -> Result<Vec<MarginRate>> {
        self.call(Request::new(Method::GET, "/spot_margin/borrow_rates", true))
            .await
    }

    /// Get current lending rates
    ///
    /// GET /spot_margin/lending_rates
    pub async fn get_lending_rates(&self) -> Result<Vec<MarginRate>> {
        self.call(Request::new(
            Method::GET,
            "/spot_margin/lending_rates",
            false,
        ))
        .await
    }

    /// Get total amounts borrowed across the exchange in the past day
    ///
    /// GET /spot_margin/borrow_summary
    pub async fn get_daily_borrowed_amounts(&self) -> Result<Vec<BorrowedAmount>> {
        self.call(Request::new(
            Method::GET,
            "/spot_margin/borrow_summary",
            false,
        ))
        .await
    }

    /// Get borrow/lend state for the coins in one spot market
    ///
    /// GET /spot_margin/market_info?market={market}
    pub async fn get_spot_margin_market_info(
        &self,
        market: &str,
    ) -> Result<Vec<SpotMarginMarketInfo>> {
        self.call(
            Request::new(Method::GET, "/spot_margin/market_info", true)
                .param("market", market),
        )
        .await
    }

    /// Get your borrow history
    ///
    /// GET /spot_margin/borrow_history
    pub async fn get_my_borrow_history(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<BorrowHistory>> {
        self.call(
            Request::new(Method::GET, "/spot_margin/borrow_history", true)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get your lending history
    ///
    /// GET /spot_margin/lending_history
    pub async fn get_my_lending_history(
        &self,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<MyLendingHistory>> {
        self.call(
            Request::new(Method::GET, "/spot_margin/lending_history", true)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get your outstanding lending offers
    ///
    /// GET /spot_margin/offers
    pub async fn get_lending_offers(&self) -> Result<Vec<LendingOffer>> {
        self.call(Request::new(Method::GET, "/spot_margin/offers", true))
            .await
    }

    /// Get lending info (lendable/locked/offered) per coin
    ///
    /// GET /spot_margin/lending_info
    pub async fn get_lending_info(&self) -> Result<Vec<LendingInfo>> {
        self.call(Request::new(Method::GET, "/spot_margin/lending_info", true))
            .await
    }

    /// Submit a lending offer, replacing any existing offer for the coin.
    /// Size 0 withdraws the offer.
    ///
    /// POST /spot_margin/offers
    pub async fn submit_lending_offer(&self, params: SubmitLendingOfferParams) -> Result<()> {
        self.call_ok(Request::new(Method::POST, "/spot_margin/offers", true).json_body(&params)?)
            .await
    }
}
