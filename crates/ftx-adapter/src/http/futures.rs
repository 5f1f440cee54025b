/*
[INPUT]:  Future/index names and history windows
[OUTPUT]: Futures data (contracts, stats, funding rates, index weights)
[POS]:    HTTP layer - public futures endpoints (no auth required)
[UPDATE]: When adding new futures endpoints or changing response format
*/

use reqwest::Method;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{Candle, FundingRate, Future, FutureIndexWeights, FutureStats};

impl FtxClient {
    /// List all futures
    ///
    /// GET /futures
    pub async fn list_futures(&self) -> Result<Vec<Future>> {
        self.call(Request::new(Method::GET, "/futures", false)).await
    }

    /// Get a single future by name (e.g. `BTC-PERP`, `BTC-0626`)
    ///
    /// GET /futures/{future_name}
    pub async fn get_future(&self, future_name: &str) -> Result<Future> {
        self.call(Request::new(
            Method::GET,
            format!("/futures/{future_name}"),
            false,
        ))
        .await
    }

    /// Get stats (volume, open interest, next funding) for a future
    ///
    /// GET /futures/{future_name}/stats
    pub async fn get_future_stats(&self, future_name: &str) -> Result<FutureStats> {
        self.call(Request::new(
            Method::GET,
            format!("/futures/{future_name}/stats"),
            false,
        ))
        .await
    }

    /// Get historical funding rates, optionally filtered to one future
    ///
    /// GET /funding_rates?future={future}&start_time={start_time}&end_time={end_time}
    pub async fn get_funding_rates(
        &self,
        future: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<FundingRate>> {
        self.call(
            Request::new(Method::GET, "/funding_rates", false)
                .opt_param("future", future)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get index composition weights
    ///
    /// GET /indexes/{index_name}/weights
    pub async fn get_index_weights(&self, index_name: &str) -> Result<FutureIndexWeights> {
        self.call(Request::new(
            Method::GET,
            format!("/indexes/{index_name}/weights"),
            false,
        ))
        .await
    }

    /// List expired futures
    ///
    /// GET /expired_futures
    pub async fn get_expired_futures(&self) -> Result<Vec<Future>> {
        self.call(Request::new(Method::GET, "/expired_futures", false))
            .await
    }

    /// Get historical index candles; `resolution` is the candle length in seconds
    ///
    /// GET /indexes/{index_name}/candles?resolution={resolution}
    pub async fn get_historical_index(
        &self,
        index_name: &str,
        resolution: u32,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Candle>> {
        self.call(
            Request::new(
                Method::GET,
                format!("/indexes/{index_name}/candles"),
                false,
            )
            .param("resolution", resolution)
            .opt_param("start_time", start_time)
            .opt_param("end_time", end_time),
        )
        .await
    }
}
