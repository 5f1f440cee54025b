/*
[INPUT]:  Market names and history windows
[OUTPUT]: Market data (markets, orderbooks, trades, candles)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new market endpoints or changing response format
*/

use reqwest::Method;

use crate::http::request::Request;
use crate::http::{FtxClient, Result};
use crate::types::{Candle, Market, Orderbook, Trade};

impl FtxClient {
    /// List all markets
    ///
    /// GET /markets
    pub async fn get_markets(&self) -> Result<Vec<Market>> {
        self.call(Request::new(Method::GET, "/markets", false)).await
    }

    /// Get a single market by name (e.g. `BTC/USD`, `BTC-PERP`)
    ///
    /// GET /markets/{market_name}
    pub async fn get_market(&self, market_name: &str) -> Result<Market> {
        self.call(Request::new(
            Method::GET,
            format!("/markets/{market_name}"),
            false,
        ))
        .await
    }

    /// Get the orderbook for a market, up to `depth` levels per side (max 100)
    ///
    /// GET /markets/{market_name}/orderbook?depth={depth}
    pub async fn get_orderbook(
        &self,
        market_name: &str,
        depth: Option<u32>,
    ) -> Result<Orderbook> {
        self.call(
            Request::new(
                Method::GET,
                format!("/markets/{market_name}/orderbook"),
                false,
            )
            .opt_param("depth", depth),
        )
        .await
    }

    /// Get recent trades for a market within an optional window (unix seconds)
    ///
    /// GET /markets/{market_name}/trades?start_time={start_time}&end_time={end_time}
    pub async fn get_trades(
        &self,
        market_name: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Trade>> {
        self.call(
            Request::new(Method::GET, format!("/markets/{market_name}/trades"), false)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }

    /// Get historical prices; `resolution` is the candle length in seconds
    /// (15, 60, 300, 900, 3600, 14400, 86400)
    ///
    /// GET /markets/{market_name}/candles?resolution={resolution}
    pub async fn get_historical_prices(
        &self,
        market_name: &str,
        resolution: u32,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Candle>> {
        self.call(
            Request::new(
                Method::GET,
                format!("/markets/{market_name}/candles"),
                false,
            )
            .param("resolution", resolution)
            .opt_param("start_time", start_time)
            .opt_param("end_time", end_time),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, FtxClient, FtxError};
    use crate::types::{MarketType, OrderbookLevel, Side};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FtxClient {
        FtxClient::new(ClientConfig {
            endpoint: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_markets() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": true,
            "result": [
                {
                    "name": "BTC/USD",
                    "baseCurrency": "BTC",
                    "quoteCurrency": "USD",
                    "type": "spot",
                    "underlying": null,
                    "enabled": true,
                    "ask": 10005.0,
                    "bid": 10004.5,
                    "last": 10005.25,
                    "postOnly": false,
                    "price": 10005.0,
                    "priceIncrement": 0.25,
                    "sizeIncrement": 0.0001,
                    "minProvideSize": 0.001,
                    "restricted": false,
                    "highLeverageFeeExempt": true,
                    "change1h": 0.012,
                    "change24h": 0.0446,
                    "changeBod": 0.0442,
                    "quoteVolume24h": 28914.76,
                    "volumeUsd24h": 28914.76
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/markets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let markets = client_for(&server)
            .get_markets()
            .await
            .expect("get_markets failed");

        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].name, "BTC/USD");
        assert_eq!(markets[0].market_type, MarketType::Spot);
        assert_eq!(markets[0].price_increment, 0.25);
        assert_eq!(markets[0].underlying, None);
    }

    #[tokio::test]
    async fn test_get_orderbook() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": true,
            "result": {
                "asks": [[4114.25, 6.263], [4115.0, 1.0]],
                "bids": [[4112.25, 49.29]]
            }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/markets/BTC-PERP/orderbook"))
            .and(query_param("depth", "20"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let orderbook = client_for(&server)
            .get_orderbook("BTC-PERP", Some(20))
            .await
            .expect("get_orderbook failed");

        assert_eq!(orderbook.asks.len(), 2);
        assert_eq!(orderbook.asks[0], OrderbookLevel(4114.25, 6.263));
        assert_eq!(orderbook.bids[0].price(), 4112.25);
        assert_eq!(orderbook.bids[0].size(), 49.29);
    }

    #[tokio::test]
    async fn test_get_trades_decodes_sides() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": true,
            "result": [
                {
                    "id": 3855995,
                    "liquidation": false,
                    "price": 3857.75,
                    "side": "buy",
                    "size": 0.111,
                    "time": "2019-03-20T18:16:23.397991+00:00"
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/markets/BTC-PERP/trades"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let trades = client_for(&server)
            .get_trades("BTC-PERP", None, None)
            .await
            .expect("get_trades failed");

        assert_eq!(trades[0].id, 3_855_995);
        assert_eq!(trades[0].side, Side::Buy);
    }

    #[tokio::test]
    async fn test_envelope_failure_at_http_200() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/markets/NOSUCH/orderbook"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        r#"{"success": false, "error": "No such market: NOSUCH"}"#,
                        "application/json",
                    ),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).get_orderbook("NOSUCH", None).await;
        match result {
            Err(FtxError::Rejected(message)) => assert_eq!(message, "No such market: NOSUCH"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
