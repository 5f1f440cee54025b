/*
[INPUT]:  Order parameters and identifiers with signed headers
[OUTPUT]: Order placement/modification/cancellation results and history
[POS]:    HTTP layer - order endpoints (require auth)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::request::Request;
use crate::http::{FtxClient, FtxError, Result};
use crate::types::responses::PagedEnvelope;
use crate::types::{
    CancelAllOrdersParams, FundingPayment, ModifyOrderParams, ModifyTriggerOrderParams, Order,
    OrderHistoryPage, PlaceOrderParams, PlaceTriggerOrderParams, TriggerOrder,
    TriggerOrderHistoryPage, TriggerOrderType,
};

impl FtxClient {
    /// Get open orders, optionally filtered by market
    ///
    /// GET /orders?market={market}
    pub async fn get_open_orders(&self, market: Option<&str>) -> Result<Vec<Order>> {
        self.call(Request::new(Method::GET, "/orders", true).opt_param("market", market))
            .await
    }

    /// Get order history. The envelope carries a `hasMoreData` flag next
    /// to `result`, so this wrapper decodes the page itself instead of
    /// going through the uniform envelope path.
    ///
    /// GET /orders/history?market={market}
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<OrderHistoryPage> {
        let body = self
            .call_api(
                Request::new(Method::GET, "/orders/history", true)
                    .opt_param("market", market)
                    .opt_param("start_time", start_time)
                    .opt_param("end_time", end_time),
            )
            .await?;
        let envelope: PagedEnvelope<Order> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(FtxError::Rejected(envelope.error.unwrap_or_default()));
        }
        Ok(OrderHistoryPage {
            orders: envelope.result.unwrap_or_default(),
            has_more_data: envelope.has_more_data,
        })
    }

    /// Get open trigger orders, optionally filtered by market and type
    ///
    /// GET /conditional_orders?market={market}&type={type}
    pub async fn get_open_trigger_orders(
        &self,
        market: Option<&str>,
        trigger_type: Option<TriggerOrderType>,
    ) -> Result<Vec<TriggerOrder>> {
        self.call(
            Request::new(Method::GET, "/conditional_orders", true)
                .opt_param("market", market)
                .opt_param("type", trigger_type.map(|t| t.as_str())),
        )
        .await
    }

    /// Get trigger order history (paginated like order history)
    ///
    /// GET /conditional_orders/history?market={market}
    pub async fn get_trigger_order_history(
        &self,
        market: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<TriggerOrderHistoryPage> {
        let body = self
            .call_api(
                Request::new(Method::GET, "/conditional_orders/history", true)
                    .opt_param("market", market)
                    .opt_param("start_time", start_time)
                    .opt_param("end_time", end_time),
            )
            .await?;
        let envelope: PagedEnvelope<TriggerOrder> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(FtxError::Rejected(envelope.error.unwrap_or_default()));
        }
        Ok(TriggerOrderHistoryPage {
            orders: envelope.result.unwrap_or_default(),
            has_more_data: envelope.has_more_data,
        })
    }

    /// Place an order
    ///
    /// POST /orders
    pub async fn place_order(&self, params: PlaceOrderParams) -> Result<Order> {
        self.call(Request::new(Method::POST, "/orders", true).json_body(&params)?)
            .await
    }

    /// Place a trigger (conditional) order
    ///
    /// POST /conditional_orders
    pub async fn place_trigger_order(
        &self,
        params: PlaceTriggerOrderParams,
    ) -> Result<TriggerOrder> {
        self.call(Request::new(Method::POST, "/conditional_orders", true).json_body(&params)?)
            .await
    }

    /// Modify an order. The exchange cancels and re-places it, so the
    /// returned order has a fresh id and queue position is lost.
    ///
    /// POST /orders/{order_id}/modify
    pub async fn modify_order(&self, order_id: i64, params: ModifyOrderParams) -> Result<Order> {
        self.call(
            Request::new(Method::POST, format!("/orders/{order_id}/modify"), true)
                .json_body(&params)?,
        )
        .await
    }

    /// Modify an order addressed by client id
    ///
    /// POST /orders/by_client_id/{client_order_id}/modify
    pub async fn modify_order_by_client_id(
        &self,
        client_order_id: &str,
        params: ModifyOrderParams,
    ) -> Result<Order> {
        self.call(
            Request::new(
                Method::POST,
                format!("/orders/by_client_id/{client_order_id}/modify"),
                true,
            )
            .json_body(&params)?,
        )
        .await
    }

    /// Modify a trigger order
    ///
    /// POST /conditional_orders/{order_id}/modify
    pub async fn modify_trigger_order(
        &self,
        order_id: i64,
        params: ModifyTriggerOrderParams,
    ) -> Result<TriggerOrder> {
        self.call(
            Request::new(
                Method::POST,
                format!("/conditional_orders/{order_id}/modify"),
                true,
            )
            .json_body(&params)?,
        )
        .await
    }

    /// Get the current status of an order
    ///
    /// GET /orders/{order_id}
    pub async fn get_order_status(&self, order_id: i64) -> Result<Order> {
        self.call(Request::new(Method::GET, format!("/orders/{order_id}"), true))
            .await
    }

    /// Get the current status of an order addressed by client id
    ///
    /// GET /orders/by_client_id/{client_order_id}
    pub async fn get_order_status_by_client_id(&self, client_order_id: &str) -> Result<Order> {
        self.call(Request::new(
            Method::GET,
            format!("/orders/by_client_id/{client_order_id}"),
            true,
        ))
        .await
    }

    /// Cancel an order; the result is a confirmation string. A cancel
    /// that raced a fill surfaces as [`FtxError::OrderAlreadyClosed`].
    ///
    /// DELETE /orders/{order_id}
    pub async fn cancel_order(&self, order_id: i64) -> Result<String> {
        self.call(Request::new(
            Method::DELETE,
            format!("/orders/{order_id}"),
            true,
        ))
        .await
    }

    /// Cancel an order addressed by client id
    ///
    /// DELETE /orders/by_client_id/{client_order_id}
    pub async fn cancel_order_by_client_id(&self, client_order_id: &str) -> Result<String> {
        self.call(Request::new(
            Method::DELETE,
            format!("/orders/by_client_id/{client_order_id}"),
            true,
        ))
        .await
    }

    /// Cancel a trigger order
    ///
    /// DELETE /conditional_orders/{order_id}
    pub async fn cancel_trigger_order(&self, order_id: i64) -> Result<String> {
        self.call(Request::new(
            Method::DELETE,
            format!("/conditional_orders/{order_id}"),
            true,
        ))
        .await
    }

    /// Cancel all orders, optionally restricted by the params
    ///
    /// DELETE /orders
    pub async fn cancel_all_orders(&self, params: CancelAllOrdersParams) -> Result<String> {
        self.call(Request::new(Method::DELETE, "/orders", true).json_body(&params)?)
            .await
    }

    /// Get funding payments, optionally filtered by future and window
    ///
    /// GET /funding_payments
    pub async fn get_funding_payments(
        &self,
        future: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<FundingPayment>> {
        self.call(
            Request::new(Method::GET, "/funding_payments", true)
                .opt_param("future", future)
                .opt_param("start_time", start_time)
                .opt_param("end_time", end_time),
        )
        .await
    }
}
