/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{OptionType, OrderType, Side, TriggerOrderType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderParams {
    pub market: String,
    pub side: Side,
    /// Limit price; `None` for market orders
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size: f64,
    /// Never increases the position or opens one in the opposite direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    /// Guaranteed taker; cancelled instead of resting on the book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ioc: Option<bool>,
    /// Guaranteed maker; cancelled instead of crossing the book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_on_price_band: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_after_ts: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceTriggerOrderParams {
    pub market: String,
    pub side: Side,
    pub size: f64,
    #[serde(rename = "type")]
    pub trigger_type: TriggerOrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<f64>,
    /// Order to place once triggered; market order when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_until_filled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTriggerOrderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllOrdersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_orders_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_orders_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawParams {
    pub coin: String,
    pub size: f64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Withdrawal password, if one is configured on the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 2FA code, if required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedAddressParams {
    pub coin: String,
    pub address: String,
    pub address_name: String,
    pub is_primetrust: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferBetweenSubAccountsParams {
    pub coin: String,
    pub size: f64,
    /// `"main"` for the main account
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequestParams {
    pub underlying: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub strike: f64,
    /// Unix timestamp in seconds
    pub expiry: i64,
    pub side: Side,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_limit_price: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_expiry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitLendingOfferParams {
    pub coin: String,
    pub size: f64,
    pub rate: f64,
}
