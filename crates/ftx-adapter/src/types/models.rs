/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{
    DepositStatus, FutureType, MarketType, OptionType, OrderStatus, OrderType, Side,
    TriggerOrderStatus, TriggerOrderType, WithdrawalStatus,
};

// ── Markets ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub name: String,
    pub base_currency: Option<String>,
    pub quote_currency: Option<String>,
    #[serde(rename = "type")]
    pub market_type: MarketType,
    pub underlying: Option<String>,
    pub enabled: bool,
    pub ask: Option<f64>,
    pub bid: Option<f64>,
    pub last: Option<f64>,
    pub post_only: bool,
    pub price: Option<f64>,
    pub price_increment: f64,
    pub size_increment: f64,
    #[serde(default)]
    pub min_provide_size: Option<f64>,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub high_leverage_fee_exempt: Option<bool>,
    #[serde(default)]
    pub change1h: Option<f64>,
    #[serde(default)]
    pub change24h: Option<f64>,
    #[serde(default)]
    pub change_bod: Option<f64>,
    #[serde(default)]
    pub quote_volume24h: Option<f64>,
    #[serde(default)]
    pub volume_usd24h: Option<f64>,
}

/// One price level: `[price, size]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderbookLevel(pub f64, pub f64);

impl OrderbookLevel {
    pub fn price(&self) -> f64 {
        self.0
    }

    pub fn size(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
    pub asks: Vec<OrderbookLevel>,
    pub bids: Vec<OrderbookLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub liquidation: bool,
    pub price: f64,
    pub side: Side,
    pub size: f64,
    pub time: DateTime<Utc>,
}

/// Candle for market and index price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub start_time: DateTime<Utc>,
    /// Milliseconds since epoch, duplicated by the exchange next to `startTime`
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

// ── Futures ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Future {
    pub name: String,
    pub underlying: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub future_type: FutureType,
    pub expiry: Option<DateTime<Utc>>,
    pub perpetual: bool,
    pub expired: bool,
    pub enabled: bool,
    pub post_only: bool,
    pub price_increment: f64,
    pub size_increment: f64,
    pub last: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub index: Option<f64>,
    pub mark: Option<f64>,
    #[serde(default)]
    pub imf_factor: Option<f64>,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
    #[serde(default)]
    pub underlying_description: Option<String>,
    #[serde(default)]
    pub expiry_description: Option<String>,
    #[serde(default)]
    pub move_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub position_limit_weight: Option<f64>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub change1h: Option<f64>,
    #[serde(default)]
    pub change24h: Option<f64>,
    #[serde(default)]
    pub change_bod: Option<f64>,
    #[serde(default)]
    pub volume_usd24h: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub open_interest_usd: Option<f64>,
}

/// Stats for a single future; funding fields only exist for perpetuals,
/// expiration fields only for dated contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureStats {
    pub volume: f64,
    pub open_interest: f64,
    #[serde(default)]
    pub next_funding_rate: Option<f64>,
    #[serde(default)]
    pub next_funding_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_price: Option<f64>,
    #[serde(default)]
    pub predicted_expiration_price: Option<f64>,
    #[serde(default)]
    pub strike_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRate {
    pub future: String,
    pub rate: f64,
    pub time: DateTime<Utc>,
}

/// Index composition: underlying coin -> weight.
pub type FutureIndexWeights = HashMap<String, f64>;

// ── Account ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub backstop_provider: bool,
    pub collateral: f64,
    pub free_collateral: f64,
    pub initial_margin_requirement: f64,
    pub maintenance_margin_requirement: f64,
    pub leverage: f64,
    pub liquidating: bool,
    pub maker_fee: f64,
    pub taker_fee: f64,
    #[serde(default)]
    pub margin_fraction: Option<f64>,
    #[serde(default)]
    pub open_margin_fraction: Option<f64>,
    #[serde(default)]
    pub position_limit: Option<f64>,
    #[serde(default)]
    pub position_limit_used: Option<f64>,
    #[serde(default)]
    pub spot_lending_enabled: Option<bool>,
    #[serde(default)]
    pub spot_margin_enabled: Option<bool>,
    #[serde(default)]
    pub use_ftt_collateral: Option<bool>,
    pub total_account_value: f64,
    pub total_position_size: f64,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub future: String,
    pub side: Side,
    pub size: f64,
    pub net_size: f64,
    pub open_size: f64,
    pub cost: f64,
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub estimated_liquidation_price: Option<f64>,
    pub initial_margin_requirement: f64,
    pub maintenance_margin_requirement: f64,
    pub long_order_size: f64,
    pub short_order_size: f64,
    pub realized_pnl: f64,
    pub unrealized_pnl: f64,
    pub collateral_used: f64,
    #[serde(default)]
    pub recent_average_open_price: Option<f64>,
    #[serde(default)]
    pub recent_break_even_price: Option<f64>,
    #[serde(default)]
    pub recent_pnl: Option<f64>,
    #[serde(default)]
    pub cumulative_buy_size: Option<f64>,
    #[serde(default)]
    pub cumulative_sell_size: Option<f64>,
}

// ── Wallet ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub collateral: bool,
    #[serde(default)]
    pub collateral_weight: Option<f64>,
    pub usd_fungible: bool,
    pub can_convert: bool,
    pub can_deposit: bool,
    pub can_withdraw: bool,
    pub has_tag: bool,
    pub fiat: bool,
    pub is_token: bool,
    #[serde(default)]
    pub spot_margin: bool,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub bep2_asset: Option<String>,
    #[serde(default)]
    pub credit_to: Option<String>,
    #[serde(default)]
    pub erc20_contract: Option<String>,
    #[serde(default)]
    pub trc20_contract: Option<String>,
    #[serde(default)]
    pub spl_mint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin: String,
    pub free: f64,
    pub total: f64,
    pub spot_borrow: f64,
    pub available_without_borrow: f64,
    pub usd_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub address: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub coin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub coin: String,
    pub size: f64,
    pub status: DepositStatus,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub confirmations: Option<i64>,
    #[serde(default)]
    pub confirmed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub sent_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: i64,
    pub coin: String,
    pub size: f64,
    pub status: WithdrawalStatus,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airdrop {
    pub id: i64,
    pub coin: String,
    pub size: f64,
    pub time: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalFee {
    pub method: String,
    pub fee: f64,
    pub congested: bool,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    pub id: i64,
    pub coin: String,
    pub address: String,
    pub name: String,
    pub fiat: bool,
    pub is_primetrust: bool,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub whitelisted: Option<bool>,
    #[serde(default)]
    pub is_swipe_card: Option<bool>,
}

// ── Orders ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub market: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub size: f64,
    pub filled_size: f64,
    pub remaining_size: f64,
    pub price: Option<f64>,
    pub avg_fill_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub reduce_only: bool,
    pub ioc: bool,
    pub post_only: bool,
    #[serde(default)]
    pub future: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub liquidation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOrder {
    pub id: i64,
    pub market: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub trigger_type: TriggerOrderType,
    pub order_type: OrderType,
    pub status: TriggerOrderStatus,
    pub size: f64,
    pub trigger_price: Option<f64>,
    pub order_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub reduce_only: bool,
    #[serde(default)]
    pub future: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub triggered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub filled_size: Option<f64>,
    #[serde(default)]
    pub avg_fill_price: Option<f64>,
    #[serde(default)]
    pub trail_start: Option<f64>,
    #[serde(default)]
    pub trail_value: Option<f64>,
    #[serde(default)]
    pub retry_until_filled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingPayment {
    pub id: i64,
    pub future: String,
    pub payment: f64,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub rate: Option<f64>,
}

// ── Leveraged tokens ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeveragedToken {
    pub name: String,
    pub description: String,
    pub underlying: String,
    pub leverage: f64,
    pub outstanding: f64,
    pub price_per_share: f64,
    pub position_per_share: f64,
    pub underlying_mark: f64,
    pub total_nav: f64,
    #[serde(default)]
    pub basket: HashMap<String, f64>,
    #[serde(default)]
    pub current_leverage: Option<f64>,
    #[serde(default)]
    pub total_collateral: Option<f64>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub bep2_asset_name: Option<String>,
    #[serde(default)]
    pub change1h: Option<f64>,
    #[serde(default)]
    pub change24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveragedTokenBalance {
    pub token: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeveragedTokenCreationRequest {
    pub id: i64,
    pub token: String,
    pub requested_size: f64,
    pub pending: bool,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub created_size: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeveragedTokenRedemptionRequest {
    pub id: i64,
    pub token: String,
    pub size: f64,
    pub pending: bool,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub proceeds: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// Rebalance schedule keyed by token name; the per-token shape is not
/// documented, so it stays dynamic.
pub type EtfRebalanceInfo = HashMap<String, serde_json::Value>;

// ── Options ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub underlying: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub strike: f64,
    pub expiry: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: i64,
    pub option: OptionContract,
    pub side: Side,
    pub size: f64,
    pub time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub request_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub limit_price: Option<f64>,
    #[serde(default)]
    pub hide_limit_price: Option<bool>,
    /// Only present on your own requests
    #[serde(default)]
    pub quotes: Option<Vec<OptionQuote>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuote {
    pub id: i64,
    pub option: OptionContract,
    pub price: f64,
    pub size: f64,
    pub collateral: f64,
    pub status: String,
    pub time: DateTime<Utc>,
    pub request_id: i64,
    #[serde(default)]
    pub request_side: Option<Side>,
    #[serde(default)]
    pub quoter_side: Option<Side>,
    #[serde(default)]
    pub quote_expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOptionsInfo {
    pub usd_balance: f64,
    pub liquidating: bool,
    #[serde(default)]
    pub liquidation_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsTrade {
    pub id: i64,
    pub option: OptionContract,
    pub price: f64,
    pub size: f64,
    pub time: DateTime<Utc>,
}

/// 24h volume; `underlying_total` is snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsVolume {
    pub contracts: f64,
    pub underlying_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOptionsVolume {
    pub num_contracts: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionOpenInterest {
    pub open_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOpenInterest {
    pub num_contracts: f64,
    pub time: DateTime<Utc>,
}

// ── Spot margin / lending ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicLendingHistory {
    pub coin: String,
    pub time: DateTime<Utc>,
    pub size: f64,
    pub rate: f64,
}

/// Hourly rate estimate; served by both the borrow and lending rate endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRate {
    pub coin: String,
    pub previous: f64,
    pub estimate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowedAmount {
    pub coin: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotMarginMarketInfo {
    pub coin: String,
    pub borrowed: f64,
    pub free: f64,
    pub estimated_rate: f64,
    pub previous_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowHistory {
    pub coin: String,
    pub cost: f64,
    pub rate: f64,
    pub size: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyLendingHistory {
    pub coin: String,
    pub proceeds: f64,
    pub rate: f64,
    pub size: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingOffer {
    pub coin: String,
    pub rate: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingInfo {
    pub coin: String,
    pub lendable: f64,
    pub locked: f64,
    pub offered: f64,
    #[serde(default)]
    pub min_rate: Option<f64>,
}

// ── Sub-accounts ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccount {
    pub nickname: String,
    pub deletable: bool,
    pub editable: bool,
    #[serde(default)]
    pub competition: Option<bool>,
    #[serde(default)]
    pub special: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccountTransfer {
    pub id: i64,
    pub coin: String,
    pub size: f64,
    pub time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}
