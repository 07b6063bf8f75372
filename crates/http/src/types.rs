//! Wire types shared with the backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::types::{CartItem, CouponVo, Member, MembershipLevel};

/// The backend's uniform response shape.
///
/// `code` and `msg` are carried through verbatim; interpreting them is the
/// caller's business, not this layer's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Login credentials, sent query-encoded as the backend expects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Must be unique across the store
    pub username: String,
    pub password: String,
    /// Real name
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial user update keyed by username
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartQuantityPatch {
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartListData {
    pub items: Vec<CartItem>,
    pub total: u32,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    /// Postal code
    pub zip_code: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub cart_item_ids: Vec<String>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
}

/// Payment form handed back when a payment is initiated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiation {
    pub payment_form: String,
    pub order_id: String,
    pub total_amount: Decimal,
    pub payment_method: String,
}

/// Asynchronous settlement callback relayed to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    pub order_id: String,
    pub payment_method: String,
    pub payment_time: String,
    pub trade_no: String,
    pub total_amount: Decimal,
}

/// Membership charge, sent query-encoded as the backend expects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    pub username: String,
    pub months: u32,
    pub amount: Decimal,
    pub membership_level: MembershipLevel,
}

/// Assign one coupon template to a batch of members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponAssignRequest {
    pub members: Vec<Member>,
    #[serde(rename = "couponVO")]
    pub coupon_vo: CouponVo,
}

/// Signed stock delta for a product's stockpile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub amount: i64,
}

/// Page cursor for the ranked product listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
}
