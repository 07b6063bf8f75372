use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Absent until the backend assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub description: String,
    pub cover: String,
    pub detail: String,
    #[serde(default)]
    pub specifications: Vec<Specification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item: String,
    pub value: String,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub amount: i64,
    pub frozen: i64,
    pub product_id: String,
}

/// Delivery address; every field optional so partial records round-trip
/// unchanged through create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub img_url: String,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i64,
    pub username: String,
    pub discount_amount: Decimal,
    pub min_cost: Decimal,
    pub start_date: String,
    pub valid_time: i64,
    pub end_date: String,
    pub used: bool,
}

/// Coupon template without an owner, used when assigning a batch to members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponVo {
    pub discount_amount: Decimal,
    pub min_cost: Decimal,
    pub valid_time: i64,
    pub used: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MembershipLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MembershipLevel {
    /// Fixed monthly price of each tier
    pub fn monthly_price(self) -> Decimal {
        match self {
            Self::Bronze => Decimal::from(10),
            Self::Silver => Decimal::from(20),
            Self::Gold => Decimal::from(30),
            Self::Platinum => Decimal::from(40),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub membership_level: MembershipLevel,
    /// ISO-8601 date-time string, carried opaquely
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: String,
    pub product_id: String,
    pub title: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: String,
    pub username: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub username: String,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub create_time: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_level_prices_are_tiered() {
        assert_eq!(MembershipLevel::Bronze.monthly_price(), Decimal::from(10));
        assert_eq!(MembershipLevel::Platinum.monthly_price(), Decimal::from(40));
    }

    #[test]
    fn membership_level_uses_uppercase_wire_names() {
        let level: MembershipLevel = serde_json::from_str("\"GOLD\"").unwrap();
        assert_eq!(level, MembershipLevel::Gold);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"GOLD\"");
    }

    #[test]
    fn address_omits_absent_fields() {
        let address = Address {
            username: Some("alice".into()),
            ..Address::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice"}));
    }

    #[test]
    fn product_decodes_numeric_price() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "title": "Keyboard",
            "price": 100,
            "description": "Mechanical",
            "cover": "https://img.example.com/p-1.png",
            "detail": "87 keys"
        }))
        .unwrap();
        assert_eq!(product.price, Decimal::from(100));
        assert!(product.specifications.is_empty());
    }
}
