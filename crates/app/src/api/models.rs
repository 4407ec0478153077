//! Wire types

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// `POST /auth/send-reset-otp` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    /// One-time password
    pub otp: String,
}

/// Acknowledgement returned by the auth endpoints. Every field is optional;
/// bodies that are not JSON decode to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Success flag, when the backend sends one
    #[serde(default)]
    pub success: Option<bool>,

    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /user/profile` response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileEnvelope {
    /// Payload
    pub data: ProfileRecord,
}

/// Profile payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileRecord {
    /// Account
    pub user: UserRecord,

    /// Order history
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

/// Account details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// One past order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Purchased items
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,

    /// Order total in rupees
    pub total_amount: f64,

    /// Placement instant
    pub placed_at: Timestamp,
}

/// One purchased item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItemRecord {
    /// Product name
    pub name: String,

    /// Unit price in rupees
    pub price: f64,

    /// Units bought
    pub quantity: u32,

    /// Image path
    #[serde(default)]
    pub image: String,

    /// Chosen color
    #[serde(default)]
    pub color: Option<String>,
}
