//! Status enums for orders and logged-in users.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The backend sends the status as an upper-case string. Values outside the
/// known lifecycle are kept verbatim in [`OrderStatus::Other`] so a newer
/// backend never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    /// A status string this client does not know about.
    Other(String),
}

impl OrderStatus {
    /// Every known status, in lifecycle order.
    pub const KNOWN: [Self; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Parse a wire value. Total: unknown strings become [`OrderStatus::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "SHIPPED" => Self::Shipped,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Other(other) => other,
        }
    }

    /// Badge tone used when rendering this status.
    #[must_use]
    pub fn badge(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Confirmed => BadgeTone::Info,
            Self::Shipped => BadgeTone::Primary,
            Self::Delivered => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Danger,
            Self::Other(_) => BadgeTone::Secondary,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour/severity tag attached to a rendered badge or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeTone {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl BadgeTone {
    /// CSS modifier (`bg-{tone}`, `alert-{tone}`).
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for BadgeTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Badge tone for a raw status string.
///
/// Never fails: anything outside the known lifecycle maps to
/// [`BadgeTone::Secondary`].
#[must_use]
pub fn badge_for(status: &str) -> BadgeTone {
    OrderStatus::parse(status).badge()
}

/// Kind of account a login targets.
///
/// The backend upper-cases the value itself, so both spellings decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    #[serde(alias = "admin")]
    Admin,
    #[default]
    #[serde(alias = "customer")]
    Customer,
}

impl UserType {
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("ADMIN"),
            Self::Customer => f.write_str("CUSTOMER"),
        }
    }
}
