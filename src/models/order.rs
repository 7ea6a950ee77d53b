use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, Tone};

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Next step in the fulfilment chain, or `None` for terminal states.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Orders can be cancelled until they leave the warehouse.
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

impl Badge for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            OrderStatus::Pending => Tone::Warning,
            OrderStatus::Processing => Tone::Info,
            OrderStatus::Shipped => Tone::Info,
            OrderStatus::Delivered => Tone::Success,
            OrderStatus::Cancelled => Tone::Danger,
        }
    }
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Refunded,
    ];
}

impl Badge for PaymentStatus {
    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Awaiting Payment",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            PaymentStatus::Paid => Tone::Success,
            PaymentStatus::Pending => Tone::Warning,
            PaymentStatus::Refunded => Tone::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Order — A customer order received by a vendor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub amount: f64,
    pub items: u32,
    pub order_date: NaiveDate,
    pub shipping_address: Option<String>,
}
