//! Frontend View Models
//!
//! Records backing the read-only pages. These are mock-backed; nothing
//! here is persisted or synchronized.

use chrono::NaiveDate;

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-badge pending",
            OrderStatus::InProgress => "status-badge in-progress",
            OrderStatus::Delivered => "status-badge delivered",
            OrderStatus::Cancelled => "status-badge cancelled",
        }
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub studio: &'static str,
    pub service: &'static str,
    pub weight_kg: Option<f64>,
    pub item_count: Option<u32>,
    pub amount: f64,
    pub status: OrderStatus,
    pub placed_on: NaiveDate,
}

/// Payment settlement states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "status-badge delivered",
            PaymentStatus::Pending => "status-badge pending",
            PaymentStatus::Refunded => "status-badge cancelled",
        }
    }
}

/// A payment against an order
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: &'static str,
    pub order_id: &'static str,
    pub studio: &'static str,
    pub amount: f64,
    pub method: &'static str,
    pub status: PaymentStatus,
    pub paid_on: NaiveDate,
}

/// Customer feedback on a completed order
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: &'static str,
    pub customer: &'static str,
    pub studio: &'static str,
    pub stars: u8,
    pub comment: &'static str,
    pub posted_on: NaiveDate,
}

/// A registered customer
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub orders: u32,
    pub joined_on: NaiveDate,
}
