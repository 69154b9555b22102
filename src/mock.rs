//! Mock Datasets
//!
//! Hard-coded data for the read-only pages. Amounts are in rupees.

use chrono::NaiveDate;

use crate::models::{Feedback, Order, OrderStatus, Payment, PaymentStatus, UserRow};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-1041",
            customer: "Rohit Verma",
            studio: "Sparkle Laundry Hub",
            service: "Wash & Fold",
            weight_kg: Some(4.5),
            item_count: None,
            amount: 315.0,
            status: OrderStatus::Delivered,
            placed_on: date(2025, 6, 18),
        },
        Order {
            id: "ORD-1042",
            customer: "Ananya Iyer",
            studio: "FreshPress Studio",
            service: "Dry Cleaning",
            weight_kg: None,
            item_count: Some(3),
            amount: 540.0,
            status: OrderStatus::Delivered,
            placed_on: date(2025, 6, 21),
        },
        Order {
            id: "ORD-1043",
            customer: "Kabir Singh",
            studio: "Sparkle Laundry Hub",
            service: "Steam Ironing",
            weight_kg: None,
            item_count: Some(12),
            amount: 240.0,
            status: OrderStatus::Cancelled,
            placed_on: date(2025, 6, 25),
        },
        Order {
            id: "ORD-1044",
            customer: "Divya Pillai",
            studio: "FreshPress Studio",
            service: "Wash & Iron",
            weight_kg: Some(6.0),
            item_count: None,
            amount: 480.0,
            status: OrderStatus::Delivered,
            placed_on: date(2025, 7, 2),
        },
        Order {
            id: "ORD-1045",
            customer: "Rohit Verma",
            studio: "Sparkle Laundry Hub",
            service: "Wash & Fold",
            weight_kg: Some(5.2),
            item_count: None,
            amount: 364.0,
            status: OrderStatus::Delivered,
            placed_on: date(2025, 7, 9),
        },
        Order {
            id: "ORD-1046",
            customer: "Sneha Kulkarni",
            studio: "FreshPress Studio",
            service: "Dry Cleaning",
            weight_kg: None,
            item_count: Some(2),
            amount: 420.0,
            status: OrderStatus::InProgress,
            placed_on: date(2025, 7, 15),
        },
        Order {
            id: "ORD-1047",
            customer: "Imran Qureshi",
            studio: "Sparkle Laundry Hub",
            service: "Wash & Iron",
            weight_kg: Some(3.8),
            item_count: None,
            amount: 304.0,
            status: OrderStatus::Delivered,
            placed_on: date(2025, 7, 22),
        },
        Order {
            id: "ORD-1048",
            customer: "Ananya Iyer",
            studio: "FreshPress Studio",
            service: "Steam Ironing",
            weight_kg: None,
            item_count: Some(8),
            amount: 160.0,
            status: OrderStatus::Pending,
            placed_on: date(2025, 7, 28),
        },
        Order {
            id: "ORD-1049",
            customer: "Divya Pillai",
            studio: "Sparkle Laundry Hub",
            service: "Wash & Fold",
            weight_kg: Some(7.1),
            item_count: None,
            amount: 497.0,
            status: OrderStatus::InProgress,
            placed_on: date(2025, 8, 3),
        },
        Order {
            id: "ORD-1050",
            customer: "Kabir Singh",
            studio: "FreshPress Studio",
            service: "Dry Cleaning",
            weight_kg: None,
            item_count: Some(5),
            amount: 890.0,
            status: OrderStatus::Pending,
            placed_on: date(2025, 8, 5),
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PAY-2041",
            order_id: "ORD-1041",
            studio: "Sparkle Laundry Hub",
            amount: 315.0,
            method: "UPI",
            status: PaymentStatus::Paid,
            paid_on: date(2025, 6, 18),
        },
        Payment {
            id: "PAY-2042",
            order_id: "ORD-1042",
            studio: "FreshPress Studio",
            amount: 540.0,
            method: "Card",
            status: PaymentStatus::Paid,
            paid_on: date(2025, 6, 21),
        },
        Payment {
            id: "PAY-2043",
            order_id: "ORD-1043",
            studio: "Sparkle Laundry Hub",
            amount: 240.0,
            method: "UPI",
            status: PaymentStatus::Refunded,
            paid_on: date(2025, 6, 26),
        },
        Payment {
            id: "PAY-2044",
            order_id: "ORD-1044",
            studio: "FreshPress Studio",
            amount: 480.0,
            method: "Cash",
            status: PaymentStatus::Paid,
            paid_on: date(2025, 7, 2),
        },
        Payment {
            id: "PAY-2045",
            order_id: "ORD-1045",
            studio: "Sparkle Laundry Hub",
            amount: 364.0,
            method: "UPI",
            status: PaymentStatus::Paid,
            paid_on: date(2025, 7, 9),
        },
        Payment {
            id: "PAY-2046",
            order_id: "ORD-1046",
            studio: "FreshPress Studio",
            amount: 420.0,
            method: "Card",
            status: PaymentStatus::Pending,
            paid_on: date(2025, 7, 15),
        },
        Payment {
            id: "PAY-2047",
            order_id: "ORD-1047",
            studio: "Sparkle Laundry Hub",
            amount: 304.0,
            method: "UPI",
            status: PaymentStatus::Paid,
            paid_on: date(2025, 7, 22),
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "FB-301",
            customer: "Rohit Verma",
            studio: "Sparkle Laundry Hub",
            stars: 5,
            comment: "Clothes came back spotless and neatly folded. Two days early!",
            posted_on: date(2025, 6, 20),
        },
        Feedback {
            id: "FB-302",
            customer: "Ananya Iyer",
            studio: "FreshPress Studio",
            stars: 4,
            comment: "Great dry cleaning, though pickup was an hour late.",
            posted_on: date(2025, 6, 23),
        },
        Feedback {
            id: "FB-303",
            customer: "Divya Pillai",
            studio: "FreshPress Studio",
            stars: 5,
            comment: "Best ironing in the neighbourhood, crisp collars every time.",
            posted_on: date(2025, 7, 4),
        },
        Feedback {
            id: "FB-304",
            customer: "Imran Qureshi",
            studio: "Sparkle Laundry Hub",
            stars: 3,
            comment: "Wash was fine but a button went missing from one shirt.",
            posted_on: date(2025, 7, 24),
        },
        Feedback {
            id: "FB-305",
            customer: "Sneha Kulkarni",
            studio: "FreshPress Studio",
            stars: 4,
            comment: "Responsive support and fair pricing for express service.",
            posted_on: date(2025, 7, 30),
        },
    ]
}

pub fn users() -> Vec<UserRow> {
    vec![
        UserRow {
            id: "USR-501",
            name: "Rohit Verma",
            phone: "+91 98111 22334",
            email: "rohit.verma@example.com",
            orders: 14,
            joined_on: date(2024, 11, 12),
        },
        UserRow {
            id: "USR-502",
            name: "Ananya Iyer",
            phone: "+91 99887 66554",
            email: "ananya.iyer@example.com",
            orders: 9,
            joined_on: date(2025, 1, 8),
        },
        UserRow {
            id: "USR-503",
            name: "Kabir Singh",
            phone: "+91 90909 80807",
            email: "kabir.singh@example.com",
            orders: 4,
            joined_on: date(2025, 2, 27),
        },
        UserRow {
            id: "USR-504",
            name: "Divya Pillai",
            phone: "+91 93456 12378",
            email: "divya.pillai@example.com",
            orders: 11,
            joined_on: date(2025, 3, 15),
        },
        UserRow {
            id: "USR-505",
            name: "Sneha Kulkarni",
            phone: "+91 91234 99887",
            email: "sneha.k@example.com",
            orders: 6,
            joined_on: date(2025, 5, 2),
        },
        UserRow {
            id: "USR-506",
            name: "Imran Qureshi",
            phone: "+91 98700 11223",
            email: "imran.q@example.com",
            orders: 7,
            joined_on: date(2025, 5, 30),
        },
    ]
}
