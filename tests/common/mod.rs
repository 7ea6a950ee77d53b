//! Shared fixtures for the marketplace view integration tests.
//!
//! Builders create small in-memory collections with only the fields a test cares
//! about set explicitly.

#![allow(dead_code)]

use chrono::NaiveDate;
use marketplace_views::models::{
    Document, DocumentCategory, DocumentStatus, Investment, InvestmentCategory, Order,
    OrderStatus, PaymentStatus, Product, ProductCategory, ProductStatus, RepaymentStatus,
    RiskTier,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

pub fn product(id: &str, name: &str, status: ProductStatus, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: format!("SKU-{}", id),
        category: ProductCategory::Other,
        status,
        price,
        stock,
        sales: 0,
        created_at: date(2024, 1, 1),
        description: None,
    }
}

/// Four products with statuses [active, out-of-stock, active, draft].
pub fn sample_products() -> Vec<Product> {
    let mut lamp = product("p1", "Desk Lamp", ProductStatus::Active, 40.0, 12);
    lamp.category = ProductCategory::HomeGoods;
    lamp.sales = 30;
    lamp.created_at = date(2024, 1, 10);

    let mut cable = product("p2", "USB-C Cable", ProductStatus::OutOfStock, 9.5, 0);
    cable.category = ProductCategory::Electronics;
    cable.sales = 120;
    cable.created_at = date(2024, 2, 1);

    let mut speaker = product("p3", "Bluetooth Speaker", ProductStatus::Active, 75.0, 4);
    speaker.category = ProductCategory::Electronics;
    speaker.sales = 55;
    speaker.created_at = date(2023, 12, 5);

    let mut mug = product("p4", "Travel Mug", ProductStatus::Draft, 18.0, 50);
    mug.category = ProductCategory::HomeGoods;
    mug.created_at = date(2024, 3, 3);

    vec![lamp, cable, speaker, mug]
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

pub fn order(
    id: &str,
    customer: &str,
    status: OrderStatus,
    payment: PaymentStatus,
    amount: f64,
    order_date: NaiveDate,
) -> Order {
    Order {
        id: id.to_string(),
        customer_name: customer.to_string(),
        customer_email: format!("{}@example.com", customer.to_lowercase().replace(' ', ".")),
        product_name: "Widget".to_string(),
        status,
        payment_status: payment,
        amount,
        items: 1,
        order_date,
        shipping_address: None,
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "o1",
            "Ada Lovelace",
            OrderStatus::Delivered,
            PaymentStatus::Paid,
            100.0,
            date(2024, 3, 1),
        ),
        order(
            "o2",
            "Alan Turing",
            OrderStatus::Pending,
            PaymentStatus::Pending,
            50.0,
            date(2024, 3, 4),
        ),
        order(
            "o3",
            "Grace Hopper",
            OrderStatus::Cancelled,
            PaymentStatus::Refunded,
            80.0,
            date(2024, 2, 20),
        ),
        order(
            "o4",
            "Ada Lovelace",
            OrderStatus::Shipped,
            PaymentStatus::Paid,
            30.0,
            date(2024, 3, 2),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

pub fn investment(id: &str, vendor: &str, amount: f64, status: RepaymentStatus) -> Investment {
    Investment {
        id: id.to_string(),
        vendor_name: vendor.to_string(),
        category: InvestmentCategory::WorkingCapital,
        status,
        risk: RiskTier::Low,
        amount,
        returns: 0.0,
        interest_rate: 8.0,
        start_date: date(2024, 1, 1),
        maturity_date: date(2025, 1, 1),
    }
}

pub fn sample_investments() -> Vec<Investment> {
    let mut a = investment("i1", "GreenLeaf Organics", 50000.0, RepaymentStatus::OnTime);
    a.returns = 4000.0;
    a.interest_rate = 10.0;
    a.risk = RiskTier::Low;
    a.start_date = date(2023, 6, 1);

    let mut b = investment("i2", "Urban Threads", 25000.0, RepaymentStatus::Late);
    b.returns = 1000.0;
    b.interest_rate = 6.0;
    b.risk = RiskTier::Medium;
    b.start_date = date(2023, 9, 1);

    let mut c = investment("i3", "TechNova", 20000.0, RepaymentStatus::Completed);
    c.returns = 2500.0;
    c.interest_rate = 12.0;
    c.risk = RiskTier::High;
    c.category = InvestmentCategory::InvoiceFactoring;
    c.start_date = date(2022, 3, 1);

    vec![a, b, c]
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

pub fn document(
    id: &str,
    name: &str,
    category: DocumentCategory,
    status: DocumentStatus,
    size_bytes: u64,
) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        vendor_name: "GreenLeaf Organics".to_string(),
        category,
        status,
        size_bytes,
        uploaded_at: date(2024, 1, 1),
        expires_at: None,
    }
}

pub fn sample_documents() -> Vec<Document> {
    let mut contract = document(
        "d1",
        "Master Agreement",
        DocumentCategory::Contract,
        DocumentStatus::Signed,
        2_000_000,
    );
    contract.uploaded_at = date(2023, 5, 1);
    contract.expires_at = Some(date(2024, 6, 1));

    let mut invoice = document(
        "d2",
        "Invoice 4471",
        DocumentCategory::Invoice,
        DocumentStatus::PendingSignature,
        300_000,
    );
    invoice.uploaded_at = date(2024, 3, 2);
    invoice.expires_at = Some(date(2024, 4, 2));
    invoice.vendor_name = "TechNova".to_string();

    let mut kyc = document(
        "d3",
        "KYC Pack",
        DocumentCategory::Compliance,
        DocumentStatus::Expired,
        5_000_000,
    );
    kyc.uploaded_at = date(2023, 1, 20);
    kyc.expires_at = Some(date(2024, 1, 20));

    let mut report = document(
        "d4",
        "Annual Report",
        DocumentCategory::Report,
        DocumentStatus::Draft,
        1_000_000,
    );
    report.uploaded_at = date(2024, 2, 10);

    vec![contract, invoice, kyc, report]
}
