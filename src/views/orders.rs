//! Vendor order tracking view.

use serde::Serialize;

use crate::models::{Order, OrderStatus, PaymentStatus};
use crate::pipeline::{Facet, Record, SortKey, SortSpec, Summary};
use crate::view_model::CollectionView;

pub type OrdersView = CollectionView<Order>;

// ---------------------------------------------------------------------------
// Facets and sort fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderFilterField {
    Status,
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderFacet {
    Status(OrderStatus),
    Payment(PaymentStatus),
}

impl Facet for OrderFacet {
    type Field = OrderFilterField;

    fn field(&self) -> OrderFilterField {
        match self {
            OrderFacet::Status(_) => OrderFilterField::Status,
            OrderFacet::Payment(_) => OrderFilterField::Payment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSortField {
    OrderDate,
    Amount,
    Items,
}

// ---------------------------------------------------------------------------
// OrderSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_orders: usize,
    /// Sum of amounts, excluding cancelled and refunded orders.
    pub total_revenue: f64,
    pub pending_count: usize,
    pub delivered_count: usize,
    pub average_order_value: f64,
}

impl Summary for OrderSummary {}

/// Whether an order's amount counts towards revenue.
pub fn counts_as_revenue(order: &Order) -> bool {
    order.status != OrderStatus::Cancelled && order.payment_status != PaymentStatus::Refunded
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

impl Record for Order {
    type Id = String;
    type Facet = OrderFacet;
    type SortField = OrderSortField;
    type Summary = OrderSummary;

    const DOMAIN: &'static str = "orders";

    fn id(&self) -> &String {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.customer_name.as_str(),
            self.customer_email.as_str(),
            self.product_name.as_str(),
        ]
    }

    fn facet(&self, field: OrderFilterField) -> OrderFacet {
        match field {
            OrderFilterField::Status => OrderFacet::Status(self.status),
            OrderFilterField::Payment => OrderFacet::Payment(self.payment_status),
        }
    }

    fn sort_key(&self, field: OrderSortField) -> SortKey {
        match field {
            OrderSortField::OrderDate => self.order_date.into(),
            OrderSortField::Amount => self.amount.into(),
            OrderSortField::Items => self.items.into(),
        }
    }

    fn default_sort() -> SortSpec<OrderSortField> {
        SortSpec::descending(OrderSortField::OrderDate)
    }

    fn summarize(items: &[Order]) -> OrderSummary {
        let mut summary = OrderSummary {
            total_orders: items.len(),
            ..OrderSummary::default()
        };
        let mut revenue_orders = 0usize;
        for order in items {
            match order.status {
                OrderStatus::Pending => summary.pending_count += 1,
                OrderStatus::Delivered => summary.delivered_count += 1,
                OrderStatus::Processing | OrderStatus::Shipped | OrderStatus::Cancelled => {}
            }
            if counts_as_revenue(order) {
                summary.total_revenue += order.amount;
                revenue_orders += 1;
            }
        }
        if revenue_orders > 0 {
            summary.average_order_value = summary.total_revenue / revenue_orders as f64;
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Fulfilment helpers
// ---------------------------------------------------------------------------

impl CollectionView<Order> {
    /// Move an order one step along pending → processing → shipped → delivered.
    ///
    /// Returns `false` for unknown ids and for orders already in a terminal state.
    pub fn advance_status(&mut self, id: &str) -> bool {
        let next = self
            .base()
            .iter()
            .find(|o| o.id == id)
            .and_then(|o| o.status.next());
        match next {
            Some(status) => self.update_item(id, |o| o.status = status),
            None => false,
        }
    }

    /// Cancel an order that has not shipped yet.
    pub fn cancel(&mut self, id: &str) -> bool {
        let cancellable = self
            .base()
            .iter()
            .any(|o| o.id == id && o.status.is_cancellable());
        cancellable && self.update_item(id, |o| o.status = OrderStatus::Cancelled)
    }

    pub fn set_payment_status(&mut self, id: &str, payment: PaymentStatus) -> bool {
        self.update_item(id, |o| o.payment_status = payment)
    }
}
