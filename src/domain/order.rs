use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// Order lifecycle status. Wire values are fixed; any status may follow any
/// other (there is no transition graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending = 0,
    Confirmed = 1,
    Processing = 2,
    Shipped = 3,
    Delivered = 4,
    Cancelled = 5,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> i32 {
        status as i32
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderStatus::Pending),
            1 => Ok(OrderStatus::Confirmed),
            2 => Ok(OrderStatus::Processing),
            3 => Ok(OrderStatus::Shipped),
            4 => Ok(OrderStatus::Delivered),
            5 => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status value {}", other)),
        }
    }
}

// ── Inputs ───────────────────────────────────────────────────────────────────

/// A line item as submitted by the caller, before persistence.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl NewOrderItem {
    pub fn line_total(&self) -> BigDecimal {
        BigDecimal::from(self.quantity) * &self.unit_price
    }
}

/// An order ready to be persisted. The order number, status, and timestamps
/// are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i32,
    pub total_amount: BigDecimal,
    pub items: Vec<NewOrderItem>,
}

/// Exact decimal sum of `quantity × unit_price` over all items.
pub fn order_total(items: &[NewOrderItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::from(0), |acc, item| acc + item.line_total())
}

// ── Persisted entities ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub customer_id: i32,
    pub status: OrderStatus,
    pub total_amount: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: i32,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl OrderItem {
    pub fn line_total(&self) -> BigDecimal {
        BigDecimal::from(self.quantity) * &self.unit_price
    }
}

/// A full order as returned to callers: header, items, and the owning
/// customer's display name (resolved for responses, never persisted).
#[derive(Debug, Clone)]
pub struct OrderWithItems {
    pub order: Order,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}

/// One row of a paginated listing.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: i32,
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_amount: BigDecimal,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
}

// ── Reporting ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: i64,
}

#[derive(Debug, Clone)]
pub struct CustomerOrderStats {
    pub customer_id: i32,
    pub customer_name: String,
    pub order_count: i64,
    pub total_spent: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderReport {
    pub total_orders: i64,
    pub total_revenue: BigDecimal,
    pub orders_by_status: Vec<StatusCount>,
    pub top_customers: Vec<CustomerOrderStats>,
}
