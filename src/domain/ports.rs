use super::errors::DomainError;
use super::order::{
    Customer, NewCustomer, NewOrder, OrderReport, OrderStatus, OrderSummary, OrderWithItems,
};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persist the order, its items, and the reserved order number as one
    /// atomic unit. Surfaces `Conflict` if the customer vanished between the
    /// service-level check and the insert, or on an order-number collision.
    fn create(&self, new_order: NewOrder) -> Result<OrderWithItems, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, DomainError>;
    fn list(&self, page: i64, page_size: i64) -> Result<Vec<OrderSummary>, DomainError>;
    fn update_status(&self, id: i32, status: OrderStatus) -> Result<(), DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
    fn report(&self) -> Result<OrderReport, DomainError>;
}

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;
    fn add(&self, new_customer: NewCustomer) -> Result<Customer, DomainError>;
    fn count(&self) -> Result<i64, DomainError>;
}
