use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    order_total, NewOrder, NewOrderItem, OrderReport, OrderStatus, OrderSummary, OrderWithItems,
};
use crate::domain::ports::{CustomerRepository, OrderRepository};

/// Business rules for the order lifecycle. Persistence is delegated to the
/// repository ports; this layer owns validation and total computation.
pub struct OrderService<O, C> {
    orders: O,
    customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> OrderService<O, C> {
    pub fn new(orders: O, customers: C) -> Self {
        Self { orders, customers }
    }

    pub fn create_order(
        &self,
        customer_id: i32,
        items: Vec<NewOrderItem>,
    ) -> Result<OrderWithItems, DomainError> {
        log::info!("Creating order for customer {}", customer_id);

        if items.is_empty() {
            return Err(DomainError::InvalidInput(
                "Order must have at least one item".to_string(),
            ));
        }
        for item in &items {
            if item.quantity <= 0 {
                return Err(DomainError::InvalidInput(format!(
                    "Quantity must be positive for product '{}'",
                    item.product_name
                )));
            }
            if item.unit_price < BigDecimal::from(0) {
                return Err(DomainError::InvalidInput(format!(
                    "Unit price must not be negative for product '{}'",
                    item.product_name
                )));
            }
        }

        self.customers
            .find_by_id(customer_id)?
            .ok_or_else(|| DomainError::InvalidInput("Customer not found".to_string()))?;

        let total_amount = order_total(&items);
        let created = self.orders.create(NewOrder {
            customer_id,
            total_amount,
            items,
        })?;

        log::info!(
            "Created order {} ({})",
            created.order.id,
            created.order.order_number
        );
        Ok(created)
    }

    pub fn get_order(&self, id: i32) -> Result<Option<OrderWithItems>, DomainError> {
        self.orders.find_by_id(id)
    }

    pub fn list_orders(&self, page: i64, page_size: i64) -> Result<Vec<OrderSummary>, DomainError> {
        self.orders.list(page, page_size)
    }

    pub fn update_status(&self, id: i32, status: OrderStatus) -> Result<(), DomainError> {
        log::info!("Updating order {} to status {}", id, status.as_str());
        self.orders.update_status(id, status)
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        log::info!("Deleting order {}", id);
        self.orders.delete(id)
    }

    pub fn report(&self) -> Result<OrderReport, DomainError> {
        self.orders.report()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;
    use chrono::Utc;

    use super::OrderService;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{
        Customer, NewCustomer, NewOrder, NewOrderItem, Order, OrderReport, OrderStatus,
        OrderSummary, OrderWithItems,
    };
    use crate::domain::order_number::format_order_number;
    use crate::domain::ports::{CustomerRepository, OrderRepository};

    // In-memory stand-ins for the Diesel repositories. Only the behavior the
    // service observes is modeled: stored orders, assigned ids, and a counter
    // for order numbers.

    #[derive(Default)]
    struct InMemoryOrders {
        stored: Mutex<Vec<OrderWithItems>>,
        next_id: AtomicI32,
    }

    impl OrderRepository for InMemoryOrders {
        fn create(&self, new_order: NewOrder) -> Result<OrderWithItems, DomainError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let created = OrderWithItems {
                order: Order {
                    id,
                    order_number: format_order_number(2026, id as i64),
                    customer_id: new_order.customer_id,
                    status: OrderStatus::Pending,
                    total_amount: new_order.total_amount,
                    created_at: Utc::now(),
                    updated_at: None,
                },
                customer_name: "Customer".to_string(),
                items: vec![],
            };
            self.stored.lock().unwrap().push(created.clone());
            Ok(created)
        }

        fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, DomainError> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.order.id == id)
                .cloned())
        }

        fn list(&self, _page: i64, _page_size: i64) -> Result<Vec<OrderSummary>, DomainError> {
            Ok(vec![])
        }

        fn update_status(&self, id: i32, status: OrderStatus) -> Result<(), DomainError> {
            let mut stored = self.stored.lock().unwrap();
            match stored.iter_mut().find(|o| o.order.id == id) {
                Some(order) => {
                    order.order.status = status;
                    order.order.updated_at = Some(Utc::now());
                    Ok(())
                }
                None => Err(DomainError::NotFound),
            }
        }

        fn delete(&self, id: i32) -> Result<(), DomainError> {
            let mut stored = self.stored.lock().unwrap();
            let before = stored.len();
            stored.retain(|o| o.order.id != id);
            if stored.len() == before {
                return Err(DomainError::NotFound);
            }
            Ok(())
        }

        fn report(&self) -> Result<OrderReport, DomainError> {
            let stored = self.stored.lock().unwrap();
            Ok(OrderReport {
                total_orders: stored.len() as i64,
                total_revenue: stored
                    .iter()
                    .fold(BigDecimal::from(0), |acc, o| acc + &o.order.total_amount),
                orders_by_status: vec![],
                top_customers: vec![],
            })
        }
    }

    struct InMemoryCustomers {
        known: Vec<i32>,
    }

    impl CustomerRepository for InMemoryCustomers {
        fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
            Ok(self.known.contains(&id).then(|| Customer {
                id,
                name: format!("Customer {}", id),
                email: format!("customer{}@example.com", id),
                created_at: Utc::now(),
            }))
        }

        fn add(&self, _new_customer: NewCustomer) -> Result<Customer, DomainError> {
            unimplemented!("not used by these tests")
        }

        fn count(&self) -> Result<i64, DomainError> {
            Ok(self.known.len() as i64)
        }
    }

    fn service(known_customers: Vec<i32>) -> OrderService<InMemoryOrders, InMemoryCustomers> {
        OrderService::new(
            InMemoryOrders::default(),
            InMemoryCustomers {
                known: known_customers,
            },
        )
    }

    fn item(quantity: i32, unit_price: &str) -> NewOrderItem {
        NewOrderItem {
            product_name: "Widget".to_string(),
            product_sku: "SKU-0001".to_string(),
            quantity,
            unit_price: BigDecimal::from_str(unit_price).expect("valid decimal"),
        }
    }

    #[test]
    fn create_computes_exact_total() {
        let svc = service(vec![100]);

        let created = svc
            .create_order(100, vec![item(2, "25.99")])
            .expect("create failed");

        assert_eq!(
            created.order.total_amount,
            BigDecimal::from_str("51.98").unwrap()
        );
        assert_eq!(created.order.status, OrderStatus::Pending);
    }

    #[test]
    fn create_sums_across_items() {
        let svc = service(vec![1]);

        let created = svc
            .create_order(1, vec![item(2, "25.99"), item(3, "1.50")])
            .expect("create failed");

        assert_eq!(
            created.order.total_amount,
            BigDecimal::from_str("56.48").unwrap()
        );
    }

    #[test]
    fn create_with_unknown_customer_persists_nothing() {
        let svc = service(vec![]);

        let result = svc.create_order(42, vec![item(1, "9.99")]);

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(svc.get_order(1).expect("get failed").is_none());
    }

    #[test]
    fn create_with_empty_items_fails_before_persistence() {
        let svc = service(vec![1]);

        let result = svc.create_order(1, vec![]);

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(svc.get_order(1).expect("get failed").is_none());
    }

    #[test]
    fn create_rejects_non_positive_quantity() {
        let svc = service(vec![1]);

        assert!(matches!(
            svc.create_order(1, vec![item(0, "9.99")]),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.create_order(1, vec![item(-2, "9.99")]),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn create_rejects_negative_unit_price() {
        let svc = service(vec![1]);

        assert!(matches!(
            svc.create_order(1, vec![item(1, "-0.01")]),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn get_missing_order_returns_none() {
        let svc = service(vec![1]);
        assert!(svc.get_order(99).expect("get failed").is_none());
    }

    #[test]
    fn update_status_on_missing_order_is_not_found() {
        let svc = service(vec![1]);
        assert!(matches!(
            svc.update_status(99, OrderStatus::Shipped),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn update_status_sets_updated_at() {
        let svc = service(vec![1]);
        let created = svc
            .create_order(1, vec![item(1, "5.00")])
            .expect("create failed");
        assert!(created.order.updated_at.is_none());

        svc.update_status(created.order.id, OrderStatus::Shipped)
            .expect("update failed");

        let fetched = svc
            .get_order(created.order.id)
            .expect("get failed")
            .expect("order should exist");
        assert_eq!(fetched.order.status, OrderStatus::Shipped);
        assert!(fetched.order.updated_at.is_some());
    }

    #[test]
    fn delete_on_missing_order_is_not_found() {
        let svc = service(vec![1]);
        assert!(matches!(svc.delete_order(99), Err(DomainError::NotFound)));
    }
}
