//! Deterministic demo data for development and testing: 10 customers and 100
//! orders with 1-4 items each, cycling through every status. Seeding goes
//! through the service so it exercises the same path as API traffic.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::application::order_service::OrderService;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewCustomer, NewOrderItem, OrderStatus};
use crate::domain::ports::{CustomerRepository, OrderRepository};

const SEED_CUSTOMERS: usize = 10;
const SEED_ORDERS: i32 = 100;

/// Small deterministic generator so the seed never depends on a global RNG.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Uniform-ish value in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo + 1)
    }
}

/// Populate the demo dataset. Idempotent: does nothing once any customer
/// exists.
pub fn seed_demo_data<O, C>(
    customers: &C,
    service: &OrderService<O, C>,
) -> Result<(), DomainError>
where
    O: OrderRepository,
    C: CustomerRepository,
{
    if customers.count()? > 0 {
        log::debug!("Demo data already present, skipping seed");
        return Ok(());
    }

    let customer_ids: Vec<i32> = (1..=SEED_CUSTOMERS)
        .map(|i| {
            customers
                .add(NewCustomer {
                    name: format!("Customer {}", i),
                    email: format!("customer{}@example.com", i),
                })
                .map(|c| c.id)
        })
        .collect::<Result<_, _>>()?;

    let mut rng = Lcg::new(42);
    for i in 1..=SEED_ORDERS {
        let customer_id = customer_ids[(i as usize - 1) % customer_ids.len()];
        let item_count = rng.range(1, 4);
        let items: Vec<NewOrderItem> = (0..item_count)
            .map(|_| {
                // Prices in 10.00..=109.99, held as exact cents.
                let cents = rng.range(1_000, 10_999);
                NewOrderItem {
                    product_name: format!("Product {}", rng.range(1, 49)),
                    product_sku: format!("SKU-{}", rng.range(1000, 9999)),
                    quantity: rng.range(1, 4) as i32,
                    unit_price: BigDecimal::new(BigInt::from(cents), 2),
                }
            })
            .collect();

        let created = service.create_order(customer_id, items)?;

        let status = OrderStatus::try_from(i % 6).map_err(DomainError::Internal)?;
        if status != OrderStatus::Pending {
            service.update_status(created.order.id, status)?;
        }
    }

    log::info!(
        "Seeded {} customers and {} demo orders",
        SEED_CUSTOMERS,
        SEED_ORDERS
    );
    Ok(())
}
