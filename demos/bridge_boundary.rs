//! Boundary Pattern
//!
//! Expression-style code inside, a functional API outside. Failures raised
//! in the middle of a computation come back out of `catch` unchanged.
//!
//! Run with `TRACE=1` to capture a diagnostic trace for every failure.

use outcome_rail::config::enable_trace_capture;
use outcome_rail::{catch, catch_all, Outcome};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum InventoryError {
    UnknownSku(String),
    OutOfStock { sku: String, wanted: u32, available: u32 },
    Crashed(String),
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSku(sku) => write!(f, "unknown sku {sku}"),
            Self::OutOfStock { sku, wanted, available } => {
                write!(f, "{sku}: wanted {wanted}, only {available} left")
            }
            Self::Crashed(message) => write!(f, "crashed: {message}"),
        }
    }
}

struct Inventory {
    stock: HashMap<&'static str, u32>,
}

impl Inventory {
    fn available(&self, sku: &str) -> Outcome<u32, InventoryError> {
        self.stock
            .get(sku)
            .copied()
            .map_or_else(|| Outcome::fail(InventoryError::UnknownSku(sku.to_string())), Outcome::some)
    }

    fn reserve(&self, sku: &str, wanted: u32) -> Outcome<u32, InventoryError> {
        self.available(sku).flat_map(|available| {
            Outcome::some_when(
                available.saturating_sub(wanted),
                |_| available >= wanted,
                InventoryError::OutOfStock { sku: sku.to_string(), wanted, available },
            )
        })
    }

    /// Reserves every line of an order, or none.
    fn reserve_all(&self, order: &[(&str, u32)]) -> Outcome<Vec<u32>, InventoryError> {
        catch(|| {
            let mut remaining = Vec::with_capacity(order.len());
            for (sku, wanted) in order {
                remaining.push(self.reserve(sku, *wanted).into_value_or_raise());
            }
            Outcome::some(remaining)
        })
    }
}

fn main() {
    if std::env::var("TRACE").is_ok() {
        enable_trace_capture();
    }

    let inventory = Inventory {
        stock: HashMap::from([("apple", 10), ("pear", 2)]),
    };

    let orders: [&[(&str, u32)]; 3] = [
        &[("apple", 3), ("pear", 1)],
        &[("apple", 1), ("pear", 5)],
        &[("kiwi", 1)],
    ];

    for order in orders {
        match inventory.reserve_all(order) {
            Outcome::Value(left) => println!("✓ {order:?} -> remaining {left:?}"),
            Outcome::Failure(failure) => println!("✗ {order:?} -> {failure:#}"),
        }
    }

    // Foreign panics need catch_all and a mapping into the failure type.
    let crashed: Outcome<u32, InventoryError> = catch_all(
        || {
            let empty: Vec<u32> = Vec::new();
            Outcome::some(empty[0])
        },
        InventoryError::Crashed,
    );
    println!("\n{crashed}");
}
