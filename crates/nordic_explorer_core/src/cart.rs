//! crates/nordic_explorer_core/src/cart.rs
//!
//! The cart controller: an ordered list of items a visitor intends to book.

use crate::domain::CartItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered sequence of cart items. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Repeated adds produce repeated entries.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Removes the first item whose name matches.
    ///
    /// Returns `false` when nothing matched; callers treat that as a no-op.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of all item prices, in whole euros.
    pub fn total_cost(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
