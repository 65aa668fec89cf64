//! crates/nordic_explorer_core/src/session.rs
//!
//! The per-visitor state container. Every page handler receives the session it
//! serves; there is no process-wide session.

use crate::cart::Cart;
use crate::domain::{Language, Page};
use crate::router::PageRouter;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub cart: Cart,
    pub router: PageRouter,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl Session {
    /// A fresh session: empty cart, Home page, English.
    pub fn new(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            cart: Cart::new(),
            router: PageRouter::new(),
            language: Language::default(),
            created_at: now,
            last_accessed_at: now,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed_at = now;
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_accessed_at > ttl
    }

    /// Clears the cart and returns to Home. The id and language are kept.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.router = PageRouter::new();
    }
}
