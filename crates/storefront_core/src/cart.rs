//! Cart repository: line items stored under their own persistent key.

use crate::{
    error::StoreError,
    model::{CartLine, Product, ProductId},
    persistence::JsonStore,
};

#[derive(Debug, Clone, PartialEq, Default)]
/// A freshly computed view of the cart.
pub struct CartSummary {
    /// Line items in stored order.
    pub lines: Vec<CartLine>,
    /// Sum of `price * qty`.
    pub total: f64,
    /// Sum of quantities, shown in the header badge.
    pub item_count: u32,
}

impl CartSummary {
    /// Computes totals over `lines`.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(CartLine::line_total).sum();
        let item_count = lines.iter().fold(0_u32, |acc, l| acc.saturating_add(l.qty));
        Self {
            lines,
            total,
            item_count,
        }
    }
}

#[derive(Clone)]
/// Read-modify-write access to the cart list.
pub struct CartRepository {
    store: JsonStore,
    key: String,
}

impl CartRepository {
    /// Creates a repository over `store` using `key` for the list.
    pub fn new(store: JsonStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Every line item in stored order.
    pub fn list_all(&self) -> Vec<CartLine> {
        self.store.read_or(&self.key, Vec::new())
    }

    /// Increments the line for `product`, or snapshots it into a new line with quantity 1.
    /// Returns the resulting line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn add_or_increment(&self, product: &Product) -> Result<CartLine, StoreError> {
        let mut lines = self.list_all();
        let line = match lines.iter_mut().find(|l| l.id == product.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(1);
                existing.clone()
            }
            None => {
                let line = CartLine::snapshot(product);
                lines.push(line.clone());
                line
            }
        };
        self.store.write(&self.key, &lines)?;
        Ok(line)
    }

    /// Sets the quantity of line `id`, clamped to at least 1. Returns the updated line, or
    /// `None` (without writing) when no such line exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn set_quantity(&self, id: &ProductId, qty: u32) -> Result<Option<CartLine>, StoreError> {
        self.update_quantity(id, |_| qty)
    }

    /// Adds one to line `id`. There is no upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn increment(&self, id: &ProductId) -> Result<Option<CartLine>, StoreError> {
        self.update_quantity(id, |qty| qty.saturating_add(1))
    }

    /// Subtracts one from line `id`, never going below 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn decrement(&self, id: &ProductId) -> Result<Option<CartLine>, StoreError> {
        self.update_quantity(id, |qty| qty.saturating_sub(1))
    }

    fn update_quantity(
        &self,
        id: &ProductId,
        next: impl FnOnce(u32) -> u32,
    ) -> Result<Option<CartLine>, StoreError> {
        let mut lines = self.list_all();
        let Some(line) = lines.iter_mut().find(|l| &l.id == id) else {
            return Ok(None);
        };
        line.qty = next(line.qty).max(1);
        let updated = line.clone();
        self.store.write(&self.key, &lines)?;
        Ok(Some(updated))
    }

    /// Removes line `id`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn remove_by_id(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut lines = self.list_all();
        let before = lines.len();
        lines.retain(|l| &l.id != id);
        self.store.write(&self.key, &lines)?;
        Ok(lines.len() != before)
    }

    /// Removes every line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the cart cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.write(&self.key, &Vec::<CartLine>::new())
    }

    /// Sum of `price * qty` over the current lines.
    pub fn total(&self) -> f64 {
        self.summary().total
    }

    /// Sum of quantities over the current lines.
    pub fn item_count(&self) -> u32 {
        self.summary().item_count
    }

    /// Lines plus totals, read fresh from storage.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_lines(self.list_all())
    }
}
