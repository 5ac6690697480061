//! Cart mutations triggered from the shop view, and card presentation.

use storefront_core::{format_inr, CartLine, CartRepository, Product, ProductId, StoreError};

/// Toast shown by the checkout button. Checkout does nothing else.
pub const CHECKOUT_NOTICE: &str = "Checkout is a demo — contact shop to purchase.";

#[derive(Debug, Clone, PartialEq)]
/// A cart change requested by a shop control.
pub enum CartAction {
    /// "Add to cart" on a product card.
    Add(Product),
    /// "+" on a cart line.
    Increment(ProductId),
    /// "-" on a cart line; clamps at 1.
    Decrement(ProductId),
    /// "Remove" on a cart line.
    Remove(ProductId),
}

/// Applies `action` to `cart`. Returns the toast to show, if the action has one.
///
/// # Errors
///
/// Returns [`StoreError`] when the cart cannot be written.
pub fn apply_cart_action(
    cart: &CartRepository,
    action: CartAction,
) -> Result<Option<&'static str>, StoreError> {
    match action {
        CartAction::Add(product) => {
            cart.add_or_increment(&product)?;
            Ok(Some("Added to cart"))
        }
        CartAction::Increment(id) => {
            cart.increment(&id)?;
            Ok(None)
        }
        CartAction::Decrement(id) => {
            cart.decrement(&id)?;
            Ok(None)
        }
        CartAction::Remove(id) => {
            cart.remove_by_id(&id)?;
            Ok(Some("Removed from cart"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display fields of a product card.
pub struct ProductCardView {
    /// Resolved image URL.
    pub image: Option<String>,
    /// Image alt text.
    pub image_alt: String,
    /// Card heading.
    pub title: String,
    /// Color label.
    pub color: String,
    /// Formatted price.
    pub price_label: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            image: product.display_image().map(str::to_string),
            image_alt: product.image_alt(),
            title: product.title().to_string(),
            color: product.color.clone(),
            price_label: format_inr(product.price),
        }
    }
}

/// "₹3,899 × 2".
pub fn line_price_text(line: &CartLine) -> String {
    format!("{} × {}", format_inr(line.price), line.qty)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;
    use storefront_core::{demo_catalog, JsonStore};

    use super::*;

    fn cart() -> CartRepository {
        CartRepository::new(
            JsonStore::new(Rc::new(MemoryKeyValueStore::default())),
            "cart",
        )
    }

    #[test]
    fn add_and_remove_report_toasts_steppers_do_not() {
        let cart = cart();
        let saree = demo_catalog().remove(0);
        let id = saree.id.clone();

        assert_eq!(
            apply_cart_action(&cart, CartAction::Add(saree.clone())),
            Ok(Some("Added to cart"))
        );
        assert_eq!(apply_cart_action(&cart, CartAction::Add(saree)), Ok(Some("Added to cart")));
        assert_eq!(apply_cart_action(&cart, CartAction::Increment(id.clone())), Ok(None));
        assert_eq!(cart.item_count(), 3);

        for _ in 0..5 {
            apply_cart_action(&cart, CartAction::Decrement(id.clone())).expect("dec");
        }
        assert_eq!(cart.item_count(), 1);

        assert_eq!(
            apply_cart_action(&cart, CartAction::Remove(id)),
            Ok(Some("Removed from cart"))
        );
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn card_view_uses_sample_image_and_formatted_price() {
        let saree = demo_catalog().remove(0);
        let view = ProductCardView::from(&saree);
        assert_eq!(view.title, "Kanchipuram silk");
        assert_eq!(view.color, "Royal Blue");
        assert_eq!(view.image_alt, "Royal Blue saree");
        assert_eq!(view.price_label, "₹3,899");
        assert_eq!(view.image, saree.sample);
    }

    #[test]
    fn line_price_text_shows_unit_price_and_quantity() {
        let mut line = CartLine::snapshot(&demo_catalog().remove(3));
        line.qty = 2;
        assert_eq!(line_price_text(&line), "₹5,599 × 2");
    }
}
