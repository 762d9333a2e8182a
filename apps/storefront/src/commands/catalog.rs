//! # Catalog Commands
//!
//! Read-only product listing and lookup.
//!
//! ## Listing Filter
//! ```text
//! category: None | "" | "All"  ──►  every product
//! category: "Watches"          ──►  products whose category is "Watches"
//! ```
//! Results always keep catalog order.

use tracing::debug;

use aranoz_core::{CategoryFilter, Product};

use crate::error::ApiError;
use crate::Storefront;

/// Label of the catch-all entry in the category list.
pub const ALL_CATEGORIES: &str = "All";

/// Lists products, optionally limited to one category.
///
/// ## Arguments
/// * `category` - Category name; `None`, empty or `"All"` lists everything
pub fn list_products(store: &Storefront, category: Option<&str>) -> Vec<Product> {
    debug!(?category, "list_products command");

    let filter = CategoryFilter::from_name(category);
    store.catalog().filter(&filter).cloned().collect()
}

/// Gets one product by id.
pub fn get_product(store: &Storefront, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    Ok(store.catalog().require(product_id)?.clone())
}

/// Lists the category filter options: `"All"` followed by every distinct
/// category in first-seen order.
pub fn list_categories(store: &Storefront) -> Vec<String> {
    debug!("list_categories command");

    std::iter::once(ALL_CATEGORIES)
        .chain(store.catalog().categories())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::store;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_list_all() {
        let store = store();
        assert_eq!(ids(&list_products(&store, None)), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&list_products(&store, Some("All"))), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&list_products(&store, Some(""))), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_list_by_category() {
        let store = store();
        assert_eq!(ids(&list_products(&store, Some("Watches"))), vec!["1", "4"]);
        assert!(list_products(&store, Some("Garden")).is_empty());
    }

    #[test]
    fn test_get_product() {
        let store = store();
        assert_eq!(get_product(&store, "2").unwrap().name, "Wooden Chair");

        let err = get_product(&store, "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(
            list_categories(&store()),
            vec!["All", "Watches", "Furniture", "Lighting"]
        );
    }
}
