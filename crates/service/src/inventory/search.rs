use models::Product;

/// Products whose name or description contains `query`, ignoring case.
///
/// The query is trimmed first; a blank query returns every product. Order is
/// the collection order.
///
/// ```
/// use models::Product;
/// use service::inventory::search::filter_products;
/// let products = vec![
///     Product { id: "1".into(), name: "Red Mug".into(), price: 3.0, quantity: 1, description: None },
///     Product { id: "2".into(), name: "Blue Cup".into(), price: 2.0, quantity: 5, description: Some("ceramic".into()) },
/// ];
/// assert_eq!(filter_products(&products, "CUP")[0].id, "2");
/// assert_eq!(filter_products(&products, "  ").len(), 2);
/// ```
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products.iter().filter(|p| p.matches_lowercase(&needle)).cloned().collect()
}
