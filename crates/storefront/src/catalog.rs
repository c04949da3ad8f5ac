//! Read-only product catalog.
//!
//! The catalog is a fixed, in-memory set of products seeded at construction
//! time, plus the distinct categories and brands derivable from it and the
//! filter/sort queries the listing pages need. There are no mutation
//! operations; a real implementation would replace this with a query against
//! a product service.

use elegantshop_core::{Price, ProductId};
use rust_decimal::Decimal;

use crate::models::Product;

/// The fixed product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create the catalog with the built-in demo product set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Create a catalog over an explicit product set (for tests and tooling).
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Distinct categories, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Distinct brands, in order of first appearance.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.brand.as_str()) {
                seen.push(product.brand.as_str());
            }
        }
        seen
    }

    /// Filter and sort the catalog for a listing page.
    #[must_use]
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .collect();

        match query.sort {
            // Popularity and Newest keep catalog order: the seed set has no
            // sales or launch-date data to rank by.
            SortKey::Popularity | SortKey::Newest => {}
            SortKey::PriceLow => results.sort_by_key(|p| p.price.amount),
            SortKey::PriceHigh => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price.amount));
            }
            SortKey::Rating => {
                results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
        }

        results
    }
}

/// Sort order for listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Default ranking (catalog order).
    #[default]
    Popularity,
    /// Price, cheapest first.
    PriceLow,
    /// Price, most expensive first.
    PriceHigh,
    /// Rating, best first.
    Rating,
    /// Most recently added first.
    Newest,
}

/// A listing-page filter. All criteria are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring match over name, brand, and category.
    pub text: Option<String>,
    /// Inclusive price bounds.
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Any-of brand filter; empty means no brand filter.
    pub brands: Vec<String>,
    /// Any-of size filter; empty means no size filter.
    pub sizes: Vec<String>,
    /// Keep products rated at least this highly.
    pub min_rating: Option<f32>,
    /// Sort order applied after filtering.
    pub sort: SortKey,
}

impl ProductQuery {
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(min) = self.min_price
            && product.price.amount < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && product.price.amount > max
        {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }

        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }

        if let Some(min_rating) = self.min_rating
            && product.rating < min_rating
        {
            return false;
        }

        true
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    price: i64,
    original_price: Option<i64>,
    category: &str,
    sub_category: Option<&str>,
    sizes: &[&str],
    colors: &[&str],
    rating: f32,
    reviews: u32,
    description: &str,
    in_stock: bool,
) -> Product {
    let discount = original_price.map(|original| {
        let saved = (original - price) * 100;
        u32::try_from(saved / original).unwrap_or(0)
    });

    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        price: Price::rupees(price),
        original_price: original_price.map(Price::rupees),
        discount,
        image: format!("/images/products/{id}.jpg"),
        hover_image: Some(format!("/images/products/{id}-alt.jpg")),
        category: category.to_string(),
        sub_category: sub_category.map(str::to_string),
        sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        colors: colors.iter().map(|c| (*c).to_string()).collect(),
        rating,
        reviews,
        description: description.to_string(),
        in_stock,
    }
}

/// The built-in demo product set.
fn seed_products() -> Vec<Product> {
    vec![
        product(
            "p-001",
            "Floral Anarkali Kurta",
            "Libas",
            1299,
            Some(2199),
            "Women",
            Some("Kurtas"),
            &["S", "M", "L", "XL"],
            &["Red", "Navy", "Teal"],
            4.3,
            812,
            "Festive floral-print anarkali kurta with three-quarter sleeves.",
            true,
        ),
        product(
            "p-002",
            "Banarasi Silk Saree",
            "Kalini",
            2499,
            Some(4999),
            "Women",
            Some("Sarees"),
            &["Free Size"],
            &["Maroon", "Gold"],
            4.6,
            1240,
            "Handwoven banarasi silk saree with zari border and blouse piece.",
            true,
        ),
        product(
            "p-003",
            "Slim Fit Oxford Shirt",
            "Roadster",
            899,
            Some(1499),
            "Men",
            Some("Shirts"),
            &["S", "M", "L", "XL", "XXL"],
            &["Blue", "White"],
            4.1,
            654,
            "Button-down oxford shirt in breathable cotton.",
            true,
        ),
        product(
            "p-004",
            "Stretch Chinos",
            "Highlander",
            1199,
            None,
            "Men",
            Some("Trousers"),
            &["30", "32", "34", "36"],
            &["Khaki", "Olive", "Black"],
            3.9,
            301,
            "Mid-rise stretch chinos with a tapered leg.",
            true,
        ),
        product(
            "p-005",
            "Canvas Sneakers",
            "Sparx",
            1499,
            Some(1999),
            "Footwear",
            Some("Casual Shoes"),
            &["7", "8", "9", "10"],
            &["White", "Black"],
            4.0,
            978,
            "Low-top canvas sneakers with a vulcanised sole.",
            true,
        ),
        product(
            "p-006",
            "Cloudfoam Running Shoes",
            "Campus",
            2199,
            Some(3499),
            "Footwear",
            Some("Sports Shoes"),
            &["7", "8", "9", "10", "11"],
            &["Grey", "Blue", "Neon"],
            4.4,
            2031,
            "Lightweight running shoes with cushioned midsole.",
            true,
        ),
        product(
            "p-007",
            "Dinosaur Print T-Shirt",
            "H&M Kids",
            499,
            None,
            "Kids",
            Some("T-Shirts"),
            &["2-3Y", "4-5Y", "6-7Y"],
            &["Green", "Yellow"],
            4.2,
            187,
            "Soft cotton tee with dinosaur print.",
            true,
        ),
        product(
            "p-008",
            "Leather Tote Bag",
            "Lavie",
            1899,
            Some(3799),
            "Accessories",
            Some("Handbags"),
            &["Free Size"],
            &["Tan", "Black"],
            4.5,
            566,
            "Structured faux-leather tote with zip closure.",
            false,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new();
        let p = catalog.product(&ProductId::new("p-001")).unwrap();
        assert_eq!(p.name, "Floral Anarkali Kurta");
        assert!(catalog.product(&ProductId::new("p-999")).is_none());
    }

    #[test]
    fn test_categories_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.categories(),
            vec!["Women", "Men", "Footwear", "Kids", "Accessories"]
        );
    }

    #[test]
    fn test_brands_are_distinct() {
        let catalog = Catalog::new();
        let brands = catalog.brands();
        assert!(brands.contains(&"Libas"));
        let mut deduped = brands.clone();
        deduped.dedup();
        assert_eq!(brands, deduped);
    }

    #[test]
    fn test_discount_derived_from_original_price() {
        let catalog = Catalog::new();
        let saree = catalog.product(&ProductId::new("p-002")).unwrap();
        assert_eq!(saree.discount, Some(50));
        let chinos = catalog.product(&ProductId::new("p-004")).unwrap();
        assert_eq!(chinos.discount, None);
    }

    #[test]
    fn test_search_by_category() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            category: Some("Footwear".to_string()),
            ..ProductQuery::default()
        };
        let results = catalog.search(&query);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == "Footwear"));
    }

    #[test]
    fn test_search_text_matches_name_brand_and_category() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            text: Some("sparx".to_string()),
            ..ProductQuery::default()
        };
        assert_eq!(catalog.search(&query).len(), 1);

        let query = ProductQuery {
            text: Some("kids".to_string()),
            ..ProductQuery::default()
        };
        // Matches the "Kids" category and the "H&M Kids" brand
        assert!(!catalog.search(&query).is_empty());
    }

    #[test]
    fn test_search_price_range() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            min_price: Some(Decimal::from(1000)),
            max_price: Some(Decimal::from(1500)),
            ..ProductQuery::default()
        };
        let results = catalog.search(&query);
        assert!(
            results
                .iter()
                .all(|p| p.price.amount >= Decimal::from(1000)
                    && p.price.amount <= Decimal::from(1500))
        );
        assert!(!results.is_empty());
    }

    #[test]
    fn test_search_sort_price_low_to_high() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            sort: SortKey::PriceLow,
            ..ProductQuery::default()
        };
        let results = catalog.search(&query);
        let prices: Vec<_> = results.iter().map(|p| p.price.amount).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_search_sort_rating_best_first() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            sort: SortKey::Rating,
            ..ProductQuery::default()
        };
        let results = catalog.search(&query);
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_search_min_rating_and_sizes() {
        let catalog = Catalog::new();
        let query = ProductQuery {
            min_rating: Some(4.0),
            sizes: vec!["M".to_string()],
            ..ProductQuery::default()
        };
        let results = catalog.search(&query);
        assert!(
            results
                .iter()
                .all(|p| p.rating >= 4.0 && p.sizes.iter().any(|s| s == "M"))
        );
    }
}
