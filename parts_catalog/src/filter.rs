//! Catalog filtering and sorting
//!
//! The visible product list is derived from the loaded products and the
//! current [`FilterCriteria`] in a single pass plus an optional stable sort.

use feruca::Collator;
use parts_common::{CatalogError, Category, Generation, Product};

/// Product ordering selected in the sort menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Source order from the API
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    BrandAsc,
}

impl SortMode {
    /// Returns the wire name (e.g., "price-asc")
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::BrandAsc => "brand-asc",
        }
    }

    /// Returns the menu label
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Sort: Featured",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::BrandAsc => "Brand: A to Z",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownSortMode(s.to_string()))
    }

    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Default,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::BrandAsc,
        ]
    }
}

/// Current query/generation/category/sort selection
///
/// `None` for a tag filter means "all".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub generation: Option<Generation>,
    pub category: Option<Category>,
    pub sort: SortMode,
}

/// Parse a generation selection where "all" disables the filter
pub fn parse_generation_filter(s: &str) -> Result<Option<Generation>, CatalogError> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Generation::parse(s)
        .map(Some)
        .ok_or_else(|| CatalogError::UnknownGeneration(s.to_string()))
}

/// Parse a category selection where "all" disables the filter
pub fn parse_category_filter(s: &str) -> Result<Option<Category>, CatalogError> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Category::parse(s)
        .map(Some)
        .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
}

/// Apply criteria to the full product list, returning the list to render.
///
/// Filters are conjunctive. The result is always a subset of `products`;
/// with the default sort it keeps source order.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let query = criteria.query.to_lowercase();

    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| {
            criteria
                .generation
                .map_or(true, |g| p.generation == g.as_str())
        })
        .filter(|p| {
            criteria
                .category
                .map_or(true, |c| p.category == c.as_str())
        })
        .filter(|p| matches_query(p, &query))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => list.sort_by(|a, b| {
            let a = a.price.unwrap_or(f64::INFINITY);
            let b = b.price.unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        }),
        SortMode::PriceDesc => list.sort_by(|a, b| {
            let a = a.price.unwrap_or(f64::NEG_INFINITY);
            let b = b.price.unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        }),
        SortMode::BrandAsc => {
            let mut collator = Collator::default();
            list.sort_by(|a, b| collator.collate(a.brand.as_str(), b.brand.as_str()));
        }
    }

    list
}

/// Case-insensitive substring match on title, brand or generation tag.
/// `query` must already be lowercased; an empty query matches everything.
fn matches_query(product: &Product, query: &str) -> bool {
    query.is_empty()
        || product.title.to_lowercase().contains(query)
        || product.brand.to_lowercase().contains(query)
        || product.generation.to_lowercase().contains(query)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
