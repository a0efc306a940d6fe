//! Sample catalogs in the shape the product API returns.

/// Four products across three categories.
///
/// - id 3 has no `rating` at all
/// - id 4 has a title carrying markup and a terminal escape sequence
pub const SAMPLE_PRODUCTS: &str = r#"[
  {
    "id": 1,
    "title": "Red Shoe",
    "price": 10,
    "category": "shoes",
    "image": "https://img.example/red-shoe.png",
    "description": "A comfortable red shoe",
    "rating": { "rate": 4.5, "count": 120 }
  },
  {
    "id": 2,
    "title": "Blue Hat",
    "price": 5,
    "category": "hats",
    "image": "https://img.example/blue-hat.png",
    "description": "Keeps the sun away",
    "rating": { "rate": 3.9, "count": 40 }
  },
  {
    "id": 3,
    "title": "Green Shoe",
    "price": 22.5,
    "category": "shoes",
    "image": "https://img.example/green-shoe.png",
    "description": "Not rated yet"
  },
  {
    "id": 4,
    "title": "<b>Bold</b> Ring \u001b[31m",
    "price": 99.99,
    "category": "jewelery",
    "image": "https://img.example/ring.png",
    "description": "Shiny",
    "rating": { "rate": 5, "count": 2 }
  }
]"#;

/// The two-product catalog used throughout the pipeline examples
pub const SHOE_AND_HAT: &str = r#"[
  { "id": 1, "title": "Red Shoe", "price": 10, "category": "shoes" },
  { "id": 2, "title": "Blue Hat", "price": 5, "category": "hats" }
]"#;

/// A valid, empty catalog
pub const EMPTY_CATALOG: &str = "[]";

/// Not a product list
pub const NOT_AN_ARRAY: &str = r#"{ "products": [] }"#;
