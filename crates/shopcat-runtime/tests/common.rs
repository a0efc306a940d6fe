#![allow(dead_code)]

use shopcat_providers::{Error as SourceError, ProductSource, Result as SourceResult};
use shopcat_types::{Product, ProductId, Rating};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        category: category.to_string(),
        image: format!("https://img.example/{}.png", id),
        description: format!("{} description", title),
        rating: Some(Rating {
            rate: Some(4.0),
            count: Some(10),
        }),
    }
}

pub fn shoe_and_hat() -> Vec<Product> {
    vec![
        product(1, "Red Shoe", 10.0, "shoes"),
        product(2, "Blue Hat", 5.0, "hats"),
    ]
}

/// Source that always answers with the same list and counts its calls
#[derive(Clone, Default)]
pub struct StaticSource {
    pub products: Vec<Product>,
    pub calls: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProductSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn fetch(&self) -> impl Future<Output = SourceResult<Vec<Product>>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let products = self.products.clone();
        async move { Ok(products) }
    }
}

/// Source that always fails with a 500 and counts its calls
#[derive(Clone, Default)]
pub struct FailingSource {
    pub name: String,
    pub calls: Arc<AtomicUsize>,
}

impl FailingSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProductSource for FailingSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> impl Future<Output = SourceResult<Vec<Product>>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let url = self.name.clone();
        async move { Err(SourceError::Status { url, status: 500 }) }
    }
}
