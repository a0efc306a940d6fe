use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, ProductDetailViewModel, RatingViewModel,
};
use shopcat_types::Product;

pub fn build_product_detail(
    product: &Product,
    favorite: bool,
    currency: &str,
) -> ProductDetailViewModel {
    ProductDetailViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        image: product.image.clone(),
        category: product.category.clone(),
        description: product.description.clone(),
        price: product.price,
        currency: currency.to_string(),
        rating: RatingViewModel {
            rate: product.rating_rate(),
            count: product.rating_count().unwrap_or(0),
        },
        favorite,
    }
}

pub fn present_product_detail(
    product: &Product,
    favorite: bool,
    currency: &str,
) -> CommandResultViewModel<ProductDetailViewModel> {
    let id = product.id.get();
    let description = if favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    CommandResultViewModel::new(build_product_detail(product, favorite, currency))
        .with_tip(description, fmt::fav_toggle(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcat_types::{ProductId, Rating};

    fn product(rating: Option<Rating>) -> Product {
        Product {
            id: ProductId::new(7),
            title: "Lamp".to_string(),
            price: 19.5,
            category: "home".to_string(),
            image: "https://img.example/lamp.png".to_string(),
            description: "A lamp".to_string(),
            rating,
        }
    }

    #[test]
    fn test_missing_rating_is_not_available() {
        let vm = build_product_detail(&product(None), false, "₹");
        assert_eq!(vm.rating.rate, None);
        assert_eq!(vm.rating.count, 0);
    }

    #[test]
    fn test_partial_rating_keeps_present_member() {
        let vm = build_product_detail(
            &product(Some(Rating {
                rate: Some(4.5),
                count: None,
            })),
            true,
            "$",
        );
        assert_eq!(vm.rating.rate, Some(4.5));
        assert_eq!(vm.rating.count, 0);
        assert!(vm.favorite);
        assert_eq!(vm.currency, "$");
    }

    #[test]
    fn test_suggests_toggle_for_this_product() {
        let result = present_product_detail(&product(None), true, "₹");
        assert_eq!(result.tips[0].description, "Remove from favorites");
        assert_eq!(result.tips[0].command, "shopcat fav toggle 7");
    }
}
