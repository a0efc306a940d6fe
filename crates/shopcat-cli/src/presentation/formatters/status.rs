use crate::presentation::view_models::LoadStatusViewModel;

pub const LOAD_FAILED: &str = "Failed to load products. Try again later.";

pub fn status_line(status: &LoadStatusViewModel) -> String {
    match status {
        LoadStatusViewModel::NotLoaded => "Products not loaded".to_string(),
        LoadStatusViewModel::Loading => "Loading products...".to_string(),
        LoadStatusViewModel::Loaded { count } => format!("Loaded {} products", count),
        LoadStatusViewModel::Displayed { count: 0 } => "No products to show".to_string(),
        LoadStatusViewModel::Displayed { count: 1 } => "1 product displayed".to_string(),
        LoadStatusViewModel::Displayed { count } => format!("{} products displayed", count),
        LoadStatusViewModel::Failed { .. } => LOAD_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wording() {
        assert_eq!(status_line(&LoadStatusViewModel::Loading), "Loading products...");
        assert_eq!(
            status_line(&LoadStatusViewModel::Loaded { count: 20 }),
            "Loaded 20 products"
        );
        assert_eq!(
            status_line(&LoadStatusViewModel::Displayed { count: 0 }),
            "No products to show"
        );
        assert_eq!(
            status_line(&LoadStatusViewModel::Displayed { count: 1 }),
            "1 product displayed"
        );
        assert_eq!(
            status_line(&LoadStatusViewModel::Displayed { count: 3 }),
            "3 products displayed"
        );
        assert_eq!(
            status_line(&LoadStatusViewModel::Failed {
                reason: "boom".to_string()
            }),
            "Failed to load products. Try again later."
        );
    }
}
