/// `₹12.50`: currency symbol followed by the amount with two decimals
pub fn format_price(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
