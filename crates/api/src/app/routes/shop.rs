// Placeholders: no cart state, checkout flow or contact handling yet.

pub async fn contact() -> &'static str {
    "contact"
}

pub async fn cart() -> &'static str {
    "cart"
}

pub async fn checkout() -> &'static str {
    "checkout"
}
