/// Product catalog entry fetched from the platform. Immutable once received;
/// prices are pre-localized by the platform for the player's region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Display title of the product.
    pub title: String,
    /// Identifier used to request a purchase of this product.
    pub product_id: String,
    /// Display description, if the catalog defines one.
    pub description: Option<String>,
    /// Product image URI, if the catalog defines one.
    pub image_uri: Option<String>,
    /// Localized price string, e.g. "$0.99".
    pub price: String,
    /// ISO 4217 currency code for `price`.
    pub price_currency_code: String,
}
