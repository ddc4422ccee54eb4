use serde::Deserialize;

/// Data structure returned by the platform SDK for a single entry of the
/// purchasable-product catalog.
///
/// Catalog entries are static descriptors: the platform localizes the price
/// for the player's region before returning them, and they do not change
/// once received.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductModel {
    /// The title of the product.
    pub(crate) title: String,
    /// The product's game-specified identifier.
    #[serde(rename = "productID")]
    pub(crate) product_id: String,
    /// The product's description. May not be present.
    pub(crate) description: Option<String>,
    /// A link to the product's associated image. May not be present.
    #[serde(rename = "imageURI")]
    pub(crate) image_uri: Option<String>,
    /// The price of the product, localized for the player's region.
    pub(crate) price: String,
    /// The currency code for the product, in ISO 4217 format.
    pub(crate) price_currency_code: String,
}
