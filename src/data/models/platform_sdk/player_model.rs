use serde::Deserialize;

/// Data structure returned by the platform SDK for the current player's
/// identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerModel {
    /// The player's platform-scoped identifier.
    pub(crate) id: String,
    /// The player's display name. May be withheld by the platform.
    pub(crate) name: Option<String>,
    /// A URI for the player's avatar photo. May be withheld by the platform.
    pub(crate) photo: Option<String>,
}

/// Data structure returned by the platform SDK for the signed
/// application-scoped identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignedAsidModel {
    /// The application-scoped identifier.
    pub(crate) asid: String,
    /// Signature over the identifier, verifiable only by the game's backend.
    pub(crate) signature: String,
}
