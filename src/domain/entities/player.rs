use crate::domain::entities::signed_request::SignedRequest;

/// Read-only snapshot of the current player's identity, as reported by the
/// platform. Created by the platform and passed through unmodified; this
/// crate owns no lifecycle for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Platform-scoped player identifier.
    pub id: String,
    /// Display name. May be withheld by the platform.
    pub name: Option<String>,
    /// Avatar image URI. May be withheld by the platform.
    pub photo: Option<String>,
}

/// Application-scoped player identifier together with a signature the game's
/// backend can verify (see [`SignedRequest`] for the verification contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedAsid {
    pub asid: String,
    pub signature: SignedRequest,
}
