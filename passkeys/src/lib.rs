pub mod api;
pub mod authenticator;
pub mod ceremony;
pub mod error;
pub mod public_keys;
pub mod relying_party;
pub mod security;
