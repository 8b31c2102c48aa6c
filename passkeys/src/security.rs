pub mod aaguid;
pub mod encoding;
