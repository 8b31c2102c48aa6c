pub mod assertion_generation_options;
pub mod authenticator_responses;
pub mod credential_creation_options;
pub mod credential_record;
pub mod public_key_credential;
pub mod supporting_data_structures;
pub mod verifications;
