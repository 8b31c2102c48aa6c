use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

use crate::error::{CeremonyError, CeremonyErrorType};

pub type Aaguid = [u8; 16];

// the relying party emits this field as padded standard base64, not base64url
pub async fn to_canonical_id(base64_aaguid: &str) -> Result<String, CeremonyError> {
    let decoded_aaguid = match STANDARD.decode(base64_aaguid) {
        Ok(decoded_aaguid) => decoded_aaguid,
        Err(error) => {
            println!("aaguid base64 decoding error -> {:?}", error);

            return Err(CeremonyError {
                error: CeremonyErrorType::DecodeError,
            });
        }
    };

    match decoded_aaguid.len() == 16 {
        true => {
            let mut aaguid: Aaguid = [0; 16];

            aaguid.copy_from_slice(&decoded_aaguid);

            Ok(Uuid::from_bytes(aaguid).hyphenated().to_string())
        }
        false => Err(CeremonyError {
            error: CeremonyErrorType::FormatError,
        }),
    }
}
