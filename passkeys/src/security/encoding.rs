use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{CeremonyError, CeremonyErrorType};

pub async fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

pub async fn base64_url_decode(data: &str) -> Result<Vec<u8>, CeremonyError> {
    match URL_SAFE_NO_PAD.decode(data) {
        Ok(decoded_data) => Ok(decoded_data),
        Err(error) => {
            println!("base64 url decoding error -> {:?}", error);

            Err(CeremonyError {
                error: CeremonyErrorType::DecodeError,
            })
        }
    }
}
