use crate::api::authenticator_responses::AuthenticatorResponse;
use crate::security::encoding::base64_url_encode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub r#type: String,
    pub response: AuthenticatorResponse,
}

impl PublicKeyCredential {
    pub async fn generate(
        raw_id: Vec<u8>,
        response: AuthenticatorResponse,
    ) -> PublicKeyCredential {
        let id = base64_url_encode(&raw_id).await;
        let r#type = String::from("public-key");

        PublicKeyCredential {
            id,
            raw_id,
            response,
            r#type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::authenticator_responses::AuthenticatorAttestationResponse;

    #[tokio::test]
    async fn public_key_credential() -> Result<(), Box<dyn std::error::Error>> {
        let test_response = AuthenticatorResponse::AuthenticatorAttestationResponse(
            AuthenticatorAttestationResponse {
                client_data_json: b"some_client_data".to_vec(),
                attestation_object: b"some_attestation_object".to_vec(),
            },
        );
        let test_credential =
            PublicKeyCredential::generate(b"some_credential_id".to_vec(), test_response).await;

        assert_eq!(test_credential.id, "c29tZV9jcmVkZW50aWFsX2lk");
        assert_eq!(test_credential.raw_id, b"some_credential_id");
        assert_eq!(test_credential.r#type, "public-key");

        Ok(())
    }
}
