use serde::{Deserialize, Serialize};

use crate::api::authenticator_responses::AuthenticatorResponse;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::error::{CeremonyError, CeremonyErrorType};
use crate::security::encoding::base64_url_encode;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegistrationVerification {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    pub r#type: String,
    pub response: AttestationVerificationData,
    pub username: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AttestationVerificationData {
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

impl RegistrationVerification {
    pub async fn generate(
        credential: &PublicKeyCredential,
        username: &str,
    ) -> Result<RegistrationVerification, CeremonyError> {
        match &credential.response {
            AuthenticatorResponse::AuthenticatorAttestationResponse(response) => {
                Ok(RegistrationVerification {
                    id: credential.id.to_owned(),
                    raw_id: base64_url_encode(&credential.raw_id).await,
                    r#type: credential.r#type.to_owned(),
                    response: AttestationVerificationData {
                        attestation_object: base64_url_encode(&response.attestation_object).await,
                        client_data_json: base64_url_encode(&response.client_data_json).await,
                    },
                    username: String::from(username),
                })
            }
            AuthenticatorResponse::AuthenticatorAssertionResponse(_) => Err(CeremonyError {
                error: CeremonyErrorType::ValidationError,
            }),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthenticationVerification {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    pub r#type: String,
    pub response: AssertionVerificationData,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssertionVerificationData {
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub signature: String,
    #[serde(rename = "userHandle")]
    pub user_handle: String,
}

impl AuthenticationVerification {
    pub async fn generate(
        credential: &PublicKeyCredential,
    ) -> Result<AuthenticationVerification, CeremonyError> {
        match &credential.response {
            AuthenticatorResponse::AuthenticatorAssertionResponse(response) => {
                let user_handle = match &response.user_handle {
                    Some(user_handle) => base64_url_encode(user_handle).await,
                    None => String::new(),
                };

                Ok(AuthenticationVerification {
                    id: credential.id.to_owned(),
                    raw_id: base64_url_encode(&credential.raw_id).await,
                    r#type: credential.r#type.to_owned(),
                    response: AssertionVerificationData {
                        authenticator_data: base64_url_encode(&response.authenticator_data).await,
                        client_data_json: base64_url_encode(&response.client_data_json).await,
                        signature: base64_url_encode(&response.signature).await,
                        user_handle,
                    },
                })
            }
            AuthenticatorResponse::AuthenticatorAttestationResponse(_) => Err(CeremonyError {
                error: CeremonyErrorType::ValidationError,
            }),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VerifiedAuthentication {
    pub user_id: Option<String>,
}
