use serde::{Deserialize, Serialize};

use crate::api::supporting_data_structures::{
    DecodedPublicKeyCredentialDescriptor, PublicKeyCredentialDescriptor,
};
use crate::error::CeremonyError;
use crate::security::encoding::base64_url_decode;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CredentialRequestOptions {
    #[serde(rename = "publicKey")]
    pub public_key: PublicKeyCredentialRequestOptions,
}

impl CredentialRequestOptions {
    pub async fn decode(self) -> Result<DecodedRequestOptions, CeremonyError> {
        self.public_key.decode().await
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyCredentialRequestOptions {
    pub challenge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(rename = "rpId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,
    #[serde(rename = "allowCredentials")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    #[serde(rename = "userVerification")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

impl PublicKeyCredentialRequestOptions {
    pub async fn decode(self) -> Result<DecodedRequestOptions, CeremonyError> {
        let challenge = base64_url_decode(&self.challenge).await?;
        let allow_credentials = match self.allow_credentials {
            Some(descriptors) => {
                let mut decoded_descriptors = Vec::with_capacity(descriptors.len());

                for descriptor in descriptors {
                    decoded_descriptors.push(descriptor.decode().await?);
                }

                Some(decoded_descriptors)
            }
            None => None,
        };

        Ok(DecodedRequestOptions {
            challenge,
            timeout: self.timeout,
            rp_id: self.rp_id,
            allow_credentials,
            user_verification: self.user_verification,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedRequestOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u64>,
    pub rp_id: Option<String>,
    pub allow_credentials: Option<Vec<DecodedPublicKeyCredentialDescriptor>>,
    pub user_verification: Option<String>,
}
