use serde::{Deserialize, Serialize};

use crate::error::CeremonyError;
use crate::security::encoding::base64_url_decode;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialDescriptor {
    pub r#type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

impl PublicKeyCredentialDescriptor {
    pub async fn decode(self) -> Result<DecodedPublicKeyCredentialDescriptor, CeremonyError> {
        let id = base64_url_decode(&self.id).await?;

        Ok(DecodedPublicKeyCredentialDescriptor {
            r#type: self.r#type,
            id,
            transports: self.transports,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedPublicKeyCredentialDescriptor {
    pub r#type: String,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialParameters {
    pub r#type: String,
    pub alg: i64,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthenticatorSelectionCriteria {
    #[serde(rename = "authenticatorAttachment")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(rename = "residentKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(rename = "requireResidentKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(rename = "userVerification")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}
