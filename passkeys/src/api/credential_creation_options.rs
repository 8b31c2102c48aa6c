use serde::{Deserialize, Serialize};

use crate::api::supporting_data_structures::{
    AuthenticatorSelectionCriteria, DecodedPublicKeyCredentialDescriptor,
    PublicKeyCredentialDescriptor, PublicKeyCredentialParameters,
};
use crate::error::CeremonyError;
use crate::security::encoding::base64_url_decode;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CredentialCreationOptions {
    #[serde(rename = "publicKey")]
    pub public_key: PublicKeyCredentialCreationOptions,
}

impl CredentialCreationOptions {
    pub async fn decode(self) -> Result<DecodedCreationOptions, CeremonyError> {
        self.public_key.decode().await
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: String,
    #[serde(rename = "pubKeyCredParams", default)]
    pub public_key_credential_parameters: Vec<PublicKeyCredentialParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(rename = "excludeCredentials")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    #[serde(rename = "authenticatorSelection")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
}

impl PublicKeyCredentialCreationOptions {
    pub async fn decode(self) -> Result<DecodedCreationOptions, CeremonyError> {
        let challenge = base64_url_decode(&self.challenge).await?;
        let user = self.user.decode().await?;
        let exclude_credentials = match self.exclude_credentials {
            Some(descriptors) => {
                let mut decoded_descriptors = Vec::with_capacity(descriptors.len());

                for descriptor in descriptors {
                    decoded_descriptors.push(descriptor.decode().await?);
                }

                Some(decoded_descriptors)
            }
            None => None,
        };

        Ok(DecodedCreationOptions {
            rp: self.rp,
            user,
            challenge,
            public_key_credential_parameters: self.public_key_credential_parameters,
            timeout: self.timeout,
            exclude_credentials,
            authenticator_selection: self.authenticator_selection,
            attestation: self.attestation,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialRpEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialUserEntity {
    pub name: String,
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl PublicKeyCredentialUserEntity {
    pub async fn decode(self) -> Result<DecodedUserEntity, CeremonyError> {
        let id = base64_url_decode(&self.id).await?;

        Ok(DecodedUserEntity {
            name: self.name,
            id,
            display_name: self.display_name,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedUserEntity {
    pub name: String,
    pub id: Vec<u8>,
    pub display_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: DecodedUserEntity,
    pub challenge: Vec<u8>,
    pub public_key_credential_parameters: Vec<PublicKeyCredentialParameters>,
    pub timeout: Option<u64>,
    pub exclude_credentials: Option<Vec<DecodedPublicKeyCredentialDescriptor>>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: Option<String>,
}
