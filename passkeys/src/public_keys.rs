use serde::{Deserialize, Serialize};

use crate::api::credential_record::{PublicKeyRecord, UserInfo};
use crate::error::CeremonyError;
use crate::relying_party::RelyingParty;
use crate::security::aaguid::to_canonical_id;

pub const UNKNOWN_AUTHENTICATOR: &str = "unknown-authenticator";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyList {
    user: Option<UserInfo>,
    public_keys: Vec<PublicKeyRecord>,
}

impl PublicKeyList {
    pub async fn init() -> PublicKeyList {
        PublicKeyList {
            user: None,
            public_keys: Vec::with_capacity(0),
        }
    }

    pub async fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub async fn public_keys(&self) -> &[PublicKeyRecord] {
        &self.public_keys
    }

    pub async fn load(
        &mut self,
        relying_party: &RelyingParty,
        user_id: &str,
    ) -> (Result<(), CeremonyError>, Result<(), CeremonyError>) {
        let (user, public_keys) = tokio::join!(
            relying_party.user(user_id),
            relying_party.user_public_keys(user_id),
        );

        let user_result = match user {
            Ok(user_info) => {
                self.user = Some(user_info);

                Ok(())
            }
            Err(error) => {
                println!("load user -> {:?}", error);

                Err(error)
            }
        };

        let public_keys_result = match public_keys {
            Ok(public_keys) => {
                self.public_keys = public_keys;

                Ok(())
            }
            Err(error) => {
                println!("load public keys -> {:?}", error);

                Err(error)
            }
        };

        (user_result, public_keys_result)
    }

    pub async fn delete(
        &mut self,
        relying_party: &RelyingParty,
        user_id: &str,
        public_key_id: &str,
    ) -> Result<(), CeremonyError> {
        relying_party.delete_public_key(user_id, public_key_id).await?;

        self.public_keys.retain(|record| record.id != public_key_id);

        Ok(())
    }

    pub async fn display_identifier(record: &PublicKeyRecord) -> String {
        match to_canonical_id(&record.authenticator.aaguid).await {
            Ok(canonical_id) => canonical_id,
            Err(error) => {
                println!("display identifier -> {:?}", error);

                String::from(UNKNOWN_AUTHENTICATOR)
            }
        }
    }

    pub async fn display_identifiers(&self) -> Vec<String> {
        let mut identifiers = Vec::with_capacity(self.public_keys.len());

        for record in &self.public_keys {
            identifiers.push(PublicKeyList::display_identifier(record).await);
        }

        identifiers
    }
}
