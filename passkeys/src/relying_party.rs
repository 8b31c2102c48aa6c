use reqwest::Client;
use serde_json::json;

use crate::api::assertion_generation_options::CredentialRequestOptions;
use crate::api::credential_creation_options::CredentialCreationOptions;
use crate::api::credential_record::{PublicKeyRecord, UserInfo};
use crate::api::verifications::{
    AuthenticationVerification, RegistrationVerification, VerifiedAuthentication,
};
use crate::error::{CeremonyError, CeremonyErrorType};

pub struct RelyingParty {
    base_url: String,
    client: Client,
}

impl RelyingParty {
    pub async fn init(base_url: &str) -> Result<RelyingParty, CeremonyError> {
        match Client::builder().cookie_store(true).build() {
            Ok(client) => Ok(RelyingParty {
                base_url: String::from(base_url),
                client,
            }),
            Err(error) => {
                println!("http client -> {:?}", error);

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }

    pub async fn registration_options(
        &self,
        username: &str,
    ) -> Result<CredentialCreationOptions, CeremonyError> {
        let response = match self
            .client
            .post(format!("{}/registration/options", &self.base_url))
            .json(&json!({ "username": username }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("registration options -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => match response.json::<CredentialCreationOptions>().await {
                Ok(options) => Ok(options),
                Err(error) => {
                    println!("registration options json -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::DecodeError,
                    })
                }
            },
            false => {
                println!("registration options status -> {:?}", response.status());

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }

    pub async fn registration_verifications(
        &self,
        verification: &RegistrationVerification,
    ) -> Result<(), CeremonyError> {
        let response = match self
            .client
            .post(format!("{}/registration/verifications", &self.base_url))
            .json(verification)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("registration verifications -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => Ok(()),
            false => {
                println!(
                    "registration verifications status -> {:?}",
                    response.status(),
                );

                Err(CeremonyError {
                    error: CeremonyErrorType::ServerRejected,
                })
            }
        }
    }

    pub async fn authentication_options(&self) -> Result<CredentialRequestOptions, CeremonyError> {
        let response = match self
            .client
            .post(format!("{}/authentication/options", &self.base_url))
            .json(&json!({}))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("authentication options -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => match response.json::<CredentialRequestOptions>().await {
                Ok(options) => Ok(options),
                Err(error) => {
                    println!("authentication options json -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::DecodeError,
                    })
                }
            },
            false => {
                println!("authentication options status -> {:?}", response.status());

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }

    pub async fn authentication_verifications(
        &self,
        verification: &AuthenticationVerification,
    ) -> Result<VerifiedAuthentication, CeremonyError> {
        let response = match self
            .client
            .post(format!("{}/authentication/verifications", &self.base_url))
            .json(verification)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("authentication verifications -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => match response.json::<VerifiedAuthentication>().await {
                Ok(verified) => Ok(verified),
                Err(error) => {
                    println!("authentication verifications json -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::DecodeError,
                    })
                }
            },
            false => {
                println!(
                    "authentication verifications status -> {:?}",
                    response.status(),
                );

                Err(CeremonyError {
                    error: CeremonyErrorType::ServerRejected,
                })
            }
        }
    }

    pub async fn user(&self, user_id: &str) -> Result<UserInfo, CeremonyError> {
        let response = match self
            .client
            .get(format!("{}/users/{}", &self.base_url, user_id))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("user -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => match response.json::<UserInfo>().await {
                Ok(user_info) => Ok(user_info),
                Err(error) => {
                    println!("user json -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::DecodeError,
                    })
                }
            },
            false => {
                println!("user status -> {:?}", response.status());

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }

    pub async fn user_public_keys(
        &self,
        user_id: &str,
    ) -> Result<Vec<PublicKeyRecord>, CeremonyError> {
        let response = match self
            .client
            .get(format!("{}/users/{}/public_keys", &self.base_url, user_id))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("user public keys -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => match response.json::<Vec<PublicKeyRecord>>().await {
                Ok(public_keys) => Ok(public_keys),
                Err(error) => {
                    println!("user public keys json -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::DecodeError,
                    })
                }
            },
            false => {
                println!("user public keys status -> {:?}", response.status());

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }

    pub async fn delete_public_key(
        &self,
        user_id: &str,
        public_key_id: &str,
    ) -> Result<(), CeremonyError> {
        let response = match self
            .client
            .delete(format!(
                "{}/users/{}/public_keys/{}",
                &self.base_url, user_id, public_key_id,
            ))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                println!("delete public key -> {:?}", error);

                return Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                });
            }
        };

        match response.status().is_success() {
            true => Ok(()),
            false => {
                println!("delete public key status -> {:?}", response.status());

                Err(CeremonyError {
                    error: CeremonyErrorType::NetworkError,
                })
            }
        }
    }
}
