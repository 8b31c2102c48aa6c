use crate::api::credential_creation_options::DecodedCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::api::verifications::RegistrationVerification;
use crate::authenticator::AuthenticatorChannel;
use crate::ceremony::CeremonyState;
use crate::error::{CeremonyError, CeremonyErrorType};
use crate::relying_party::RelyingParty;

pub struct RegistrationCeremony {
    state: CeremonyState,
}

impl RegistrationCeremony {
    pub async fn init() -> RegistrationCeremony {
        RegistrationCeremony {
            state: CeremonyState::Idle,
        }
    }

    pub async fn state(&self) -> CeremonyState {
        self.state
    }

    pub async fn begin(
        &mut self,
        relying_party: &RelyingParty,
        username: &str,
    ) -> Result<DecodedCreationOptions, CeremonyError> {
        self.state = CeremonyState::Idle;

        match username.is_empty() {
            true => Err(self.fail(CeremonyError {
                error: CeremonyErrorType::ValidationError,
            })),
            false => {
                self.state = CeremonyState::OptionsRequested;

                let options = match relying_party.registration_options(username).await {
                    Ok(options) => options,
                    Err(error) => return Err(self.fail(error)),
                };

                match options.decode().await {
                    Ok(decoded_options) => {
                        self.state = CeremonyState::OptionsReceived;

                        Ok(decoded_options)
                    }
                    Err(error) => Err(self.fail(error)),
                }
            }
        }
    }

    pub async fn create(
        &mut self,
        authenticator: &AuthenticatorChannel,
        options: DecodedCreationOptions,
    ) -> Result<PublicKeyCredential, CeremonyError> {
        match authenticator.credentials_create(options).await {
            Ok(credential) => {
                self.state = CeremonyState::CredentialCreated;

                Ok(credential)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    pub async fn finish(
        &mut self,
        relying_party: &RelyingParty,
        username: &str,
        credential: &PublicKeyCredential,
    ) -> Result<(), CeremonyError> {
        let verification = match RegistrationVerification::generate(credential, username).await {
            Ok(verification) => verification,
            Err(error) => return Err(self.fail(error)),
        };

        match relying_party.registration_verifications(&verification).await {
            Ok(()) => {
                self.state = CeremonyState::Verified;

                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    pub async fn run(
        &mut self,
        relying_party: &RelyingParty,
        authenticator: &AuthenticatorChannel,
        username: &str,
    ) -> Result<(), CeremonyError> {
        let options = self.begin(relying_party, username).await?;
        let credential = self.create(authenticator, options).await?;

        self.finish(relying_party, username, &credential).await?;

        Ok(())
    }

    fn fail(&mut self, error: CeremonyError) -> CeremonyError {
        self.state = CeremonyState::Failed;

        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::authenticator_responses::{
        AuthenticatorAttestationResponse, AuthenticatorResponse,
    };
    use crate::authenticator::{Request, Response};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::net::SocketAddr;

    async fn test_relying_party_server(verification_status: StatusCode) -> SocketAddr {
        let router = Router::new()
            .route(
                "/registration/options",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({
                        "publicKey": {
                            "rp": { "name": "go-passkey-demo", "id": "localhost" },
                            "user": {
                                "name": body["username"],
                                "id": "c29tZV91c2VyX2hhbmRsZQ",
                                "displayName": body["username"]
                            },
                            "challenge": "X3Rlc3RfY2hhbGxlbmdlXw",
                            "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
                            "excludeCredentials": [
                                { "type": "public-key", "id": "c29tZV9jcmVkZW50aWFsX2lk" }
                            ]
                        }
                    }))
                }),
            )
            .route(
                "/registration/verifications",
                post(move |Json(body): Json<Value>| async move {
                    assert_eq!(body["username"], "some_user");
                    assert!(body["response"].get("attestationObject").is_some());
                    assert!(body["response"].get("clientDataJSON").is_some());

                    (verification_status, Json(json!({})))
                }),
            );
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router.into_make_service());
        let socket_address = server.local_addr();

        tokio::spawn(server);

        socket_address
    }

    async fn test_authenticator() -> AuthenticatorChannel {
        let (authenticator, mut receiver) = AuthenticatorChannel::init().await;

        tokio::spawn(async move {
            while let Some((request, response)) = receiver.recv().await {
                match request {
                    Request::CredentialsCreate(options) => {
                        assert_eq!(options.challenge, b"_test_challenge_");
                        assert!(options.exclude_credentials.is_some());

                        let credential = PublicKeyCredential::generate(
                            b"some_credential_id".to_vec(),
                            AuthenticatorResponse::AuthenticatorAttestationResponse(
                                AuthenticatorAttestationResponse {
                                    client_data_json: b"some_client_data".to_vec(),
                                    attestation_object: b"some_attestation_object".to_vec(),
                                },
                            ),
                        )
                        .await;

                        _ = response.send(Response::PublicKeyCredential(credential));
                    }
                    Request::CredentialsGet(_) => _ = response.send(Response::Aborted),
                }
            }
        });

        authenticator
    }

    #[tokio::test]
    async fn begin_empty_username() -> Result<(), Box<dyn std::error::Error>> {
        let test_relying_party = RelyingParty::init("http://127.0.0.1:9").await?;
        let mut test_ceremony = RegistrationCeremony::init().await;

        assert_eq!(test_ceremony.state().await, CeremonyState::Idle);

        let test_validation_error = test_ceremony.begin(&test_relying_party, "").await;

        assert!(test_validation_error.is_err());
        assert_eq!(
            test_validation_error.unwrap_err().error,
            CeremonyErrorType::ValidationError,
        );
        assert_eq!(test_ceremony.state().await, CeremonyState::Failed);

        Ok(())
    }

    #[tokio::test]
    async fn begin() -> Result<(), Box<dyn std::error::Error>> {
        let test_socket_address = test_relying_party_server(StatusCode::OK).await;
        let test_relying_party =
            RelyingParty::init(&format!("http://{}", test_socket_address)).await?;
        let mut test_ceremony = RegistrationCeremony::init().await;
        let test_options = test_ceremony.begin(&test_relying_party, "some_user").await?;

        assert_eq!(test_ceremony.state().await, CeremonyState::OptionsReceived);
        assert_eq!(test_options.challenge, b"_test_challenge_");
        assert_eq!(test_options.user.id, b"some_user_handle");

        let test_exclude_credentials = test_options.exclude_credentials.unwrap();

        assert_eq!(test_exclude_credentials[0].id, b"some_credential_id");

        Ok(())
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn std::error::Error>> {
        let test_socket_address = test_relying_party_server(StatusCode::OK).await;
        let test_relying_party =
            RelyingParty::init(&format!("http://{}", test_socket_address)).await?;
        let test_authenticator = test_authenticator().await;
        let mut test_ceremony = RegistrationCeremony::init().await;

        test_ceremony
            .run(&test_relying_party, &test_authenticator, "some_user")
            .await?;

        assert_eq!(test_ceremony.state().await, CeremonyState::Verified);
        assert!(!test_ceremony.state().await.in_flight().await);

        Ok(())
    }

    #[tokio::test]
    async fn run_server_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let test_socket_address = test_relying_party_server(StatusCode::BAD_REQUEST).await;
        let test_relying_party =
            RelyingParty::init(&format!("http://{}", test_socket_address)).await?;
        let test_authenticator = test_authenticator().await;
        let mut test_ceremony = RegistrationCeremony::init().await;
        let test_server_rejected = test_ceremony
            .run(&test_relying_party, &test_authenticator, "some_user")
            .await;

        assert!(test_server_rejected.is_err());
        assert_eq!(
            test_server_rejected.unwrap_err().error,
            CeremonyErrorType::ServerRejected,
        );
        assert_eq!(test_ceremony.state().await, CeremonyState::Failed);

        Ok(())
    }

    #[tokio::test]
    async fn create_aborted() -> Result<(), Box<dyn std::error::Error>> {
        let test_socket_address = test_relying_party_server(StatusCode::OK).await;
        let test_relying_party =
            RelyingParty::init(&format!("http://{}", test_socket_address)).await?;
        let (test_authenticator, mut test_receiver) = AuthenticatorChannel::init().await;

        tokio::spawn(async move {
            if let Some((_request, response)) = test_receiver.recv().await {
                _ = response.send(Response::Aborted);
            }
        });

        let mut test_ceremony = RegistrationCeremony::init().await;
        let test_options = test_ceremony.begin(&test_relying_party, "some_user").await?;
        let test_aborted = test_ceremony.create(&test_authenticator, test_options).await;

        assert!(test_aborted.is_err());
        assert_eq!(
            test_aborted.unwrap_err().error,
            CeremonyErrorType::CeremonyAborted,
        );
        assert_eq!(test_ceremony.state().await, CeremonyState::Failed);

        Ok(())
    }
}
