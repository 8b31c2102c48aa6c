use crate::api::assertion_generation_options::DecodedRequestOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::api::verifications::AuthenticationVerification;
use crate::authenticator::AuthenticatorChannel;
use crate::ceremony::CeremonyState;
use crate::error::{CeremonyError, CeremonyErrorType};
use crate::relying_party::RelyingParty;

pub struct AuthenticationCeremony {
    state: CeremonyState,
}

impl AuthenticationCeremony {
    pub async fn init() -> AuthenticationCeremony {
        AuthenticationCeremony {
            state: CeremonyState::Idle,
        }
    }

    pub async fn state(&self) -> CeremonyState {
        self.state
    }

    pub async fn begin(
        &mut self,
        relying_party: &RelyingParty,
    ) -> Result<DecodedRequestOptions, CeremonyError> {
        self.state = CeremonyState::Idle;

        self.state = CeremonyState::OptionsRequested;

        let options = match relying_party.authentication_options().await {
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

    pub async fn get(
        &mut self,
        authenticator: &AuthenticatorChannel,
        options: DecodedRequestOptions,
    ) -> Result<PublicKeyCredential, CeremonyError> {
        match authenticator.credentials_get(options).await {
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
        credential: &PublicKeyCredential,
    ) -> Result<String, CeremonyError> {
        let verification = match AuthenticationVerification::generate(credential).await {
            Ok(verification) => verification,
            Err(error) => return Err(self.fail(error)),
        };

        let verified = match relying_party
            .authentication_verifications(&verification)
            .await
        {
            Ok(verified) => verified,
            Err(error) => return Err(self.fail(error)),
        };

        match verified.user_id {
            Some(user_id) => match user_id.is_empty() {
                true => Err(self.fail(CeremonyError {
                    error: CeremonyErrorType::MissingSubject,
                })),
                false => {
                    self.state = CeremonyState::Verified;

                    Ok(user_id)
                }
            },
            None => Err(self.fail(CeremonyError {
                error: CeremonyErrorType::MissingSubject,
            })),
        }
    }

    pub async fn run(
        &mut self,
        relying_party: &RelyingParty,
        authenticator: &AuthenticatorChannel,
    ) -> Result<String, CeremonyError> {
        let options = self.begin(relying_party).await?;
        let credential = self.get(authenticator, options).await?;
        let user_id = self.finish(relying_party, &credential).await?;

        Ok(user_id)
    }

    fn fail(&mut self, error: CeremonyError) -> CeremonyError {
        self.state = CeremonyState::Failed;

        error
    }
}
