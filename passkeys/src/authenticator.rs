use tokio::sync::{mpsc, oneshot};

use crate::api::assertion_generation_options::DecodedRequestOptions;
use crate::api::credential_creation_options::DecodedCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::error::{CeremonyError, CeremonyErrorType};

#[derive(Debug)]
pub enum Request {
    CredentialsCreate(DecodedCreationOptions),
    CredentialsGet(DecodedRequestOptions),
}

#[derive(Debug)]
pub enum Response {
    PublicKeyCredential(PublicKeyCredential),
    Aborted,
}

#[derive(Clone)]
pub struct AuthenticatorChannel {
    request: mpsc::Sender<(Request, oneshot::Sender<Response>)>,
}

impl AuthenticatorChannel {
    pub async fn init() -> (
        AuthenticatorChannel,
        mpsc::Receiver<(Request, oneshot::Sender<Response>)>,
    ) {
        let (request, receiver) = mpsc::channel::<(Request, oneshot::Sender<Response>)>(64);

        (AuthenticatorChannel { request }, receiver)
    }

    pub async fn credentials_create(
        &self,
        options: DecodedCreationOptions,
    ) -> Result<PublicKeyCredential, CeremonyError> {
        let (request, response) = oneshot::channel();
        let error = CeremonyError {
            error: CeremonyErrorType::CeremonyAborted,
        };

        if let Ok(()) = self
            .request
            .send((Request::CredentialsCreate(options), request))
            .await
        {
            match response.await {
                Ok(Response::PublicKeyCredential(credential)) => Ok(credential),
                Ok(Response::Aborted) => Err(error),
                Err(_) => Err(error),
            }
        } else {
            Err(error)
        }
    }

    pub async fn credentials_get(
        &self,
        options: DecodedRequestOptions,
    ) -> Result<PublicKeyCredential, CeremonyError> {
        let (request, response) = oneshot::channel();
        let error = CeremonyError {
            error: CeremonyErrorType::CeremonyAborted,
        };

        if let Ok(()) = self
            .request
            .send((Request::CredentialsGet(options), request))
            .await
        {
            match response.await {
                Ok(Response::PublicKeyCredential(credential)) => Ok(credential),
                Ok(Response::Aborted) => Err(error),
                Err(_) => Err(error),
            }
        } else {
            Err(error)
        }
    }
}
