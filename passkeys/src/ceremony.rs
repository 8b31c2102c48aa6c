pub mod authentication;
pub mod registration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CeremonyState {
    Idle,
    OptionsRequested,
    OptionsReceived,
    CredentialCreated,
    Verified,
    Failed,
}

impl CeremonyState {
    pub async fn in_flight(&self) -> bool {
        match self {
            CeremonyState::OptionsRequested
            | CeremonyState::OptionsReceived
            | CeremonyState::CredentialCreated => true,
            CeremonyState::Idle | CeremonyState::Verified | CeremonyState::Failed => false,
        }
    }
}
