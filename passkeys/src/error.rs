use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CeremonyError {
    pub error: CeremonyErrorType,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CeremonyErrorType {
    ValidationError,
    NetworkError,
    DecodeError,
    FormatError,
    CeremonyAborted,
    ServerRejected,
    MissingSubject,
}

impl std::fmt::Display for CeremonyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error {
            CeremonyErrorType::ValidationError => write!(f, "ValidationError"),
            CeremonyErrorType::NetworkError => write!(f, "NetworkError"),
            CeremonyErrorType::DecodeError => write!(f, "DecodeError"),
            CeremonyErrorType::FormatError => write!(f, "FormatError"),
            CeremonyErrorType::CeremonyAborted => write!(f, "CeremonyAborted"),
            CeremonyErrorType::ServerRejected => write!(f, "ServerRejected"),
            CeremonyErrorType::MissingSubject => write!(f, "MissingSubject"),
        }
    }
}

impl std::error::Error for CeremonyError {}
