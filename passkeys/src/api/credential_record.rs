use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyRecord {
    pub id: String,
    pub user_id: String,
    pub credential_id: String,
    pub public_key: String,
    pub attestation_type: String,
    pub transport: Option<Vec<String>>,
    pub flags: CredentialFlags,
    pub authenticator: Authenticator,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CredentialFlags {
    #[serde(rename = "userPresent")]
    pub user_present: bool,
    #[serde(rename = "userVerified")]
    pub user_verified: bool,
    #[serde(rename = "backupEligible")]
    pub backup_eligible: bool,
    #[serde(rename = "backupState")]
    pub backup_state: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Authenticator {
    #[serde(rename = "AAGUID")]
    pub aaguid: String,
    #[serde(rename = "signCount")]
    pub sign_count: u32,
    #[serde(rename = "cloneWarning")]
    pub clone_warning: bool,
    pub attachment: Option<String>,
}
