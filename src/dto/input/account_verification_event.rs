use super::VerificationStatus;
use serde::Deserialize;

///
/// Payload of an `accountVerification` push event.
///
/// The push layer spells the identifier `notificationId` while the
/// history endpoint uses `id`; the alias normalizes both to [Self::id].
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerificationEvent {
    #[serde(alias = "notificationId")]
    pub id: String,
    pub seller_id: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub message: Option<String>,
}
