use super::{NotificationKind, VerificationStatus};
use serde::Deserialize;
use time::OffsetDateTime;

///
/// One item of the admin notification history returned by the backend.
///
/// The backend spells the identifier either `id` or `_id` depending on
/// which layer produced the document. Both map onto [Self::id] here,
/// nothing downstream ever looks at an alternate field.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default)]
    pub verification_status: Option<VerificationStatus>,
    pub message: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
