use serde::{Deserialize, Serialize};

///
/// Kinds of admin notifications the backend emits.
///
/// Only account verification carries aggregation logic. Kinds this
/// service does not know yet still deserialize ([NotificationKind::Other])
/// so a history fetch never fails on a newer backend.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AccountVerification,
    #[serde(untagged)]
    Other(String),
}
