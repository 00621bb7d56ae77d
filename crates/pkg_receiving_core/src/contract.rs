use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_READY_FOR_TQ: &str = "readyForTQ";
pub const STATUS_RECEIVE_UNAVAILABLE: &str = "receiveUnavailable";

/// A package record as held by the external record store, keyed uniquely
/// by `packageId`.
///
/// The receiving service only ever writes `status` and `receiveDate`.
/// Every other attribute is owned by the store and carried through the
/// flattened map untouched. `status` is an open set of strings; the two
/// constants above are the only values this service writes, but records
/// may arrive holding other external states.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageRecord {
    #[serde(rename = "packageId")]
    pub package_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "receiveDate", default, skip_serializing_if = "Option::is_none")]
    pub receive_date: Option<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// The two fields a status update overwrites. Everything else on the
/// record is left as-is by the store contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: String,
    #[serde(rename = "receiveDate")]
    pub receive_date: String,
}

/// Outcome of the validity predicate over a fetched record.
///
/// A valid record moves to `readyForTQ` and the caller is answered with
/// 200; an invalid one moves to `receiveUnavailable` and is answered
/// with 400. Both branches stamp `receiveDate` with the invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    ReadyForTq,
    ReceiveUnavailable,
}

impl StatusTransition {
    pub fn from_validity(valid: bool) -> Self {
        if valid {
            StatusTransition::ReadyForTq
        } else {
            StatusTransition::ReceiveUnavailable
        }
    }

    pub fn target_status(&self) -> &'static str {
        match self {
            StatusTransition::ReadyForTq => STATUS_READY_FOR_TQ,
            StatusTransition::ReceiveUnavailable => STATUS_RECEIVE_UNAVAILABLE,
        }
    }

    pub fn response_status_code(&self) -> u16 {
        match self {
            StatusTransition::ReadyForTq => 200,
            StatusTransition::ReceiveUnavailable => 400,
        }
    }

    pub fn response_body(&self) -> String {
        format!("Package status updated to {}", self.target_status())
    }

    pub fn into_update(self, receive_date: impl Into<String>) -> StatusUpdate {
        StatusUpdate {
            status: self.target_status().to_string(),
            receive_date: receive_date.into(),
        }
    }
}
