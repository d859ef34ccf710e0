//! Job specification document accepted by the node's `/v2/specs` endpoint.
//!
//! A deployed spec has one `external` initiator, which hands the job to
//! the external initiator registered as [`EXTERNAL_INITIATOR_NAME`], and a
//! single `noop` task.

use serde::{Deserialize, Serialize};

/// Initiator type discriminator for external initiators.
pub const INITIATOR_TYPE_EXTERNAL: &str = "external";

/// Task type discriminator for the no-op adapter.
pub const TASK_TYPE_NOOP: &str = "noop";

/// Name the external initiator is registered under on the node.
pub const EXTERNAL_INITIATOR_NAME: &str = "mock-client";

/// Account the initiator subscribes on behalf of.
pub const ACCOUNT_ID: &str = "0x6ce96ae5c300096b09dbd4567b0574f6a1281ae0e5cfe4f6b0233d1821f6206b";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    pub initiators: Vec<Initiator>,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiator {
    #[serde(rename = "type")]
    pub kind: String,
    pub params: InitiatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatorParams {
    pub name: String,
    pub body: SubscriptionBody,
}

/// Payload the node forwards to the external initiator when the job is
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionBody {
    pub endpoint: String,
    pub addresses: Vec<String>,
    pub account_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "type")]
    pub kind: String,
}

impl JobSpec {
    /// Build the external-initiator job for `endpoint` watching `address`.
    ///
    /// Both values are used as given; the node owns validation.
    pub fn external(endpoint: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            initiators: vec![Initiator {
                kind: INITIATOR_TYPE_EXTERNAL.to_string(),
                params: InitiatorParams {
                    name: EXTERNAL_INITIATOR_NAME.to_string(),
                    body: SubscriptionBody {
                        endpoint: endpoint.into(),
                        addresses: vec![address.into()],
                        account_ids: vec![ACCOUNT_ID.to_string()],
                    },
                },
            }],
            tasks: vec![Task {
                kind: TASK_TYPE_NOOP.to_string(),
            }],
        }
    }
}
