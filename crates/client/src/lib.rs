//! Chainlink node REST client for deploying external-initiator jobs.
//!
//! A run is two requests: [`session::establish_session`] logs in and
//! keeps the session cookie, then [`jobs::submit_job`] posts the job
//! spec through that session.

pub mod api;
pub mod jobs;
pub mod session;

use ei_core::config::{ClientConfig, JobArgs};

use crate::api::ChainlinkApiError;

/// Errors from a deployment run, tagged with the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Error establishing session: {0}")]
    Session(ChainlinkApiError),

    #[error("Error creating Job {0}")]
    CreateJob(ChainlinkApiError),
}

/// Log in, submit the job spec for `args`, and return the new job id.
pub async fn run(config: &ClientConfig, args: &JobArgs) -> Result<String, ClientError> {
    let session = session::establish_session(config)
        .await
        .map_err(ClientError::Session)?;

    jobs::submit_job(&session, &args.endpoint, &args.address).await
}
