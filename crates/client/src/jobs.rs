//! Job specification submission.

use ei_core::job_spec::JobSpec;

use crate::api::{self, ChainlinkApiError, SpecResponse, SPECS_PATH};
use crate::session::Session;
use crate::ClientError;

/// Create an external-initiator job on the node and return its id.
///
/// Builds the spec from `endpoint` and `address` as given and sends a
/// `POST /v2/specs` request through `session`. A failed submission is
/// logged before being returned as [`ClientError::CreateJob`].
pub async fn submit_job(
    session: &Session,
    endpoint: &str,
    address: &str,
) -> Result<String, ClientError> {
    let spec = JobSpec::external(endpoint, address);

    match post_spec(session, &spec).await {
        Ok(response) => {
            tracing::info!(job_id = %response.data.id, endpoint, address, "Job spec created");
            Ok(response.data.id)
        }
        Err(e) => {
            tracing::error!(error = %e, endpoint, address, "Job spec submission failed");
            Err(ClientError::CreateJob(e))
        }
    }
}

async fn post_spec(session: &Session, spec: &JobSpec) -> Result<SpecResponse, ChainlinkApiError> {
    let url = api::resolve(session.base_url(), SPECS_PATH)?;
    tracing::debug!(url = %url, "Submitting job spec");

    let response = session.client().post(url).json(spec).send().await?;

    api::parse_response(response).await
}
