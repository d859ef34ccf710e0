//! `create-job` -- deploy an external-initiator job to a Chainlink node.
//!
//! Logs in to the node, submits a job spec wired to the `mock-client`
//! external initiator, and prints the new job's id.
//!
//! ```text
//! create-job <endpoint> <address>
//! ```
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                | Description                  |
//! |------------------------|----------|------------------------|------------------------------|
//! | `CHAINLINK_URL`        | yes      | --                     | Node base URL, e.g. `http://localhost:6688` |
//! | `CHAINLINK_EMAIL`      | no       | `notreal@fakeemail.ch` | Login e-mail                 |
//! | `CHAINLINK_PASSWORD`   | no       | `twochains`            | Login password               |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                   | Per-request HTTP timeout     |

use std::process::ExitCode;

use ei_core::config::{ClientConfig, JobArgs};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the job id line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_job=info,ei_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let args = match JobArgs::from_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            tracing::error!(error = %e, "Invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        node = %config.base_url,
        endpoint = %args.endpoint,
        address = %args.address,
        "Deploying job",
    );

    match ei_client::run(&config, &args).await {
        Ok(job_id) => {
            println!("Deployed Job at: {job_id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Job deployment failed");
            ExitCode::FAILURE
        }
    }
}
