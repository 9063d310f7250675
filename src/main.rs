// bucket-provision: S3 bucket and folder-marker provisioning
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bucket_provision::provision::{ProvisionConfig, Provisioner};
use bucket_provision::s3::ClientBuilder;
use bucket_provision::s3::creds::EnvProvider;
use bucket_provision::s3::error::Error;
use bucket_provision::s3::http::BaseUrl;
use std::process::ExitCode;

/// Overrides the endpoint, e.g. `http://localhost:9000` for a local server.
const ENV_S3_ENDPOINT: &str = "S3_ENDPOINT";

async fn provision(config: ProvisionConfig) -> Result<(), Error> {
    let base_url: BaseUrl = match std::env::var(ENV_S3_ENDPOINT) {
        Ok(v) if !v.is_empty() => v.parse()?,
        _ => BaseUrl::aws_for_region(&config.region)?,
    };

    let client = ClientBuilder::new(base_url)
        .provider(Some(EnvProvider::new()?))
        .build()?;

    let report = Provisioner::new(&client, config).run().await?;
    log::debug!("{report:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match provision(ProvisionConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
