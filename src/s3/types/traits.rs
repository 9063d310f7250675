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

//! Core traits for S3 request and response handling.

use super::s3_request::S3Request;
use crate::s3::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Converts a request builder into a concrete [`S3Request`].
///
/// Validation of builder arguments (bucket and object names, region) happens
/// here, so an invalid request fails before anything is sent.
pub trait ToS3Request: Sized {
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

/// Converts the HTTP response of an executed [`S3Request`] into a typed response.
#[async_trait]
pub trait FromS3Response: Sized {
    /// `response` is the outcome of [`S3Request::execute`]; error responses
    /// have already been turned into [`Error`] values.
    async fn from_s3response(
        s3req: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all request builders.
///
/// ```no_run
/// use bucket_provision::s3::Client;
/// use bucket_provision::s3::types::{BucketAcl, S3Api};
///
/// # async fn run(client: Client) -> Result<(), bucket_provision::s3::error::Error> {
/// client
///     .create_bucket("my-bucket")
///     .region(Some("us-west-2".to_string()))
///     .acl(BucketAcl::Private)
///     .build()
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the request and returns the typed response.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
