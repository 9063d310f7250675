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

//! Error definitions for S3 operations

use crate::s3::error_response::{S3ErrorCode, S3ErrorResponse};
use thiserror::Error;

/// Errors detected locally, before or while building a request.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("{0}")]
    UrlBuildError(String),

    #[error("region must be {bucket_region}, but passed {region}")]
    RegionMismatch {
        bucket_region: String,
        region: String,
    },

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    #[error("missing bucket name")]
    MissingBucketName,

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("invalid header value: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Errors reported by the server.
#[derive(Debug, Error)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error(
        "invalid server response; status code: {http_status_code}, content-type: {content_type}: {message}"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationErr),

    #[error("{0}")]
    S3Server(#[from] S3ServerError),

    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Io(#[from] IoError),
}

impl Error {
    /// Returns the S3 error code when the server answered with an S3 error body.
    pub fn s3_error_code(&self) -> Option<&S3ErrorCode> {
        match self {
            Error::S3Server(S3ServerError::S3Error(e)) => Some(e.code()),
            _ => None,
        }
    }

    /// Returns true if the server rejected a bucket creation because the
    /// caller already owns a bucket of that name.
    pub fn is_bucket_already_owned_by_you(&self) -> bool {
        matches!(self.s3_error_code(), Some(S3ErrorCode::BucketAlreadyOwnedByYou))
    }
}

impl From<S3ErrorResponse> for Error {
    fn from(e: S3ErrorResponse) -> Self {
        Error::S3Server(S3ServerError::S3Error(Box::new(e)))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(IoError::IOError(e))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
