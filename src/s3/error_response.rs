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

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the server in the `<Code>` element of an error body.
///
/// Only the codes this crate reacts to, or maps from bodiless responses, have
/// their own variant. Everything else is kept verbatim in `OtherError`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum S3ErrorCode {
    #[default]
    NoError,
    /// Your previous request to create the named bucket succeeded and you already own it
    BucketAlreadyOwnedByYou,
    /// The requested bucket name is not available; another account owns it
    BucketAlreadyExists,
    /// The specified bucket is not valid
    InvalidBucketName,
    /// The specified location constraint is not valid
    InvalidLocationConstraint,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The specified key does not exist
    NoSuchKey,
    AccessDenied,
    /// The specified method is not allowed against this resource
    MethodNotAllowed,
    ResourceNotFound,
    ResourceConflict,
    /// The request signature we calculated does not match the signature you provided
    SignatureDoesNotMatch,
    /// The authorization header is malformed; the region is wrong
    AuthorizationHeaderMalformed,
    InternalError,
    PermanentRedirect,
    Redirect,
    BadRequest,

    /// Catch-all for any error code not explicitly defined
    OtherError(String),
}

#[allow(dead_code)]
const ALL_S3_ERROR_CODES: &[S3ErrorCode] = &[
    S3ErrorCode::NoError,
    S3ErrorCode::BucketAlreadyOwnedByYou,
    S3ErrorCode::BucketAlreadyExists,
    S3ErrorCode::InvalidBucketName,
    S3ErrorCode::InvalidLocationConstraint,
    S3ErrorCode::NoSuchBucket,
    S3ErrorCode::NoSuchKey,
    S3ErrorCode::AccessDenied,
    S3ErrorCode::MethodNotAllowed,
    S3ErrorCode::ResourceNotFound,
    S3ErrorCode::ResourceConflict,
    S3ErrorCode::SignatureDoesNotMatch,
    S3ErrorCode::AuthorizationHeaderMalformed,
    S3ErrorCode::InternalError,
    S3ErrorCode::PermanentRedirect,
    S3ErrorCode::Redirect,
    S3ErrorCode::BadRequest,
];

impl FromStr for S3ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        match s.to_lowercase().as_str() {
            "noerror" => Ok(S3ErrorCode::NoError),
            "bucketalreadyownedbyyou" => Ok(S3ErrorCode::BucketAlreadyOwnedByYou),
            "bucketalreadyexists" => Ok(S3ErrorCode::BucketAlreadyExists),
            "invalidbucketname" => Ok(S3ErrorCode::InvalidBucketName),
            "invalidlocationconstraint" => Ok(S3ErrorCode::InvalidLocationConstraint),
            "nosuchbucket" => Ok(S3ErrorCode::NoSuchBucket),
            "nosuchkey" => Ok(S3ErrorCode::NoSuchKey),
            "accessdenied" => Ok(S3ErrorCode::AccessDenied),
            "methodnotallowed" => Ok(S3ErrorCode::MethodNotAllowed),
            "resourcenotfound" => Ok(S3ErrorCode::ResourceNotFound),
            "resourceconflict" => Ok(S3ErrorCode::ResourceConflict),
            "signaturedoesnotmatch" => Ok(S3ErrorCode::SignatureDoesNotMatch),
            "authorizationheadermalformed" => Ok(S3ErrorCode::AuthorizationHeaderMalformed),
            "internalerror" => Ok(S3ErrorCode::InternalError),
            "permanentredirect" => Ok(S3ErrorCode::PermanentRedirect),
            "redirect" => Ok(S3ErrorCode::Redirect),
            "badrequest" => Ok(S3ErrorCode::BadRequest),

            _ => Ok(S3ErrorCode::OtherError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            S3ErrorCode::NoError => write!(f, "NoError"),
            S3ErrorCode::BucketAlreadyOwnedByYou => write!(f, "BucketAlreadyOwnedByYou"),
            S3ErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            S3ErrorCode::InvalidBucketName => write!(f, "InvalidBucketName"),
            S3ErrorCode::InvalidLocationConstraint => write!(f, "InvalidLocationConstraint"),
            S3ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            S3ErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            S3ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            S3ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            S3ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            S3ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            S3ErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            S3ErrorCode::AuthorizationHeaderMalformed => {
                write!(f, "AuthorizationHeaderMalformed")
            }
            S3ErrorCode::InternalError => write!(f, "InternalError"),
            S3ErrorCode::PermanentRedirect => write!(f, "PermanentRedirect"),
            S3ErrorCode::Redirect => write!(f, "Redirect"),
            S3ErrorCode::BadRequest => write!(f, "BadRequest"),
            S3ErrorCode::OtherError(code) => write!(f, "{code}"),
        }
    }
}

/// Typed error body returned by the server for a failed operation.
#[derive(Clone, Debug)]
pub struct S3ErrorResponse {
    code: S3ErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn new(
        headers: HeaderMap,
        code: S3ErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
        object_name: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
            object_name,
        }
    }

    /// Parses an `<Error>` XML document as sent by S3-compatible servers.
    pub fn new_from_body(body: Bytes, headers: HeaderMap) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        let code = get_text_default(&root, "Code");
        Ok(Self {
            headers,
            code: code.parse().unwrap_or_default(),
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn code(&self) -> &S3ErrorCode {
        &self.code
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
    pub fn object_name(&self) -> &Option<String> {
        &self.object_name
    }
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S3 operation failed; code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}, object_name: {}",
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
            self.object_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for S3ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in ALL_S3_ERROR_CODES {
            let s = code.to_string();
            let parsed: S3ErrorCode = s.parse().unwrap();
            assert_eq!(parsed, *code, "code {code} -> '{s}' -> {parsed}");
        }
    }

    #[test]
    fn test_error_code_parse_is_case_insensitive() {
        let code: S3ErrorCode = "BUCKETALREADYOWNEDBYYOU".parse().unwrap();
        assert_eq!(code, S3ErrorCode::BucketAlreadyOwnedByYou);
    }

    #[test]
    fn test_unknown_code_is_kept_verbatim() {
        let code: S3ErrorCode = "SlowDown".parse().unwrap();
        assert_eq!(code, S3ErrorCode::OtherError("SlowDown".into()));
        assert_eq!(code.to_string(), "SlowDown");
    }

    #[test]
    fn test_parse_aws_error_body() {
        let body = Bytes::from_static(
            br#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>BucketAlreadyOwnedByYou</Code>
  <Message>Your previous request to create the named bucket succeeded and you already own it.</Message>
  <BucketName>udacity-sparkify-data-lake</BucketName>
  <RequestId>4442587FB7D0A2F9</RequestId>
  <HostId>Yy9xQ2m7mJ3qLw==</HostId>
</Error>"#,
        );
        let resp = S3ErrorResponse::new_from_body(body, HeaderMap::new()).unwrap();
        assert_eq!(resp.code(), &S3ErrorCode::BucketAlreadyOwnedByYou);
        assert_eq!(
            resp.bucket_name().as_deref(),
            Some("udacity-sparkify-data-lake")
        );
        assert_eq!(resp.request_id(), "4442587FB7D0A2F9");
        assert_eq!(resp.host_id(), "Yy9xQ2m7mJ3qLw==");
        assert!(resp.object_name().is_none());
        assert!(resp.resource().is_empty());
    }

    #[test]
    fn test_parse_garbage_body_fails() {
        let body = Bytes::from_static(b"not xml at all");
        assert!(S3ErrorResponse::new_from_body(body, HeaderMap::new()).is_err());
    }
}
