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

use crate::s3::client::Client;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Argument builder for the single-request [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation.
///
/// The whole body is sent at once; there is no multipart upload.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    object: String,
    #[builder(setter(into))]
    data: Bytes,
    #[builder(default, setter(into))]
    content_type: Option<String>,
}

/// Builder type for [`PutObject`] that is returned by [`Client::put_object`](crate::s3::client::Client::put_object).
pub type PutObjectBldr =
    PutObjectBuilder<((Client,), (), (), (), (String,), (String,), (Bytes,), ())>;

impl S3Api for PutObject {
    type S3Response = PutObjectResponse;
}

impl ToS3Request for PutObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.add(
                CONTENT_TYPE,
                self.content_type
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            );
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.data)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::client::ClientBuilder;

    fn client() -> Client {
        ClientBuilder::new("http://localhost:9000".parse().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_folder_marker_request() {
        let req = client()
            .put_object("my-bucket", "songs/", Bytes::new())
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.bucket.as_deref(), Some("my-bucket"));
        assert_eq!(req.object.as_deref(), Some("songs/"));
        assert_eq!(req.body.as_ref().map(Bytes::len), Some(0));
        assert!(req.region.is_none());
        assert_eq!(
            req.headers.get(CONTENT_TYPE).map(String::as_str),
            Some(DEFAULT_CONTENT_TYPE)
        );
    }

    #[test]
    fn test_content_type_and_region() {
        let req = client()
            .put_object("my-bucket", "notes.txt", "hello")
            .content_type(Some("text/plain".to_string()))
            .region(Some("us-west-2".to_string()))
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(
            req.headers.get(CONTENT_TYPE).map(String::as_str),
            Some("text/plain")
        );
        assert_eq!(req.region.as_deref(), Some("us-west-2"));
        assert_eq!(req.body.unwrap(), Bytes::from_static(b"hello"));
    }

    #[test]
    fn test_extra_content_type_header_wins() {
        let mut extra = Multimap::new();
        extra.add(CONTENT_TYPE, "application/x-directory");
        let req = client()
            .put_object("my-bucket", "songs/", Bytes::new())
            .extra_headers(Some(extra))
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(
            req.headers.get_vec(CONTENT_TYPE).map(Vec::len),
            Some(1)
        );
        assert_eq!(
            req.headers.get(CONTENT_TYPE).map(String::as_str),
            Some("application/x-directory")
        );
    }

    #[test]
    fn test_empty_object_name_is_rejected() {
        let err = client()
            .put_object("my-bucket", "", Bytes::new())
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidObjectName(_)));
    }

    #[test]
    fn test_too_long_object_name_is_rejected() {
        let key = format!("{}/", "a".repeat(1024));
        let err = client()
            .put_object("my-bucket", key, Bytes::new())
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidObjectName(_)));
    }
}
