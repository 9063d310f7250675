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

use crate::s3::client::{Client, DEFAULT_REGION};
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{BucketAcl, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_region};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`Client::create_bucket`](crate::s3::client::Client::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(default)]
    acl: BucketAcl,
    #[builder(default = false)]
    object_lock: bool,
}

/// Builder type for [`CreateBucket`] that is returned by [`Client::create_bucket`](crate::s3::client::Client::create_bucket).
///
/// This type alias simplifies the complex generic signature generated by the `typed_builder` crate.
pub type CreateBucketBldr = CreateBucketBuilder<((Client,), (), (), (), (String,), (), ())>;

impl S3Api for CreateBucket {
    type S3Response = CreateBucketResponse;
}

/// Returns the `CreateBucketConfiguration` document for a region, or `None`
/// for `us-east-1`, which S3 rejects as an explicit location constraint.
fn location_constraint(region: &str) -> Option<Bytes> {
    if region == DEFAULT_REGION {
        return None;
    }
    Some(Bytes::from(format!(
        "<CreateBucketConfiguration><LocationConstraint>{region}</LocationConstraint></CreateBucketConfiguration>"
    )))
}

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let region: String = match (self.region, self.client.get_region_from_url()) {
            (None, None) => DEFAULT_REGION.to_string(),
            (Some(r), None) => r,
            (None, Some(v)) => v.to_string(),
            (Some(r1), Some(r2)) if r1 == r2 => r1,
            (Some(r1), Some(r2)) => {
                return Err(ValidationErr::RegionMismatch {
                    bucket_region: r2.to_string(),
                    region: r1,
                });
            }
        };
        check_region(&region)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(X_AMZ_ACL, self.acl.as_str());
        if self.object_lock {
            headers.add(X_AMZ_BUCKET_OBJECT_LOCK_ENABLED, "true");
        }

        let body: Option<Bytes> = location_constraint(&region);

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(region)
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(body)
            .build())
    }
}
