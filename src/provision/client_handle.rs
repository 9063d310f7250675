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

use super::StorageHandle;
use crate::s3::Client;
use crate::s3::error::Error;
use crate::s3::response::{CreateBucketResponse, PutObjectResponse};
use crate::s3::response_traits::{HasEtagFromHeaders, HasRegion};
use crate::s3::types::{BucketAcl, S3Api};
use async_trait::async_trait;
use bytes::Bytes;
use log::debug;

#[async_trait]
impl StorageHandle for Client {
    async fn create_bucket(&self, bucket: &str, acl: BucketAcl, region: &str) -> Result<(), Error> {
        let resp: CreateBucketResponse = Client::create_bucket(self, bucket)
            .region(Some(region.to_string()))
            .acl(acl)
            .build()
            .send()
            .await?;
        debug!("created bucket {bucket} in {}", resp.region());
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Option<Bytes>,
        region: &str,
    ) -> Result<(), Error> {
        let resp: PutObjectResponse = Client::put_object(self, bucket, key, content.unwrap_or_default())
            .region(Some(region.to_string()))
            .build()
            .send()
            .await?;
        debug!("put {bucket}/{key}, etag '{}'", resp.etag());
        Ok(())
    }
}
