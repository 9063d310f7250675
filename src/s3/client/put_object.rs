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

use super::Client;
use crate::s3::builders::{PutObject, PutObjectBldr};
use bytes::Bytes;

impl Client {
    /// Creates a [`PutObject`] request builder that uploads `data` in a single request.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::s3::response::PutObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bucket_provision::s3::Client;
    /// use bucket_provision::s3::response::PutObjectResponse;
    /// use bucket_provision::s3::response_traits::HasEtagFromHeaders;
    /// use bucket_provision::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client: Client = todo!(); // configure your client here
    ///     let resp: PutObjectResponse = client
    ///         .put_object("bucket-name", "songs/", bytes::Bytes::new())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("Created folder marker, etag '{}'", resp.etag());
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, D: Into<Bytes>>(
        &self,
        bucket: S1,
        object: S2,
        data: D,
    ) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .data(data)
    }
}
