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

//! Idempotent provisioning of a bucket and its folder markers.
//!
//! A folder marker is an empty object whose key ends in `/`. Object stores
//! have a flat namespace; consoles and query engines show such keys as
//! directories.
//!
//! ```no_run
//! use bucket_provision::provision::ensure_bucket_and_folders;
//! use bucket_provision::s3::ClientBuilder;
//! use bucket_provision::s3::creds::EnvProvider;
//!
//! # async fn run() -> Result<(), bucket_provision::s3::error::Error> {
//! let client = ClientBuilder::new("https://s3.us-west-2.amazonaws.com".parse()?)
//!     .provider(Some(EnvProvider::new()?))
//!     .build()?;
//! let report = ensure_bucket_and_folders(&client, "my-bucket", &["songs", "users"]).await?;
//! assert_eq!(report.folder_keys, ["songs/", "users/"]);
//! # Ok(())
//! # }
//! ```

mod client_handle;

use crate::s3::error::Error;
use crate::s3::types::BucketAcl;
use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, info};

pub const DEFAULT_BUCKET: &str = "udacity-sparkify-data-lake";
pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_FOLDERS: [&str; 5] = ["songs", "songplays", "time", "artists", "users"];

/// Appended to every folder name to form its marker key.
pub const FOLDER_SEPARATOR: char = '/';

/// Operations the provisioner needs from an object store.
#[async_trait]
pub trait StorageHandle: Send + Sync {
    /// Creates `bucket` in `region` with the canned `acl`.
    async fn create_bucket(&self, bucket: &str, acl: BucketAcl, region: &str) -> Result<(), Error>;

    /// Writes object `key` in `bucket`. `None` content writes an empty object.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Option<Bytes>,
        region: &str,
    ) -> Result<(), Error>;

    /// Returns a reference to an existing bucket for object creation.
    fn bucket<'a>(&'a self, name: &'a str, region: &'a str) -> BucketRef<'a, Self> {
        BucketRef {
            handle: self,
            name,
            region,
        }
    }
}

/// A bucket obtained through [`StorageHandle::bucket`].
#[derive(Debug)]
pub struct BucketRef<'a, H: ?Sized> {
    handle: &'a H,
    name: &'a str,
    region: &'a str,
}

impl<H: StorageHandle + ?Sized> BucketRef<'_, H> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn region(&self) -> &str {
        self.region
    }

    pub async fn put_object(&self, key: &str, content: Option<Bytes>) -> Result<(), Error> {
        self.handle
            .put_object(self.name, key, content, self.region)
            .await
    }
}

/// What to provision. [`Default`] yields the data-lake layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub bucket: String,
    pub region: String,
    pub folders: Vec<String>,
    pub acl: BucketAcl,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            folders: DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect(),
            acl: BucketAcl::Private,
        }
    }
}

impl ProvisionConfig {
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Replaces the folder list. Order is kept; duplicates are allowed.
    pub fn folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn acl(mut self, acl: BucketAcl) -> Self {
        self.acl = acl;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketStatus {
    Created,
    /// Creation was rejected with `BucketAlreadyOwnedByYou`.
    AlreadyOwned,
}

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionReport {
    pub bucket: String,
    pub region: String,
    pub bucket_status: BucketStatus,
    /// Marker keys in the order they were written.
    pub folder_keys: Vec<String>,
}

/// Returns the marker key for a folder name.
pub fn folder_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 1);
    key.push_str(name);
    key.push(FOLDER_SEPARATOR);
    key
}

/// Runs bucket creation then folder-marker creation against a storage handle.
#[derive(Debug)]
pub struct Provisioner<'a, H> {
    handle: &'a H,
    config: ProvisionConfig,
}

impl<'a, H: StorageHandle> Provisioner<'a, H> {
    pub fn new(handle: &'a H, config: ProvisionConfig) -> Self {
        Self { handle, config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Creates the bucket, tolerating one the caller already owns, then
    /// writes each folder marker in order.
    ///
    /// Stops at the first failure. Markers written before it are left in place.
    pub async fn run(&self) -> Result<ProvisionReport, Error> {
        let ProvisionConfig {
            bucket,
            region,
            folders,
            acl,
        } = &self.config;

        let bucket_status = match self.handle.create_bucket(bucket, *acl, region).await {
            Ok(()) => BucketStatus::Created,
            Err(e) if e.is_bucket_already_owned_by_you() => {
                info!("{bucket} already exists");
                BucketStatus::AlreadyOwned
            }
            Err(e) => return Err(e),
        };

        let bucket_ref = self.handle.bucket(bucket, region);
        let mut folder_keys = Vec::with_capacity(folders.len());
        for name in folders {
            let key = folder_key(name);
            debug!("creating folder marker {bucket}/{key}");
            bucket_ref.put_object(&key, None).await?;
            folder_keys.push(key);
        }
        info!("Keys created");

        Ok(ProvisionReport {
            bucket: bucket.clone(),
            region: region.clone(),
            bucket_status,
            folder_keys,
        })
    }
}

/// Ensures `bucket` exists with a private ACL in the default region and that
/// a marker `<name>/` exists for every name in `folders`.
pub async fn ensure_bucket_and_folders<H, S>(
    handle: &H,
    bucket: &str,
    folders: &[S],
) -> Result<ProvisionReport, Error>
where
    H: StorageHandle,
    S: AsRef<str>,
{
    let config = ProvisionConfig::default()
        .bucket(bucket)
        .folders(folders.iter().map(|f| f.as_ref().to_string()));
    Provisioner::new(handle, config).run().await
}
