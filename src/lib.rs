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

//! # bucket-provision
//!
//! Provisions an S3 bucket and a fixed set of folder markers inside it.
//!
//! The [`provision`] module holds the provisioning logic, written against the
//! [`provision::StorageHandle`] trait. The [`s3`] module is a small async S3
//! client that implements it: each operation has a request builder
//! ([`s3::builders::CreateBucket`], [`s3::builders::PutObject`]) executed with
//! [`send`](crate::s3::types::S3Api::send), returning a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bucket_provision::provision::{ProvisionConfig, Provisioner};
//! use bucket_provision::s3::ClientBuilder;
//! use bucket_provision::s3::creds::EnvProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = ClientBuilder::new("https://s3.us-west-2.amazonaws.com".parse()?)
//!         .provider(Some(EnvProvider::new()?))
//!         .build()?;
//!
//!     let report = Provisioner::new(&client, ProvisionConfig::default())
//!         .run()
//!         .await?;
//!     println!("{:?}", report.folder_keys);
//!     Ok(())
//! }
//! ```

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod provision;
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
