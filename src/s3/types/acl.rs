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

use std::fmt;
use std::str::FromStr;

/// Canned ACL applied to a bucket at creation time, sent as `x-amz-acl`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BucketAcl {
    /// Owner gets full control; nobody else has access.
    #[default]
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
}

impl BucketAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketAcl::Private => "private",
            BucketAcl::PublicRead => "public-read",
            BucketAcl::PublicReadWrite => "public-read-write",
            BucketAcl::AuthenticatedRead => "authenticated-read",
        }
    }
}

impl fmt::Display for BucketAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketAcl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(BucketAcl::Private),
            "public-read" => Ok(BucketAcl::PublicRead),
            "public-read-write" => Ok(BucketAcl::PublicReadWrite),
            "authenticated-read" => Ok(BucketAcl::AuthenticatedRead),
            _ => Err(format!("unknown canned ACL '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_header_values() {
        for acl in [
            BucketAcl::Private,
            BucketAcl::PublicRead,
            BucketAcl::PublicReadWrite,
            BucketAcl::AuthenticatedRead,
        ] {
            assert_eq!(acl.to_string().parse::<BucketAcl>().unwrap(), acl);
        }
        assert_eq!(BucketAcl::default().as_str(), "private");
        assert!("PRIVATE".parse::<BucketAcl>().is_err());
    }
}
