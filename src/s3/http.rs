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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{match_hostname, urlencode_object_key};
use http::Method;
use hyper::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref AWS_ENDPOINT_REGEX: Regex = Regex::new(r"\.amazonaws\.com(\.cn)?$").unwrap();
    static ref AWS_S3_ENDPOINT_REGEX: Regex =
        Regex::new(r"^s3(\.dualstack)?([.-]([a-z\d-]{1,63}))?\.amazonaws\.com(\.cn)?$").unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Returns true for any host under `amazonaws.com` or `amazonaws.com.cn`.
pub fn match_aws_endpoint(value: &str) -> bool {
    AWS_ENDPOINT_REGEX.is_match(&value.to_lowercase())
}

/// Amazon S3 specific part of a base URL.
#[derive(Clone, Debug, Default, PartialEq)]
struct AwsS3Host {
    dualstack: bool,
    china: bool,
}

impl AwsS3Host {
    fn host_for_region(&self, region: &str) -> String {
        format!(
            "s3.{}{region}.amazonaws.com{}",
            if self.dualstack { "dualstack." } else { "" },
            if self.china { ".cn" } else { "" }
        )
    }
}

/// Parses an Amazon S3 host name into its S3 specifics and the region it names, if any.
fn get_aws_info(host: &str) -> Result<Option<(AwsS3Host, String)>, ValidationErr> {
    let host = host.to_lowercase();
    if !match_hostname(&host) || !match_aws_endpoint(&host) {
        return Ok(None);
    }

    let caps = AWS_S3_ENDPOINT_REGEX
        .captures(&host)
        .ok_or_else(|| ValidationErr::UrlBuildError(format!("invalid Amazon AWS host {host}")))?;

    let aws = AwsS3Host {
        dualstack: caps.get(1).is_some(),
        china: caps.get(4).is_some(),
    };
    let region = match caps.get(3).map(|m| m.as_str()) {
        None => String::new(),
        Some("external-1") => "us-east-1".to_string(),
        Some(r) => r.to_string(),
    };

    if aws.china && region.is_empty() {
        return Err(ValidationErr::UrlBuildError(format!(
            "region missing in Amazon S3 China endpoint {host}"
        )));
    }

    Ok(Some((aws, region)))
}

#[derive(Clone, Debug)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    pub region: String,
    aws: Option<AwsS3Host>,
    pub virtual_style: bool,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_provision::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "s3.us-west-2.amazonaws.com".parse().unwrap();
    /// assert_eq!(base_url.region, "us-west-2");
    /// assert!(base_url.is_aws_host());
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// assert!(!base_url.https);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = url
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationErr::InvalidBaseUrl("valid host must be provided".into()))?;
        let host = match host.parse::<std::net::Ipv6Addr>() {
            Ok(_) => format!("[{host}]"),
            Err(_) => host.to_string(),
        };

        let port = match url.port_u16() {
            Some(443) if https => 0,
            Some(80) if !https => 0,
            Some(p) => p,
            None => 0,
        };

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let (aws, region) = match get_aws_info(&host)? {
            Some((aws, region)) => (Some(aws), region),
            None => (None, String::new()),
        };

        Ok(BaseUrl {
            https,
            virtual_style: aws.is_some(),
            host,
            port,
            region,
            aws,
        })
    }
}

impl BaseUrl {
    /// Returns the Amazon S3 endpoint of a region.
    pub fn aws_for_region(region: &str) -> Result<Self, ValidationErr> {
        format!("https://s3.{region}.amazonaws.com").parse()
    }

    /// Checks base URL is AWS host
    pub fn is_aws_host(&self) -> bool {
        self.aws.is_some()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds URL from base URL for given parameters for S3 operation
    pub fn build_url(
        &self,
        method: &Method,
        region: &str,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        if let Some(aws) = &self.aws {
            if !region.is_empty() {
                url.host = aws.host_for_region(region);
            }
        }

        let bucket: &str = match bucket_name {
            None => return Ok(url),
            Some(v) => v,
        };

        // CreateBucket requires path style on Amazon S3, and a bucket name
        // with '.' breaks TLS certificate validation in virtual host style.
        let enforce_path_style = (method == Method::PUT && object_name.is_none() && query.is_empty())
            || (bucket.contains('.') && self.https);

        let mut path = String::new();
        if enforce_path_style || !self.virtual_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            url.host = format!("{bucket}.{}", url.host);
        }

        if let Some(v) = object_name {
            if !v.starts_with('/') {
                path.push('/');
            }
            path.push_str(&urlencode_object_key(v));
        }

        if path.is_empty() {
            path.push('/');
        }
        url.path = path;

        Ok(url)
    }
}
