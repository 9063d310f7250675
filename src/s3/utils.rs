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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Hex encoded SHA256 of an empty payload.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Maximum length in bytes of an object key.
pub const MAX_OBJECT_KEY_LEN: usize = 1024;

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

// Characters to escape in query strings, per RFC 3986: everything except the
// unreserved set '-', '_', '.', '~' and alphanumerics.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ESCAPE.remove(b'/');

/// Percent-encodes a query string key or value.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Percent-encodes an object key for use in a URL path, keeping '/' as is.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    !value.split('.').any(|token| {
        token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
    })
}

/// Validates a region name such as `us-west-2`.
pub fn check_region(region: &str) -> Result<(), ValidationErr> {
    lazy_static! {
        static ref REGION_REGEX: Regex = Regex::new(r"^[a-z\d][a-z\d-]{0,61}[a-z\d]$").unwrap();
    }

    if REGION_REGEX.is_match(region) {
        Ok(())
    } else {
        Err(ValidationErr::InvalidRegion(region.to_string()))
    }
}

/// Validates given bucket name
pub fn check_bucket_name(bucket_name: impl AsRef<str>, strict: bool) -> Result<(), ValidationErr> {
    let bucket_name: &str = bucket_name.as_ref();
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }

    if bucket_name.len() < 3 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be less than 3 characters"
        )));
    }

    if bucket_name.len() > 63 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be greater than 63 characters"
        )));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be an IP address"
        )));
    }

    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') contains invalid successive characters '..', '.-' or '-.'",
        )));
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return Err(ValidationErr::InvalidBucketName(format!(
                "bucket name ('{bucket_name}') does not follow S3 standards strictly"
            )));
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') does not follow S3 standards"
        )));
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: impl AsRef<str>) -> Result<(), ValidationErr> {
    let name: &str = object_name.as_ref();
    match name.len() {
        0 => Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        )),
        n if n > MAX_OBJECT_KEY_LEN => Err(ValidationErr::InvalidObjectName(format!(
            "Object name ('{name}') cannot be greater than {MAX_OBJECT_KEY_LEN} bytes"
        ))),
        _ => Ok(()),
    }
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_sha256_of_empty_payload() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_dates() {
        let t = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(to_signer_date(t), "20130524");
        assert_eq!(to_amz_date(t), "20130524T000000Z");
    }

    #[test]
    fn test_urlencode_object_key_keeps_slash() {
        assert_eq!(urlencode_object_key("songs/"), "songs/");
        assert_eq!(urlencode_object_key("a b/c+d"), "a%20b/c%2Bd");
        assert_eq!(url_encode("a/b"), "a%2Fb");
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("udacity-sparkify-data-lake", true).is_ok());
        assert!(check_bucket_name("my-bucket", true).is_ok());
        assert!(check_bucket_name("", true).is_err());
        assert!(check_bucket_name("ab", true).is_err());
        assert!(check_bucket_name("a".repeat(64), true).is_err());
        assert!(check_bucket_name("192.168.1.1", true).is_err());
        assert!(check_bucket_name("my..bucket", true).is_err());
        assert!(check_bucket_name("my-.bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", false).is_ok());
        assert!(check_bucket_name("-bucket", false).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("songs/").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name("k".repeat(MAX_OBJECT_KEY_LEN)).is_ok());
        assert!(check_object_name("k".repeat(MAX_OBJECT_KEY_LEN + 1)).is_err());
    }

    #[test]
    fn test_check_region() {
        assert!(check_region("us-west-2").is_ok());
        assert!(check_region("us-east-1").is_ok());
        assert!(check_region("").is_err());
        assert!(check_region("US-WEST-2").is_err());
        assert!(check_region("-us").is_err());
    }

    #[test]
    fn test_match_hostname() {
        assert!(match_hostname("s3.us-west-2.amazonaws.com"));
        assert!(match_hostname("localhost"));
        assert!(!match_hostname("-bad.example.com"));
        assert!(!match_hostname("bad_.example.com"));
    }

    quickcheck! {
        fn prop_object_key_encoding_roundtrips(key: String) -> bool {
            let encoded = urlencode_object_key(&key);
            percent_decode_str(&encoded).decode_utf8().map(|s| s == key).unwrap_or(false)
        }

        fn prop_bucket_name_check_never_panics(name: String) -> bool {
            let _ = check_bucket_name(&name, true);
            let _ = check_bucket_name(&name, false);
            true
        }
    }
}
