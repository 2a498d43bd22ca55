//! UUID generation for the UUID generator tool (v1, v4 and v7).

use std::str::FromStr;
use std::sync::OnceLock;

use uuid::{Builder, ContextV1, Timestamp, Uuid};

use crate::error::{Result, ToolError};

pub const MAX_UUIDS: usize = 100;

static NODE_ID: OnceLock<[u8; 6]> = OnceLock::new();
static V1_CONTEXT: OnceLock<ContextV1> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidVersion {
    V1,
    V4,
    V7,
}

impl FromStr for UuidVersion {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(UuidVersion::V1),
            "v4" | "4" | "" => Ok(UuidVersion::V4),
            "v7" | "7" => Ok(UuidVersion::V7),
            other => Err(ToolError::validation(format!("unsupported UUID version {other}"))),
        }
    }
}

/// Generates `count` UUIDs of the requested version.
pub fn generate(version: UuidVersion, count: usize) -> Result<Vec<String>> {
    if count == 0 || count > MAX_UUIDS {
        return Err(ToolError::validation(format!(
            "count must be between 1 and {MAX_UUIDS}"
        )));
    }
    let uuids = (0..count)
        .map(|_| match version {
            UuidVersion::V1 => uuid_v1(),
            UuidVersion::V4 => uuid_v4(),
            UuidVersion::V7 => uuid_v7(),
        })
        .map(|uuid| uuid.to_string())
        .collect();
    Ok(uuids)
}

fn node_id() -> &'static [u8; 6] {
    NODE_ID.get_or_init(|| {
        let mut bytes = [0u8; 6];
        fill_random(&mut bytes);
        // Multicast bit marks a random node id.
        bytes[0] |= 0x01;
        bytes
    })
}

fn context_v1() -> &'static ContextV1 {
    V1_CONTEXT.get_or_init(|| {
        let mut seed_bytes = [0u8; 2];
        fill_random(&mut seed_bytes);
        ContextV1::new(u16::from_ne_bytes(seed_bytes))
    })
}

fn uuid_v1() -> Uuid {
    let millis = now_millis();
    let nanos = ((millis % 1000) * 1_000_000) as u32;
    let ts = Timestamp::from_unix(context_v1(), millis / 1000, nanos);
    Uuid::new_v1(ts, node_id())
}

fn uuid_v4() -> Uuid {
    let mut bytes = [0u8; 16];
    fill_random(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

fn uuid_v7() -> Uuid {
    let mut random = [0u8; 10];
    fill_random(&mut random);
    Builder::from_unix_timestamp_millis(now_millis(), &random).into_uuid()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

fn fill_random(buf: &mut [u8]) {
    getrandom::fill(buf).expect("randomness available");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_stamped() {
        for (version, expected) in [
            (UuidVersion::V1, 1),
            (UuidVersion::V4, 4),
            (UuidVersion::V7, 7),
        ] {
            let ids = generate(version, 3).unwrap();
            assert_eq!(ids.len(), 3);
            for id in ids {
                let parsed = Uuid::parse_str(&id).unwrap();
                assert_eq!(parsed.get_version_num(), expected, "{id}");
            }
        }
    }

    #[test]
    fn v4_values_are_distinct() {
        let ids = generate(UuidVersion::V4, 50).unwrap();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn count_is_bounded() {
        assert!(generate(UuidVersion::V4, 0).is_err());
        assert!(generate(UuidVersion::V4, MAX_UUIDS + 1).is_err());
    }

    #[test]
    fn version_names_parse() {
        assert_eq!("V7".parse::<UuidVersion>().unwrap(), UuidVersion::V7);
        assert!("v3".parse::<UuidVersion>().is_err());
    }
}
