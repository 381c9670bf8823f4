use sha1::{Digest, Sha1};

/// `SAPISID` value from a raw `Cookie` header.
pub fn sapisid_from_cookie(cookie: &str) -> Option<&str> {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "SAPISID")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `Authorization` header value for cookie-authenticated requests:
/// `SAPISIDHASH <ts>_<sha1("<ts> <sapisid> <origin>")>`.
pub fn sapisid_hash(sapisid: &str, origin: &str, timestamp: i64) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("{} {} {}", timestamp, sapisid, origin).as_bytes());
    format!(
        "SAPISIDHASH {}_{}",
        timestamp,
        hex::encode(hasher.finalize())
    )
}

pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
