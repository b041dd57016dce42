use crate::TrafficInfoAppError;
use base64::prelude::*;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

/// date format required by the `x-ms-date` header.
pub fn rfc1123_date(now: &DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// `/{account}{path}` for the request url. path-style endpoints such as the
/// storage emulator repeat the account name inside the path.
pub fn canonicalized_resource(account_name: &str, url: &Url) -> String {
    format!("/{account_name}{}", url.path())
}

/// SharedKeyLite signature for the table service: base64 of the HMAC-SHA256
/// of `{x-ms-date}\n{canonicalized resource}` keyed with the account key.
pub fn shared_key_lite_signature(
    account_key: &[u8],
    date: &str,
    canonicalized_resource: &str,
) -> Result<String, TrafficInfoAppError> {
    let mut mac = HmacSha256::new_from_slice(account_key)
        .map_err(|e| TrafficInfoAppError::TableStoreError(format!("invalid account key: {e}")))?;
    mac.update(format!("{date}\n{canonicalized_resource}").as_bytes());
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::{canonicalized_resource, rfc1123_date, shared_key_lite_signature};
    use base64::prelude::*;
    use chrono::{TimeZone, Utc};
    use url::Url;

    const EMULATOR_KEY: &str =
        "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

    #[test]
    fn test_date_header_format() {
        let now = Utc
            .with_ymd_and_hms(2024, 1, 15, 16, 0, 0)
            .single()
            .expect("valid utc time");
        assert_eq!(rfc1123_date(&now), "Mon, 15 Jan 2024 16:00:00 GMT");
    }

    #[test]
    fn test_canonicalized_resource_for_path_style_endpoint() {
        let url = Url::parse("http://127.0.0.1:10002/devstoreaccount1/TrafficInfo")
            .expect("valid url");
        assert_eq!(
            canonicalized_resource("devstoreaccount1", &url),
            "/devstoreaccount1/devstoreaccount1/TrafficInfo"
        );
        let url = Url::parse("https://commutes.table.core.windows.net/TrafficInfo")
            .expect("valid url");
        assert_eq!(
            canonicalized_resource("commutes", &url),
            "/commutes/TrafficInfo"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let key = BASE64_STANDARD.decode(EMULATOR_KEY).expect("valid base64");
        let signature = shared_key_lite_signature(
            &key,
            "Mon, 15 Jan 2024 16:00:00 GMT",
            "/devstoreaccount1/devstoreaccount1/TrafficInfo",
        )
        .expect("signature should compute");
        assert_eq!(signature, "qKuGW5MNDDeCZl+5uqxGWuIdpPoKVRut0y5VNOHJGKw=");
    }
}
