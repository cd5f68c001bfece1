//! UPI payment intent parsing
//!
//! UPI QR codes carry a `upi://pay?pa=<vpa>&pn=<name>&...` URI rather than
//! EMV TLV. Only the payee fields are of interest here.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Payee details from a UPI intent URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiIntent {
    /// Virtual Payment Address (`pa`)
    pub vpa: String,
    /// Payee name (`pn`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
}

/// Parse a `upi://pay` intent, returning `None` for anything else
pub fn parse_upi(payload: &str) -> Option<UpiIntent> {
    let url = match Url::parse(payload.trim()) {
        Ok(url) => url,
        Err(err) => {
            debug!(error = %err, "payload is not a URI");
            return None;
        }
    };

    if url.scheme() != "upi" || !url.host_str().is_some_and(|h| h.eq_ignore_ascii_case("pay")) {
        debug!(scheme = url.scheme(), host = ?url.host_str(), "not a UPI pay intent");
        return None;
    }

    let mut vpa = None;
    let mut payee_name = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "pa" if vpa.is_none() => vpa = Some(value.into_owned()),
            "pn" if payee_name.is_none() => payee_name = Some(value.into_owned()),
            _ => {}
        }
    }

    let vpa = vpa.filter(|vpa| !vpa.is_empty())?;
    Some(UpiIntent {
        vpa,
        payee_name: payee_name.filter(|name| !name.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upi() {
        let intent = parse_upi("upi://pay?pa=chai.stall@okaxis&pn=Chai%20Stall&cu=INR").unwrap();
        assert_eq!(intent.vpa, "chai.stall@okaxis");
        assert_eq!(intent.payee_name.as_deref(), Some("Chai Stall"));
    }

    #[test]
    fn test_parse_upi_plus_as_space() {
        let intent = parse_upi("UPI://pay?pn=Ravi+Kumar&pa=ravi@ybl").unwrap();
        assert_eq!(intent.vpa, "ravi@ybl");
        assert_eq!(intent.payee_name.as_deref(), Some("Ravi Kumar"));
    }

    #[test]
    fn test_parse_upi_without_name() {
        let intent = parse_upi("upi://pay?pa=ravi@ybl&pn=").unwrap();
        assert_eq!(intent.payee_name, None);
    }

    #[test]
    fn test_parse_upi_requires_vpa() {
        assert_eq!(parse_upi("upi://pay?pn=Nobody"), None);
        assert_eq!(parse_upi("upi://pay?pa=&pn=Nobody"), None);
    }

    #[test]
    fn test_parse_upi_rejects_other_payloads() {
        assert_eq!(parse_upi("upi://mandate?pa=ravi@ybl"), None);
        assert_eq!(parse_upi("https://pay?pa=ravi@ybl"), None);
        assert_eq!(parse_upi("00020101021129370016A000000677010111"), None);
        assert_eq!(parse_upi(""), None);
    }
}
