use std::{fmt, str::FromStr, sync::LazyLock};

use macaddr::MacAddr6;
use rand::Rng;
use regex::Regex;

use crate::ChangeMacError;

static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$")
        .expect("MAC address pattern is valid")
});

/// A unicast MAC address.
///
/// Only constructed through [`FromStr`], `TryFrom<[u8; 6]>` or
/// [`generate_random_mac`], so the first octet is always even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(MacAddr6);

impl MacAddress {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0.into_array();
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl TryFrom<[u8; 6]> for MacAddress {
    type Error = ChangeMacError;

    fn try_from(bytes: [u8; 6]) -> Result<Self, Self::Error> {
        let mac = MacAddr6::from(bytes);
        if bytes[0] % 2 != 0 {
            return Err(ChangeMacError::InvalidMac(MacAddress(mac).to_string()));
        }
        Ok(MacAddress(mac))
    }
}

impl FromStr for MacAddress {
    type Err = ChangeMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_mac(s) {
            return Err(ChangeMacError::InvalidMac(s.to_owned()));
        }
        let mut bytes = [0u8; 6];
        for (byte, group) in bytes.iter_mut().zip(s.split([':', '-'])) {
            *byte = u8::from_str_radix(group, 16)
                .map_err(|_| ChangeMacError::InvalidMac(s.to_owned()))?;
        }
        MacAddress::try_from(bytes)
    }
}

/// Reports whether `candidate` is six hex pairs joined uniformly by `:` or `-`
/// with an even first octet.
pub fn is_valid_mac(candidate: &str) -> bool {
    if !MAC_PATTERN.is_match(candidate) {
        return false;
    }
    // regex has no backreferences, so uniform separators are checked here
    let separator = candidate.as_bytes()[2];
    if candidate.bytes().skip(2).step_by(3).any(|b| b != separator) {
        return false;
    }
    match u8::from_str_radix(&candidate[..2], 16) {
        Ok(first) => first % 2 == 0,
        Err(_) => false,
    }
}

/// Draws random addresses until one passes [`is_valid_mac`].
pub fn generate_random_mac() -> MacAddress {
    let mut rng = rand::thread_rng();
    let mut mac = [0u8; 6];

    loop {
        rng.fill(&mut mac);
        let candidate = MacAddr6::from(mac);
        let text = MacAddress(candidate).to_string();
        if is_valid_mac(&text) {
            return MacAddress(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_colon_and_hyphen_forms() {
        assert!(is_valid_mac("00:11:22:33:44:55"));
        assert!(is_valid_mac("00-11-22-33-44-55"));
        assert!(is_valid_mac("AA:bb:CC:dd:EE:ff"));
        assert!(is_valid_mac("fe:ff:ff:ff:ff:ff"));
    }

    #[test]
    fn rejects_odd_first_octet() {
        assert!(!is_valid_mac("01:11:22:33:44:55"));
        assert!(!is_valid_mac("ff:ff:ff:ff:ff:ff"));
    }

    #[test]
    fn rejects_malformed_candidates() {
        for candidate in [
            "",
            "00:11:22:33:44:5",
            "00:11:22:33:44",
            "00:11:22:33:44:55:66",
            "00:11-22:33:44:55",
            "00-11-22-33-44:55",
            "001122334455",
            "00.11.22.33.44.55",
            "0g:11:22:33:44:55",
            " 00:11:22:33:44:55",
            "00:11:22:33:44:55\n",
        ] {
            assert!(!is_valid_mac(candidate), "{candidate:?} should be rejected");
        }
    }

    #[test]
    fn parses_into_lowercase_colon_form() {
        let mac: MacAddress = "0A-BB-CC-DD-EE-FF".parse().unwrap();
        assert_eq!(mac.to_string(), "0a:bb:cc:dd:ee:ff");
        assert_eq!(mac.as_bytes(), &[0x0a, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn parse_rejects_invalid_text() {
        let err = "01:11:22:33:44:55".parse::<MacAddress>().unwrap_err();
        assert!(matches!(err, ChangeMacError::InvalidMac(s) if s == "01:11:22:33:44:55"));
    }

    #[test]
    fn multicast_bytes_are_rejected() {
        assert!(MacAddress::try_from([0x01, 0, 0, 0, 0, 0]).is_err());
        assert!(MacAddress::try_from([0x02, 0, 0, 0, 0, 0]).is_ok());
    }

    #[test]
    fn generated_addresses_are_always_unicast() {
        for _ in 0..10_000 {
            let mac = generate_random_mac();
            assert_eq!(mac.as_bytes()[0] % 2, 0, "{mac}");
            assert!(is_valid_mac(&mac.to_string()));
        }
    }

    #[test]
    fn generated_addresses_vary() {
        let first = generate_random_mac();
        assert!((0..10).any(|_| generate_random_mac() != first));
    }
}
