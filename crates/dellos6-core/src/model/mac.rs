// MacAddress: every hardware address in a fact is stored in one spelling.
// Dell OS6 prints `F8B1.5692.3F21` in most tables and `F8:B1:56:92:3F:21`
// in LLDP; both normalize to upper-case colon-separated EUI-48.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// MAC address, normalized to upper-case colon-separated format
/// (`AA:BB:CC:DD:EE:FF`). Unparseable input yields the empty address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalize a MAC in dotted (`aabb.ccdd.eeff`), colon, dash or bare
    /// hex notation.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let hex: String = raw
            .as_ref()
            .chars()
            .filter(|c| !matches!(c, '.' | ':' | '-') && !c.is_whitespace())
            .collect();
        if hex.len() != 12 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::default();
        }
        let upper = hex.to_ascii_uppercase();
        let octets: Vec<&str> = (0..6).map(|i| &upper[i * 2..i * 2 + 2]).collect();
        Self(octets.join(":"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
