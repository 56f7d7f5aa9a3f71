use std::fmt;

/// One address family to keep in sync, with its DNS record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn record_type(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "A",
            AddressFamily::V6 => "AAAA",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "ipv4"),
            AddressFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// One line of the DreamHost record listing, as a parsed snapshot.
///
/// A record is never mutated in place: DreamHost has no replace call, so
/// changing a value means deleting the old snapshot's value and adding a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub account_id: String,
    pub zone: String,
    pub record: String,
    pub record_type: String,
    pub value: String,
    pub comment: String,
    pub editable: String,
}
