use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Query type symbol as sent by the upstream server.
///
/// Known names map to their own variant; anything else is kept verbatim in
/// `Other` so that decoding a request never rejects a type it has not seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    PTR,
    SOA,
    SRV,
    TXT,
    NAPTR,
    CAA,
    DS,
    DNSKEY,
    SSHFP,
    TLSA,
    SVCB,
    HTTPS,
    ANY,
    AXFR,
    Other(Arc<str>),
}

impl QueryType {
    pub fn as_str(&self) -> &str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::CNAME => "CNAME",
            QueryType::MX => "MX",
            QueryType::NS => "NS",
            QueryType::PTR => "PTR",
            QueryType::SOA => "SOA",
            QueryType::SRV => "SRV",
            QueryType::TXT => "TXT",
            QueryType::NAPTR => "NAPTR",
            QueryType::CAA => "CAA",
            QueryType::DS => "DS",
            QueryType::DNSKEY => "DNSKEY",
            QueryType::SSHFP => "SSHFP",
            QueryType::TLSA => "TLSA",
            QueryType::SVCB => "SVCB",
            QueryType::HTTPS => "HTTPS",
            QueryType::ANY => "ANY",
            QueryType::AXFR => "AXFR",
            QueryType::Other(name) => name,
        }
    }

    /// Types that ask for the zone's authority record.
    pub fn wants_soa(&self) -> bool {
        matches!(self, QueryType::SOA | QueryType::ANY)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, QueryType::Other(_))
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.to_ascii_uppercase().as_str() {
            "A" => QueryType::A,
            "AAAA" => QueryType::AAAA,
            "CNAME" => QueryType::CNAME,
            "MX" => QueryType::MX,
            "NS" => QueryType::NS,
            "PTR" => QueryType::PTR,
            "SOA" => QueryType::SOA,
            "SRV" => QueryType::SRV,
            "TXT" => QueryType::TXT,
            "NAPTR" => QueryType::NAPTR,
            "CAA" => QueryType::CAA,
            "DS" => QueryType::DS,
            "DNSKEY" => QueryType::DNSKEY,
            "SSHFP" => QueryType::SSHFP,
            "TLSA" => QueryType::TLSA,
            "SVCB" => QueryType::SVCB,
            "HTTPS" => QueryType::HTTPS,
            "ANY" => QueryType::ANY,
            "AXFR" => QueryType::AXFR,
            _ => QueryType::Other(Arc::from(s)),
        };
        Ok(parsed)
    }
}

impl From<&str> for QueryType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(qtype) => qtype,
            Err(never) => match never {},
        }
    }
}
