use super::{QueryClass, QueryType};
use std::sync::Arc;

/// A single lookup handed over by the upstream server.
///
/// `id`, `remote_ip` and `local_ip` are opaque: they are echoed back or
/// offered to rules, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeRequest {
    pub qname: Arc<str>,
    pub qclass: QueryClass,
    pub qtype: QueryType,
    pub id: Arc<str>,
    pub remote_ip: Arc<str>,
    pub local_ip: Arc<str>,
}

impl PipeRequest {
    pub fn new(
        qname: impl Into<Arc<str>>,
        qclass: QueryClass,
        qtype: QueryType,
        id: impl Into<Arc<str>>,
        remote_ip: impl Into<Arc<str>>,
        local_ip: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            qname: qname.into(),
            qclass,
            qtype,
            id: id.into(),
            remote_ip: remote_ip.into(),
            local_ip: local_ip.into(),
        }
    }

    pub fn is_soa(&self) -> bool {
        self.qtype == QueryType::SOA
    }

    pub fn is_any(&self) -> bool {
        self.qtype == QueryType::ANY
    }
}
