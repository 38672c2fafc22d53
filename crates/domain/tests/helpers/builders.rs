#![allow(dead_code)]
use pipe_backend_domain::{PipeRequest, QueryClass, QueryType};

pub struct PipeRequestBuilder {
    qname: String,
    qclass: QueryClass,
    qtype: QueryType,
    id: String,
    remote_ip: String,
    local_ip: String,
}

impl PipeRequestBuilder {
    pub fn new() -> Self {
        Self {
            qname: "foo.my.net".to_string(),
            qclass: QueryClass::IN,
            qtype: QueryType::A,
            id: "1".to_string(),
            remote_ip: "9.9.9.9".to_string(),
            local_ip: "0.0.0.0".to_string(),
        }
    }

    pub fn qname(mut self, qname: &str) -> Self {
        self.qname = qname.to_string();
        self
    }

    pub fn qclass(mut self, qclass: QueryClass) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn qtype(mut self, qtype: QueryType) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn build(self) -> PipeRequest {
        PipeRequest::new(
            self.qname,
            self.qclass,
            self.qtype,
            self.id,
            self.remote_ip,
            self.local_ip,
        )
    }
}

impl Default for PipeRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
