use super::{PipeRequest, QueryClass, QueryType};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_TTL: u32 = 3600;

const SOA_REFRESH: u32 = 1800;
const SOA_RETRY: u32 = 3600;
const SOA_EXPIRE: u32 = 604_800;
const SOA_MINIMUM: u32 = 3600;

/// How a rule relates to the zone it answers for.
///
/// `Record` rules answer for a single name and rely on a synthesized SOA;
/// `Zone` rules are expected to provide their own authority data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Record,
    Zone,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Record => "record",
            RecordKind::Zone => "zone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub qtype: QueryType,
    pub content: String,
    pub ttl: Option<u32>,
}

/// Response data a rule produced for one request.
#[derive(Debug, Clone)]
pub struct Answer {
    qname: Arc<str>,
    qclass: QueryClass,
    id: Arc<str>,
    ttl: u32,
    shuffle: bool,
    records: Vec<AnswerRecord>,
}

impl Answer {
    /// Starts an empty answer carrying the request's name, class and id.
    pub fn for_request(request: &PipeRequest) -> Self {
        Self {
            qname: Arc::clone(&request.qname),
            qclass: request.qclass.clone(),
            id: Arc::clone(&request.id),
            ttl: DEFAULT_TTL,
            shuffle: false,
            records: Vec::new(),
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn record(mut self, qtype: QueryType, content: impl Into<String>) -> Self {
        self.records.push(AnswerRecord {
            qtype,
            content: content.into(),
            ttl: None,
        });
        self
    }

    pub fn record_with_ttl(mut self, qtype: QueryType, content: impl Into<String>, ttl: u32) -> Self {
        self.records.push(AnswerRecord {
            qtype,
            content: content.into(),
            ttl: Some(ttl),
        });
        self
    }

    pub fn default_ttl(&self) -> u32 {
        self.ttl
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders one `DATA` line per record, in insertion order unless
    /// shuffling was requested.
    pub fn response(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .records
            .iter()
            .map(|record| {
                self.data_line(
                    record.qtype.as_str(),
                    record.ttl.unwrap_or(self.ttl),
                    &record.content,
                )
            })
            .collect();

        if self.shuffle {
            fastrand::shuffle(&mut lines);
        }

        lines
    }

    /// Synthesizes an SOA line for record-only rule sets, serial taken
    /// from today's UTC date.
    pub fn fudge_soa(&self, contact: &str, nameserver: &str) -> String {
        let serial = Utc::now().format("%Y%m%d01").to_string();
        self.fudge_soa_with_serial(contact, nameserver, &serial)
    }

    pub fn fudge_soa_with_serial(&self, contact: &str, nameserver: &str, serial: &str) -> String {
        let content = format!(
            "{} {} {} {} {} {} {}",
            nameserver, contact, serial, SOA_REFRESH, SOA_RETRY, SOA_EXPIRE, SOA_MINIMUM
        );
        self.data_line(QueryType::SOA.as_str(), self.ttl, &content)
    }

    fn data_line(&self, qtype: &str, ttl: u32, content: &str) -> String {
        format!(
            "DATA\t{}\t{}\t{}\t{}\t{}\t{}",
            self.qname, self.qclass, qtype, ttl, self.id, content
        )
    }
}
