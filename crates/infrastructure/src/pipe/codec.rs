use pipe_backend_domain::{DomainError, PipeRequest, QueryClass, QueryType};
use std::fmt;

pub const HANDSHAKE_TOKEN: &str = "HELO";
pub const ABI_VERSION: &str = "2";

const FIELD_SEPARATOR: char = '\t';

/// One decoded input line received while serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeMessage {
    /// `Q qname qclass qtype id remote-ip local-ip`
    Lookup(PipeRequest),
    /// `AXFR id`; never dispatched to rules
    AxfrProbe { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeResponse {
    Ok(String),
    Data(String),
    End,
    Fail,
}

impl PipeResponse {
    /// Wire form including the trailing newline.
    pub fn encode(&self) -> String {
        format!("{}\n", self)
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, PipeResponse::End)
    }
}

impl fmt::Display for PipeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipeResponse::Ok(banner) => write!(f, "OK{}{}", FIELD_SEPARATOR, banner),
            PipeResponse::Data(line) => f.write_str(line),
            PipeResponse::End => f.write_str("END"),
            PipeResponse::Fail => f.write_str("FAIL"),
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Accepts exactly `HELO\t2`.
pub fn parse_handshake(line: &str) -> Result<(), DomainError> {
    let line = strip_line_ending(line);
    let mut fields = line.split(FIELD_SEPARATOR);

    match (fields.next(), fields.next(), fields.next()) {
        (Some(HANDSHAKE_TOKEN), Some(ABI_VERSION), None) => Ok(()),
        _ => Err(DomainError::HandshakeRejected(format!(
            "expected ABI version {} handshake, got '{}'",
            ABI_VERSION, line
        ))),
    }
}

/// Classifies a line by its field count alone; field values are converted
/// to symbols but not otherwise checked. Any other field count is
/// `MalformedLine`.
pub fn decode_line(line: &str) -> Result<PipeMessage, DomainError> {
    let line = strip_line_ending(line);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    match fields.as_slice() {
        [_, qname, qclass, qtype, id, remote_ip, local_ip] => {
            Ok(PipeMessage::Lookup(PipeRequest::new(
                *qname,
                QueryClass::from(*qclass),
                QueryType::from(*qtype),
                *id,
                *remote_ip,
                *local_ip,
            )))
        }
        [_, id] => Ok(PipeMessage::AxfrProbe { id: id.to_string() }),
        _ => Err(DomainError::MalformedLine(line.to_string())),
    }
}
