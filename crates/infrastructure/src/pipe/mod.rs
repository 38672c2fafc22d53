pub mod codec;
pub mod session;

pub use codec::{decode_line, parse_handshake, PipeMessage, PipeResponse, ABI_VERSION};
pub use session::{PipeSession, SessionState, SessionSummary, MAX_LINE_BYTES};
