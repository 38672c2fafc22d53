use super::codec::{decode_line, parse_handshake, PipeMessage, PipeResponse};
use pipe_backend_application::use_cases::{AnswerQueryUseCase, QueryOutcome, ReloadRecordsUseCase};
use pipe_backend_domain::DomainError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

/// Longest input line accepted, newline included. Longer lines are
/// discarded up to their newline and answered with `FAIL`.
pub const MAX_LINE_BYTES: usize = 8 * 1024;

enum Incoming {
    Line(String),
    Oversized(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHandshake,
    Serving,
    Terminated,
}

/// Per-session counters, returned when the input closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lookups: u64,
    pub answered: u64,
    pub unknown: u64,
    pub failed: u64,
    pub probes: u64,
    pub malformed: u64,
}

/// Line protocol state machine.
///
/// Each input line is decoded, answered, flushed and followed by a reload
/// check before the next line is read.
pub struct PipeSession<R, W> {
    reader: R,
    writer: W,
    answer_query: AnswerQueryUseCase,
    reload: ReloadRecordsUseCase,
    banner: String,
    state: SessionState,
    summary: SessionSummary,
}

impl<R, W> PipeSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        reader: R,
        writer: W,
        answer_query: AnswerQueryUseCase,
        reload: ReloadRecordsUseCase,
        banner: impl Into<String>,
    ) -> Self {
        Self {
            reader,
            writer,
            answer_query,
            reload,
            banner: banner.into(),
            state: SessionState::AwaitingHandshake,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Handshake followed by the serving loop.
    pub async fn run(&mut self) -> Result<SessionSummary, DomainError> {
        self.handshake().await?;
        self.serve().await
    }

    pub async fn handshake(&mut self) -> Result<(), DomainError> {
        let outcome = match self.read_line().await? {
            Some(Incoming::Line(line)) => parse_handshake(&line),
            Some(Incoming::Oversized(len)) => Err(DomainError::HandshakeRejected(format!(
                "handshake line of {} bytes",
                len
            ))),
            None => Err(DomainError::HandshakeRejected(
                "input closed before handshake".to_string(),
            )),
        };

        match outcome {
            Ok(()) => {
                info!(pid = std::process::id(), "Pipe backend starting");
                let banner = PipeResponse::Ok(self.banner.clone());
                self.emit(&banner).await?;
                self.flush().await?;
                self.state = SessionState::Serving;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Did not receive an ABI version 2 handshake correctly");
                self.emit(&PipeResponse::Fail).await?;
                self.flush().await?;
                self.state = SessionState::Terminated;
                Err(e)
            }
        }
    }

    /// Serves lines until end of input.
    pub async fn serve(&mut self) -> Result<SessionSummary, DomainError> {
        if self.state != SessionState::Serving {
            return Err(DomainError::HandshakeRejected(
                "session has not completed the handshake".to_string(),
            ));
        }

        while let Some(incoming) = self.read_line().await? {
            match incoming {
                Incoming::Line(line) => self.exchange(&line).await?,
                Incoming::Oversized(len) => {
                    self.reject(DomainError::MalformedLine(format!(
                        "line of {} bytes exceeds {} byte limit",
                        len, MAX_LINE_BYTES
                    )))
                    .await?
                }
            }
            self.reload.reload_if_due().await;
        }

        self.state = SessionState::Terminated;
        info!(
            lookups = self.summary.lookups,
            failed = self.summary.failed,
            "Input closed, session finished"
        );

        Ok(self.summary.clone())
    }

    async fn exchange(&mut self, line: &str) -> Result<(), DomainError> {
        debug!(input = %line, "Got line from upstream");

        match decode_line(line) {
            Ok(PipeMessage::Lookup(request)) => {
                self.summary.lookups += 1;
                match self.answer_query.execute(&request) {
                    QueryOutcome::Unknown => {
                        self.summary.unknown += 1;
                        self.emit(&PipeResponse::End).await?;
                    }
                    QueryOutcome::Failed(_) => {
                        self.summary.failed += 1;
                        self.emit(&PipeResponse::Fail).await?;
                    }
                    QueryOutcome::Answered(lines) => {
                        self.summary.answered += 1;
                        for line in lines {
                            self.emit(&PipeResponse::Data(line)).await?;
                        }
                        self.emit(&PipeResponse::End).await?;
                    }
                }
            }
            Ok(PipeMessage::AxfrProbe { id }) => {
                self.summary.probes += 1;
                debug!(id = %id, "Zone transfer probe");
                self.emit(&PipeResponse::End).await?;
            }
            Err(e) => return self.reject(e).await,
        }

        self.flush().await
    }

    async fn reject(&mut self, e: DomainError) -> Result<(), DomainError> {
        self.summary.malformed += 1;
        error!(error = %e, "Upstream sent input which made no sense");
        self.emit(&PipeResponse::Fail).await?;
        self.flush().await
    }

    async fn read_line(&mut self) -> Result<Option<Incoming>, DomainError> {
        let mut buf = Vec::new();
        let read = self.read_bounded(&mut buf).await?;

        if read == 0 {
            return Ok(None);
        }

        if read == MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            return Ok(Some(Incoming::Oversized(read + self.discard_line().await?)));
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(Incoming::Line(
            line.trim_end_matches(['\n', '\r']).to_string(),
        )))
    }

    async fn read_bounded(&mut self, buf: &mut Vec<u8>) -> Result<usize, DomainError> {
        (&mut self.reader)
            .take(MAX_LINE_BYTES as u64)
            .read_until(b'\n', buf)
            .await
            .map_err(|e| DomainError::Io(e.to_string()))
    }

    /// Drops input up to and including the next newline.
    async fn discard_line(&mut self) -> Result<usize, DomainError> {
        let mut dropped = 0;
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            let read = self.read_bounded(&mut chunk).await?;
            dropped += read;
            if read == 0 || chunk.last() == Some(&b'\n') {
                return Ok(dropped);
            }
        }
    }

    async fn emit(&mut self, response: &PipeResponse) -> Result<(), DomainError> {
        debug!(output = %response, "Sending");
        self.writer
            .write_all(response.encode().as_bytes())
            .await
            .map_err(|e| DomainError::Io(e.to_string()))
    }

    async fn flush(&mut self) -> Result<(), DomainError> {
        self.writer
            .flush()
            .await
            .map_err(|e| DomainError::Io(e.to_string()))
    }
}
