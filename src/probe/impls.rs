// Standard library
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

// 3rd party crates
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{lookup_host, TcpStream};
use tokio::time::timeout;
use tracing::{debug, info, warn};

// Project imports
use crate::settings::types::ProbeSettings;

// Current module imports
use super::constants::{
    default_connect_timeout, default_receive_timeout, BODY_BYTE, REGISTRAR_PATH, RESPONSE_WINDOW,
};
use super::errors::{ConnectError, ExchangeError, TargetError};
use super::functions::{decode_ascii, decode_utf8, hex_dump, is_continue};
use super::types::{
    ProbeOutcome, ProbeRequest, ProbeResult, ProbeRunner, ReceiveStatus, ResponseWindow, Target,
    Transcript,
};

impl Target {
    /// Creates a validated target.
    ///
    /// The host ends up verbatim in the request line and `Host` header, so it
    /// must be printable ASCII without whitespace.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, TargetError> {
        let host: String = host.into();
        if host.is_empty() {
            return Err(TargetError::EmptyHost);
        }
        if !host.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(TargetError::InvalidHost(host));
        }
        if port == 0 {
            return Err(TargetError::InvalidPort(port));
        }
        Ok(Self { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, as written into the request.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl ProbeRequest {
    /// Builds the request for `target`. `Content-Length: 1` is declared but no
    /// body follows the header block.
    pub fn new(target: &Target) -> Self {
        let authority: String = target.authority();
        let text: String = format!(
            "POST http://{authority}{path} HTTP/1.1\r\n\
             Content-Type: application/soap+xml; charset=utf-8\r\n\
             Host: {authority}\r\n\
             Content-Length: 1\r\n\
             Expect: 100-continue\r\n\
             Connection: Close\r\n\
             \r\n",
            authority = authority,
            path = REGISTRAR_PATH,
        );
        Self {
            bytes: text.into_bytes(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            ProbeOutcome::Healthy => "healthy",
            ProbeOutcome::Unhealthy => "unhealthy",
            ProbeOutcome::ConnectionFailed => "connection failed",
            ProbeOutcome::UnexpectedError => "unexpected error",
        };
        f.write_str(name)
    }
}

impl ResponseWindow {
    /// Whether the full 21 byte window was captured.
    pub fn is_complete(&self) -> bool {
        self.status == ReceiveStatus::Complete
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn record(&mut self, line: impl Into<String>) {
        let line: String = line.into();
        debug!(target: "xdping::transcript", "{}", line);
        self.lines.push(line);
    }

    /// Appends a headline followed by an `- ERROR:` line carrying the cause.
    pub fn record_error(&mut self, headline: &str, cause: &dyn fmt::Display) {
        self.record(headline);
        self.record(format!("- ERROR: {}", cause));
    }

    fn record_window(&mut self, window: &ResponseWindow) {
        let received: usize = window.bytes.len();
        if received == 0 {
            self.record("- Received no data");
        } else {
            self.record(format!(
                "- Received the following {} byte array: {}",
                received,
                hex_dump(&window.bytes)
            ));
        }

        match &window.status {
            ReceiveStatus::Complete => {}
            ReceiveStatus::Closed => self.record(format!(
                "- The connection was closed by the remote host after {} of {} bytes",
                received, RESPONSE_WINDOW
            )),
            ReceiveStatus::TimedOut(wait) => self.record(format!(
                "- Timed out after {} ms waiting for the response; received {} of {} bytes",
                wait.as_millis(),
                received,
                RESPONSE_WINDOW
            )),
            ReceiveStatus::Failed(message) => {
                let headline: String = format!(
                    "- Failed to receive the response after {} of {} bytes",
                    received, RESPONSE_WINDOW
                );
                self.record_error(&headline, message);
            }
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

impl ProbeResult {
    pub fn is_healthy(&self) -> bool {
        self.outcome.is_healthy()
    }

    /// Raw bytes of the response window, empty when nothing was received.
    pub fn response_bytes(&self) -> &[u8] {
        self.response
            .as_ref()
            .map(|w| w.bytes.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.transcript, f)
    }
}

impl Default for ProbeRunner {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            receive_timeout: default_receive_timeout(),
        }
    }
}

impl ProbeRunner {
    pub fn new(connect_timeout: Duration, receive_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            receive_timeout,
        }
    }

    pub fn from_settings(settings: &ProbeSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.connect_timeout_ms),
            Duration::from_millis(settings.receive_timeout_ms),
        )
    }

    /// Runs one XDPing against `target`.
    ///
    /// Never fails: every fault ends up in the transcript and the outcome. The
    /// connection, when one was made, is closed before this returns.
    pub async fn probe(&self, target: &Target) -> ProbeResult {
        let mut transcript: Transcript = Transcript::new();
        transcript.record(format!(
            "Attempting an XDPing against {} on TCP port number {}",
            target.host, target.port
        ));
        info!(addr = %target, "Starting XDPing");

        let request: ProbeRequest = ProbeRequest::new(target);

        let stream: TcpStream = match self.connect(target).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!(addr = %target, "Could not connect: {}", e);
                let outcome: ProbeOutcome = if e.is_connection_level() {
                    transcript.record_error("- Failed to connect to service", &e);
                    ProbeOutcome::ConnectionFailed
                } else {
                    transcript.record_error("- Failed with an unexpected error", &e);
                    ProbeOutcome::UnexpectedError
                };
                return Self::finish(target, outcome, transcript, None);
            }
        };
        transcript.record("- Socket connected");

        let (outcome, response) = self.converse(stream, &request, &mut transcript).await;

        Self::finish(target, outcome, transcript, response)
    }

    /// Runs the exchange over an open connection, then closes it. A failed
    /// close is recorded but leaves the outcome alone.
    async fn converse<S>(
        &self,
        mut stream: S,
        request: &ProbeRequest,
        transcript: &mut Transcript,
    ) -> (ProbeOutcome, Option<ResponseWindow>)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let (outcome, response) = self.exchange(&mut stream, request, transcript).await;

        match close(stream).await {
            Ok(()) => transcript.record("- Socket closed"),
            Err(e) => {
                warn!("{}", e);
                transcript.record_error("- Failed to close the socket", e.cause());
            }
        }

        (outcome, response)
    }

    fn finish(
        target: &Target,
        outcome: ProbeOutcome,
        transcript: Transcript,
        response: Option<ResponseWindow>,
    ) -> ProbeResult {
        info!(addr = %target, outcome = %outcome, "XDPing finished");
        ProbeResult {
            target: target.clone(),
            outcome,
            transcript,
            response,
        }
    }

    /// Resolves the target, then tries each address in turn. Resolution and
    /// every single attempt each get the full connect timeout.
    async fn connect(&self, target: &Target) -> Result<TcpStream, ConnectError> {
        let addrs: Vec<SocketAddr> =
            match timeout(self.connect_timeout, lookup_host((target.host.as_str(), target.port)))
                .await
            {
                Ok(Ok(addrs)) => addrs.collect(),
                Ok(Err(source)) => {
                    return Err(ConnectError::Resolve {
                        host: target.host.clone(),
                        source,
                    })
                }
                Err(_) => return Err(ConnectError::TimedOut(self.connect_timeout)),
            };

        if addrs.is_empty() {
            return Err(ConnectError::NoAddress {
                host: target.host.clone(),
            });
        }

        connect_any(&addrs, self.connect_timeout).await
    }

    /// Sends the request, captures the response window, completes the body
    /// and classifies what came back.
    async fn exchange<S>(
        &self,
        stream: &mut S,
        request: &ProbeRequest,
        transcript: &mut Transcript,
    ) -> (ProbeOutcome, Option<ResponseWindow>)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        if let Err(e) = send_request(stream, request).await {
            warn!("{}", e);
            transcript.record_error("- Failed to send the data", e.cause());
            return (ProbeOutcome::UnexpectedError, None);
        }
        transcript.record("- Sent the data");

        let window: ResponseWindow = self.receive_window(stream).await;
        transcript.record_window(&window);

        let ascii: String = decode_ascii(&window.bytes);
        transcript.record(format!(
            "- Converting the byte array to an ASCII string we get the output between the quotes: \"{}\"",
            ascii
        ));
        transcript.record(format!(
            "- Converting the byte array to a UTF8 string we get the output between the quotes: \"{}\"",
            decode_utf8(&window.bytes)
        ));

        match send_body_byte(stream).await {
            Ok(()) => transcript.record(format!(
                "- Sending the following string as a byte to close the connection: \"{}\"",
                hex_dump(&[BODY_BYTE])
            )),
            Err(e) => {
                warn!("{}", e);
                transcript.record_error("- Failed to send the closing byte", e.cause());
            }
        }

        let outcome: ProbeOutcome = if is_continue(&ascii) {
            transcript.record("- The service is listening and healthy");
            ProbeOutcome::Healthy
        } else {
            transcript.record("- The service is not listening");
            ProbeOutcome::Unhealthy
        };

        (outcome, Some(window))
    }

    async fn receive_window<R>(&self, stream: &mut R) -> ResponseWindow
    where
        R: AsyncRead + Unpin,
    {
        let mut buf: [u8; RESPONSE_WINDOW] = [0; RESPONSE_WINDOW];
        let mut filled: usize = 0;

        let status: ReceiveStatus =
            match timeout(self.receive_timeout, fill_window(stream, &mut buf, &mut filled)).await {
                Ok(Ok(true)) => ReceiveStatus::Complete,
                Ok(Ok(false)) => ReceiveStatus::Closed,
                Ok(Err(e)) => ReceiveStatus::Failed(e.to_string()),
                Err(_) => ReceiveStatus::TimedOut(self.receive_timeout),
            };
        debug!(received = filled, status = ?status, "Response window read");

        ResponseWindow {
            bytes: buf[..filled].to_vec(),
            status,
        }
    }
}

/// Tries each address in order, each attempt bounded by `per_attempt`.
/// Returns the first connection made or the last failure seen.
async fn connect_any(addrs: &[SocketAddr], per_attempt: Duration) -> Result<TcpStream, ConnectError> {
    let mut last_error: Option<ConnectError> = None;
    for &addr in addrs {
        debug!(%addr, "Connecting");
        match timeout(per_attempt, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => return Ok(stream),
            Ok(Err(e)) => {
                debug!(%addr, "Connect failed: {}", e);
                last_error = Some(ConnectError::Io(e));
            }
            Err(_) => {
                debug!(%addr, "Connect timed out");
                last_error = Some(ConnectError::TimedOut(per_attempt));
            }
        }
    }

    Err(last_error.unwrap_or(ConnectError::TimedOut(per_attempt)))
}

async fn send_request<W>(stream: &mut W, request: &ProbeRequest) -> Result<(), ExchangeError>
where
    W: AsyncWrite + Unpin,
{
    stream
        .write_all(request.as_bytes())
        .await
        .map_err(ExchangeError::Send)
}

async fn send_body_byte<W>(stream: &mut W) -> Result<(), ExchangeError>
where
    W: AsyncWrite + Unpin,
{
    stream
        .write_all(&[BODY_BYTE])
        .await
        .map_err(ExchangeError::SendBody)
}

/// Reads until `buf` is full. Returns `false` if the peer closed first.
async fn fill_window<R>(stream: &mut R, buf: &mut [u8], filled: &mut usize) -> io::Result<bool>
where
    R: AsyncRead + Unpin,
{
    while *filled < buf.len() {
        match stream.read(&mut buf[*filled..]).await {
            Ok(0) => return Ok(false),
            Ok(n) => *filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}

/// Shuts down the write half, then releases the socket.
async fn close<W>(mut stream: W) -> Result<(), ExchangeError>
where
    W: AsyncWrite + Unpin,
{
    stream.shutdown().await.map_err(ExchangeError::Close)
}
