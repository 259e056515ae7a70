//! Registration, event loop, and reconnection.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::github::IssueGateway;
use crate::relay::{Dispatcher, Identity, InboundMessage};

use super::IrcSettings;
use super::connection::IrcConnector;
use super::error::ChatError;
use super::message::{Command, IrcMessage};

/// Pause between a dropped connection and the next attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Longest inbound line kept: the 512-byte IRC line plus the 8191 bytes
/// IRCv3 allows for message tags. Longer lines are dropped.
pub const MAX_LINE_BYTES: usize = 512 + 8191;

const WELCOME: &str = "001";
const NICKNAME_IN_USE: &str = "433";

struct LineWriter<Writer> {
    inner: Writer,
}

impl<Writer> LineWriter<Writer>
where
    Writer: AsyncWrite + Unpin,
{
    async fn send(&mut self, command: &Command) -> Result<(), ChatError> {
        self.inner.write_all(command.render().as_bytes()).await?;
        self.inner.flush().await?;
        Ok(())
    }
}

/// Runs one connection until the server closes it or an error occurs.
///
/// Messages are handled one at a time in arrival order; the lookups for one
/// message finish before the next line is read.
///
/// # Errors
///
/// Returns [`ChatError::Closed`] on end of stream, [`ChatError::Server`] when
/// the server sends `ERROR`, and [`ChatError::Io`] on socket failures.
pub async fn run_session<Stream, Gateway>(
    stream: Stream,
    settings: &IrcSettings,
    dispatcher: &Dispatcher<Gateway>,
) -> Result<(), ChatError>
where
    Stream: AsyncRead + AsyncWrite + Unpin,
    Gateway: IssueGateway,
{
    let (read_half, write_half) = tokio::io::split(stream);
    let mut reader = BufReader::new(read_half);
    let mut writer = LineWriter { inner: write_half };
    let mut nickname = settings.nickname.clone();

    register(&mut writer, settings).await?;

    let mut buffer = Vec::new();
    loop {
        match read_capped_line(&mut reader, &mut buffer).await? {
            LineRead::Complete => {}
            LineRead::Overlong => {
                warn!(limit = MAX_LINE_BYTES, "dropping overlong line from server");
                continue;
            }
            LineRead::Closed => return Err(ChatError::Closed),
        }
        let line = String::from_utf8_lossy(&buffer);
        let message = match IrcMessage::parse(&line) {
            Ok(message) => message,
            Err(error) => {
                debug!(%error, "skipping unparseable line");
                continue;
            }
        };

        match message.command.as_str() {
            "PING" => {
                let token = message.trailing().unwrap_or_default().to_owned();
                writer.send(&Command::Pong(token)).await?;
            }
            WELCOME => {
                info!(%nickname, "registered with IRC server");
                for channel in &settings.channels {
                    writer.send(&Command::Join(channel.clone())).await?;
                }
            }
            NICKNAME_IN_USE => {
                nickname.push('_');
                warn!(%nickname, "nickname in use; retrying");
                writer.send(&Command::Nick(nickname.clone())).await?;
            }
            "ERROR" => {
                return Err(ChatError::Server {
                    message: message.trailing().unwrap_or_default().to_owned(),
                });
            }
            "PRIVMSG" => {
                let Some(inbound) = inbound_message(&message) else {
                    continue;
                };
                for reply in dispatcher.handle(&inbound).await {
                    writer
                        .send(&Command::Privmsg {
                            target: reply.target,
                            text: reply.text,
                        })
                        .await?;
                }
            }
            _ => {}
        }
    }
}

enum LineRead {
    Complete,
    Overlong,
    Closed,
}

/// Reads one `\n`-terminated line into `buffer`, never holding more than
/// [`MAX_LINE_BYTES`]. The rest of an overlong line is consumed and
/// discarded. A final unterminated line counts as complete.
async fn read_capped_line<Reader>(
    reader: &mut Reader,
    buffer: &mut Vec<u8>,
) -> Result<LineRead, ChatError>
where
    Reader: AsyncBufRead + Unpin,
{
    buffer.clear();
    let mut overlong = false;
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(if buffer.is_empty() || overlong {
                LineRead::Closed
            } else {
                LineRead::Complete
            });
        }

        let (taken, finished) = match available.iter().position(|byte| *byte == b'\n') {
            Some(index) => (index + 1, true),
            None => (available.len(), false),
        };
        if !overlong {
            if buffer.len() + taken > MAX_LINE_BYTES {
                overlong = true;
                buffer.clear();
            } else {
                buffer.extend_from_slice(available.get(..taken).unwrap_or_default());
            }
        }
        reader.consume(taken);

        if finished {
            return Ok(if overlong {
                LineRead::Overlong
            } else {
                LineRead::Complete
            });
        }
    }
}

async fn register<Writer>(
    writer: &mut LineWriter<Writer>,
    settings: &IrcSettings,
) -> Result<(), ChatError>
where
    Writer: AsyncWrite + Unpin,
{
    if let Some(password) = &settings.password {
        writer.send(&Command::Pass(password.clone())).await?;
    }
    writer.send(&Command::Nick(settings.nickname.clone())).await?;
    writer
        .send(&Command::User {
            user: settings.nickname.clone(),
            realname: settings.nickname.clone(),
        })
        .await
}

/// Converts a `PRIVMSG` into the dispatcher's input. Channel messages are
/// answered in the channel; private messages are answered to the sender.
fn inbound_message(message: &IrcMessage) -> Option<InboundMessage> {
    let prefix = message.prefix.as_ref()?;
    let target = message.param(0)?;
    let text = message.params.get(1)?;

    let reply_target = if is_channel(target) {
        target.to_owned()
    } else {
        prefix.nick.clone()
    };

    Some(InboundMessage {
        sender: Identity::new(
            prefix.nick.clone(),
            prefix.user.clone().unwrap_or_default(),
        ),
        target: reply_target,
        text: text.clone(),
    })
}

fn is_channel(target: &str) -> bool {
    target.starts_with(['#', '&', '+', '!'])
}

/// Connects, runs the session, and reconnects after [`RECONNECT_DELAY`]
/// whenever the connection ends. Only returns on a fatal error.
///
/// # Errors
///
/// Returns the first error for which [`ChatError::is_fatal`] holds.
pub async fn run_forever<Gateway>(
    connector: &IrcConnector,
    settings: &IrcSettings,
    dispatcher: &Dispatcher<Gateway>,
) -> Result<(), ChatError>
where
    Gateway: IssueGateway,
{
    loop {
        info!(host = %settings.host, port = settings.port, "connecting to IRC server");
        let outcome = match connector.connect().await {
            Ok(stream) => run_session(stream, settings, dispatcher).await,
            Err(error) => Err(error),
        };

        match outcome {
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => warn!(%error, "IRC connection ended"),
            Ok(()) => warn!("IRC connection ended"),
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
