//! Per-message orchestration: filter, scan, resolve, look up, format.

use tracing::{debug, trace, warn};

use crate::github::IssueGateway;
use crate::reference::{ReferenceResolver, ReferenceScanner, Resolution};

use super::responder::{IgnoreList, Identity, format_reply};

/// A chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Who sent it.
    pub sender: Identity,
    /// Where replies should go (a channel, or the sender for private
    /// messages).
    pub target: String,
    /// Message body.
    pub text: String,
}

/// One line to send back through the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLine {
    /// Channel or nickname to send to.
    pub target: String,
    /// Formatted reply.
    pub text: String,
}

/// Turns inbound messages into reply lines.
///
/// Holds only read-only state, so one instance serves every message.
pub struct Dispatcher<Gateway>
where
    Gateway: IssueGateway,
{
    gateway: Gateway,
    scanner: ReferenceScanner,
    resolver: ReferenceResolver,
    ignore: IgnoreList,
}

impl<Gateway> Dispatcher<Gateway>
where
    Gateway: IssueGateway,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(
        gateway: Gateway,
        scanner: ReferenceScanner,
        resolver: ReferenceResolver,
        ignore: IgnoreList,
    ) -> Self {
        Self {
            gateway,
            scanner,
            resolver,
            ignore,
        }
    }

    /// Processes one message and returns its replies in reference order.
    ///
    /// Every reference is handled independently: a skip or a failed lookup
    /// drops that reference only. Failures are logged, never replied.
    pub async fn handle(&self, message: &InboundMessage) -> Vec<OutboundLine> {
        if self.ignore.should_ignore(&message.sender) {
            debug!(sender = %message.sender.display, "ignoring message from listed sender");
            return Vec::new();
        }

        let mut replies = Vec::new();
        for candidate in self.scanner.scan(&message.text) {
            let coordinate = match self.resolver.resolve(&candidate) {
                Resolution::Resolved(coordinate) => coordinate,
                Resolution::Skipped(reason) => {
                    trace!(?candidate, ?reason, "reference skipped");
                    continue;
                }
            };

            match self.gateway.issue(&coordinate).await {
                Ok(summary) => replies.push(OutboundLine {
                    target: message.target.clone(),
                    text: format_reply(&summary),
                }),
                Err(error) => {
                    warn!(%coordinate, %error, "issue lookup failed; dropping reference");
                }
            }
        }
        replies
    }
}
