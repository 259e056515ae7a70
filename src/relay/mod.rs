//! Message handling: ignore filter, reference lookup, and reply formatting.
//!
//! [`Dispatcher::handle`] is the whole per-message pipeline. It takes an
//! inbound chat message and returns the reply lines to send, so it can be
//! driven by any transport (and by tests) without a live connection.

mod dispatcher;
mod responder;

pub use dispatcher::{Dispatcher, InboundMessage, OutboundLine};
pub use responder::{BOLD, IgnoreList, Identity, format_reply, should_ignore};
