//! In-process model of the asynchronous frame boundary.
//!
//! Each side of the boundary owns a single-consumer FIFO inbox. Posting
//! never blocks; messages are processed one at a time in arrival order by
//! the owning side's event loop. There are no threads and no locks —
//! ordering comes solely from sequential draining.

use crate::bridge::{Bridge, ReplySink};
use crate::client::CommandSender;
use scormkit_protocol::{Command, Reply, WireMessage};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One side's event-loop inbox.
pub struct Mailbox<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Mailbox {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// A cloneable posting end for the other side of the boundary.
    pub fn sender(&self) -> MailboxSender<T> {
        MailboxSender {
            queue: Rc::clone(&self.queue),
        }
    }

    pub fn post(&self, msg: T) {
        self.queue.borrow_mut().push_back(msg);
    }

    /// Pop the next message in arrival order.
    pub fn next(&self) -> Option<T> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// The posting end of a [`Mailbox`].
pub struct MailboxSender<T> {
    queue: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Clone for MailboxSender<T> {
    fn clone(&self) -> Self {
        MailboxSender {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<T> MailboxSender<T> {
    pub fn post(&self, msg: T) {
        self.queue.borrow_mut().push_back(msg);
    }
}

impl CommandSender for MailboxSender<WireMessage> {
    fn send(&self, cmd: Command) {
        self.post(cmd.encode());
    }
}

impl ReplySink for Mailbox<WireMessage> {
    fn deliver(&self, reply: Reply) {
        self.post(reply.encode());
    }
}

/// Run one bridge-side event-loop turn: drain the inbox, handing each
/// message to the bridge in arrival order.
///
/// `content` stands in for the message origin the real channel would
/// attach to each event.
pub fn pump_bridge(bridge: &mut Bridge, inbox: &Mailbox<WireMessage>, content: &Rc<dyn ReplySink>) {
    while let Some(msg) = inbox.next() {
        bridge.handle_message(&msg, Some(content));
    }
}

/// Run one content-side event-loop turn: decode queued replies and feed
/// them to `on_reply`. Undecodable messages are dropped silently.
pub fn pump_content(inbox: &Mailbox<WireMessage>, mut on_reply: impl FnMut(Reply)) {
    while let Some(msg) = inbox.next() {
        if let Some(reply) = Reply::decode(&msg) {
            on_reply(reply);
        }
    }
}
