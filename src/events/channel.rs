//! Event channel implementation using crossbeam-channel.
//!
//! Carries harness events from the batch loop to whichever layer renders
//! them, possibly on another thread.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use super::Event;

/// Sends events from the harness.
///
/// Cheap to clone; every clone feeds the same receiver.
#[derive(Clone)]
pub struct EventSender {
    inner: Sender<Event>,
}

impl EventSender {
    /// Wrap a raw crossbeam sender
    pub fn new(sender: Sender<Event>) -> Self {
        Self { inner: sender }
    }

    /// Send an event, blocking only while a bounded channel is full.
    ///
    /// If the receiver is gone the event is dropped.
    pub fn send(&self, event: Event) {
        // No listener means no reporting, not a failed batch
        let _ = self.inner.send(event);
    }
}

/// Receives events on the reporting side
pub struct EventReceiver {
    inner: Receiver<Event>,
}

impl EventReceiver {
    /// Block until the next event arrives or every sender is dropped
    pub fn recv(&self) -> Option<Event> {
        self.inner.recv().ok()
    }

    /// Take the next event if one is waiting
    pub fn try_recv(&self) -> Option<Event> {
        self.inner.try_recv().ok()
    }

    /// Iterate until every sender is dropped
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.inner.iter()
    }
}

/// Constructor for sender/receiver pairs
pub struct EventChannel;

impl EventChannel {
    /// Create an unbounded event channel
    pub fn new() -> (EventSender, EventReceiver) {
        let (sender, receiver) = unbounded();
        (
            EventSender { inner: sender },
            EventReceiver { inner: receiver },
        )
    }

    /// Create a bounded channel; the harness waits when `capacity` events
    /// are unread.
    pub fn bounded(capacity: usize) -> (EventSender, EventReceiver) {
        let (sender, receiver) = bounded(capacity);
        (
            EventSender { inner: sender },
            EventReceiver { inner: receiver },
        )
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        EventChannel
    }
}

/// A sender nobody listens to, for runs without a reporting layer
pub fn null_sender() -> EventSender {
    let (sender, _receiver) = EventChannel::new();
    sender
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{HarnessEvent, HarnessPhase};
    use std::thread;

    #[test]
    fn events_can_be_sent_across_threads() {
        let (sender, receiver) = EventChannel::new();

        let handle = thread::spawn(move || {
            sender.send(Event::Harness(HarnessEvent::Started { pairs: 5, seed: 7 }));
        });

        handle.join().unwrap();

        match receiver.recv().unwrap() {
            Event::Harness(HarnessEvent::Started { pairs, seed }) => {
                assert_eq!(pairs, 5);
                assert_eq!(seed, 7);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn null_sender_does_not_panic() {
        let sender = null_sender();
        sender.send(Event::Harness(HarnessEvent::PhaseChanged {
            phase: HarnessPhase::Generating,
        }));
    }

    #[test]
    fn bounded_channel_respects_capacity() {
        let (sender, receiver) = EventChannel::bounded(2);
        let phase = HarnessPhase::SelfTest;

        sender.send(Event::Harness(HarnessEvent::PhaseChanged { phase }));
        sender.send(Event::Harness(HarnessEvent::PhaseChanged { phase }));

        assert!(receiver.try_recv().is_some());
        assert!(receiver.try_recv().is_some());
        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn receiver_iteration_ends_when_senders_drop() {
        let (sender, receiver) = EventChannel::new();
        let clone = sender.clone();
        sender.send(Event::Harness(HarnessEvent::Error {
            message: "first".to_string(),
        }));
        clone.send(Event::Harness(HarnessEvent::Error {
            message: "second".to_string(),
        }));
        drop(sender);
        drop(clone);
        assert_eq!(receiver.iter().count(), 2);
    }
}
