//! # Events Module
//!
//! Event-driven progress reporting for validation batches.
//!
//! ## Design
//! The harness emits events through channels, so any reporting layer
//! (coloured console, structured log, file) can subscribe and render
//! records however it likes.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Test(TestEvent::Record(r)) = event {
//!             println!("{} {} {:.2}%", r.category, r.right, r.similarity);
//!         }
//!     }
//! });
//!
//! harness.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
