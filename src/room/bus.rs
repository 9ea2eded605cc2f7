use super::event::{Event, Topic};
use std::panic::AssertUnwindSafe;
use std::panic::catch_unwind;

/// Process-local synchronous publish/subscribe for lifecycle events.
///
/// Delivery happens inline on the room's thread, in emission order; there is
/// no queue and no cross-process reach. A handler that panics is logged and
/// skipped so observers can never change the outcome of a hand.
#[derive(Default)]
pub struct Bus {
    subs: Vec<Sub>,
    next: usize,
}

/// Handle returned by [Bus::on]; pass it back to [Bus::off] to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(usize);

struct Sub {
    topic: Topic,
    token: Token,
    handler: Box<dyn FnMut(&Event) + Send>,
}

impl Bus {
    pub fn on<F>(&mut self, topic: Topic, handler: F) -> Token
    where
        F: FnMut(&Event) + Send + 'static,
    {
        let token = Token(self.next);
        self.next += 1;
        self.subs.push(Sub {
            topic,
            token,
            handler: Box::new(handler),
        });
        token
    }

    pub fn off(&mut self, token: Token) {
        self.subs.retain(|sub| sub.token != token);
    }

    pub fn emit(&mut self, event: &Event) {
        let topic = event.topic();
        for sub in self.subs.iter_mut().filter(|sub| sub.topic == topic) {
            if catch_unwind(AssertUnwindSafe(|| (sub.handler)(event))).is_err() {
                log::warn!("{} handler panicked, ignoring", sub.topic);
            }
        }
    }
}
