//! Synchronous, single-threaded event dispatch.
//!
//! [`Event`] is the notification primitive used throughout the crate: format
//! maps raise change events through it, and the external collaborators
//! (theme source, settings source, rendering surface) expose their events
//! as `&Event<_>` so the registry can subscribe.
//!
//! Emission is synchronous. Every handler subscribed at the moment
//! [`Event::emit`] is called runs before `emit` returns, in subscription
//! order. The handler list is snapshotted first, so a handler may subscribe,
//! unsubscribe or re-emit without corrupting the dispatch in progress.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle identifying one subscription on one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Handler<E> {
    id: SubscriptionId,
    once: bool,
    callback: Rc<dyn Fn(&E)>,
}

/// A list of subscribers for events of type `E`.
pub struct Event<E> {
    handlers: RefCell<Vec<Handler<E>>>,
    next_id: Cell<u64>,
}

impl<E> Event<E> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Registers a handler that runs on every emission.
    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        self.push(handler, false)
    }

    /// Registers a handler that runs on the next emission only.
    pub fn subscribe_once(&self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        self.push(handler, true)
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|h| h.id != id);
        handlers.len() != before
    }

    /// Delivers `event` to every current subscriber.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<Rc<dyn Fn(&E)>> = {
            let mut handlers = self.handlers.borrow_mut();
            let callbacks = handlers.iter().map(|h| Rc::clone(&h.callback)).collect();
            handlers.retain(|h| !h.once);
            callbacks
        };
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Drops every subscription.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    fn push(&self, handler: impl Fn(&E) + 'static, once: bool) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push(Handler {
            id,
            once,
            callback: Rc::new(handler),
        });
        id
    }
}

impl<E> Default for Event<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Event<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(&u32) + Clone + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &u32| sink.borrow_mut().push(*value))
    }

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let event = Event::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            event.subscribe(move |_: &()| order.borrow_mut().push(n));
        }
        event.emit(&());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let event = Event::new();
        let (seen, handler) = recorder();
        let id = event.subscribe(handler);
        event.emit(&1);
        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));
        event.emit(&2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_subscribe_once_fires_once() {
        let event = Event::new();
        let (seen, handler) = recorder();
        event.subscribe_once(handler);
        event.emit(&7);
        event.emit(&8);
        assert_eq!(*seen.borrow(), vec![7]);
        assert_eq!(event.subscriber_count(), 0);
    }

    #[test]
    fn test_handler_may_unsubscribe_itself_during_emit() {
        let event = Rc::new(Event::new());
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let (seen, record) = recorder();

        let weak = Rc::downgrade(&event);
        let slot = Rc::clone(&id_slot);
        let id = event.subscribe(move |value: &u32| {
            record(value);
            if let (Some(event), Some(id)) = (weak.upgrade(), slot.get()) {
                event.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        event.emit(&1);
        event.emit(&2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_subscribers_added_during_emit_wait_for_next_emit() {
        let event = Rc::new(Event::new());
        let (seen, record) = recorder();
        let weak = Rc::downgrade(&event);
        event.subscribe_once(move |_: &u32| {
            if let Some(event) = weak.upgrade() {
                event.subscribe(record.clone());
            }
        });

        event.emit(&1);
        assert!(seen.borrow().is_empty());
        event.emit(&2);
        assert_eq!(*seen.borrow(), vec![2]);
    }
}
