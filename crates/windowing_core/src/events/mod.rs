//! Typed publish/subscribe events
//!
//! An [`Event`] owns an ordered list of listeners. Listeners are called
//! synchronously, in subscription order, on the thread that invokes the event.
//! Key principles:
//! - No queuing: `invoke` delivers immediately
//! - Re-entrant: callbacks may subscribe or unsubscribe while being invoked
//! - Token based removal: `subscribe` hands out a [`ListenerId`] that is the
//!   only way to detach the listener again
//!
//! # Removal during invocation
//!
//! `invoke` walks a snapshot of the subscription order taken when it starts.
//! Before each callback runs the listener is looked up again, so a listener
//! removed by an earlier callback of the same invocation is skipped. Listeners
//! added during an invocation are first called by the next `invoke`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Opaque token identifying one subscription on one [`Event`]
    pub struct ListenerId;
}

/// Something that can receive the payload of an [`Event`]
///
/// Every `Fn(&A)` closure is a listener. Implement the trait directly for
/// objects that are shared between several events and subscribe them with
/// [`Event::subscribe_listener`].
pub trait Listener<A: ?Sized> {
    /// Handle one invocation of the event
    fn on_event(&self, args: &A);
}

impl<A: ?Sized, F: Fn(&A)> Listener<A> for F {
    fn on_event(&self, args: &A) {
        self(args);
    }
}

type Callback<A> = Rc<dyn Fn(&A)>;

struct Listeners<A> {
    callbacks: SlotMap<ListenerId, Callback<A>>,
    order: Vec<ListenerId>,
}

/// Single-threaded broadcast event carrying a payload of type `A`
///
/// Use a tuple for several arguments (`Event<(f32, f32)>`) and `()` for none.
pub struct Event<A> {
    listeners: RefCell<Listeners<A>>,
}

impl<A: 'static> Event<A> {
    /// Create an event with no listeners
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Listeners {
                callbacks: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Register a callback, returning the token needed to remove it
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&A) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.callbacks.insert(Rc::new(callback));
        listeners.order.push(id);
        log::trace!("Listener {:?} subscribed ({} total)", id, listeners.order.len());
        id
    }

    /// Register a shared listener object
    pub fn subscribe_listener<L>(&self, listener: Rc<L>) -> ListenerId
    where
        L: Listener<A> + 'static,
    {
        self.subscribe(move |args: &A| listener.on_event(args))
    }

    /// Remove a subscription
    ///
    /// Unknown or already removed tokens are ignored. Returns whether a
    /// listener was actually removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.callbacks.remove(id).is_none() {
            return false;
        }
        listeners.order.retain(|existing| *existing != id);
        log::trace!("Listener {:?} unsubscribed ({} left)", id, listeners.order.len());
        true
    }

    /// Call every registered listener with `args`, in subscription order
    pub fn invoke(&self, args: A) {
        let snapshot = self.listeners.borrow().order.clone();
        for id in snapshot {
            // No borrow may be held while the callback runs.
            let callback = self.listeners.borrow().callbacks.get(id).cloned();
            if let Some(callback) = callback {
                callback(&args);
            }
        }
    }

    /// Check whether `id` is still registered on this event
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners.borrow().callbacks.contains_key(id)
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.borrow().order.len()
    }

    /// True when nobody listens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscription
    pub fn clear(&self) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.callbacks.clear();
        listeners.order.clear();
    }
}

impl<A: 'static> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listeners.borrow().order.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_invoke_in_subscription_order() {
        let event = Event::<u32>::new();
        let calls = recorder();

        let log = Rc::clone(&calls);
        event.subscribe(move |_| log.borrow_mut().push("first"));
        let log = Rc::clone(&calls);
        event.subscribe(move |_| log.borrow_mut().push("second"));

        event.invoke(7);

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_payload_is_delivered() {
        let event = Event::<(f32, f32)>::new();
        let seen = Rc::new(Cell::new((0.0, 0.0)));

        let sink = Rc::clone(&seen);
        event.subscribe(move |&(x, y)| sink.set((x, y)));
        event.invoke((1.5, -2.0));

        assert_eq!(seen.get(), (1.5, -2.0));
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let event = Event::<()>::new();
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        let id = event.subscribe(move |_| counter.set(counter.get() + 1));
        event.invoke(());
        assert!(event.unsubscribe(id));
        event.invoke(());

        assert_eq!(count.get(), 1);
        assert!(event.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let event = Event::<()>::new();
        let id = event.subscribe(|_| {});

        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));
        assert!(!event.unsubscribe(ListenerId::default()));
        assert_eq!(event.len(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_not_reissued() {
        let event = Event::<()>::new();
        let first = event.subscribe(|_| {});
        let second = event.subscribe(|_| {});
        assert_ne!(first, second);

        event.unsubscribe(first);
        let third = event.subscribe(|_| {});
        assert_ne!(first, third);
        assert!(!event.is_subscribed(first));
        assert!(event.is_subscribed(third));
    }

    #[test]
    fn test_listener_unsubscribes_itself_during_invoke() {
        let event = Rc::new(Event::<()>::new());
        let calls = recorder();
        let self_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let log = Rc::clone(&calls);
        event.subscribe(move |_| log.borrow_mut().push("before"));

        let log = Rc::clone(&calls);
        let weak_event = Rc::downgrade(&event);
        let slot = Rc::clone(&self_id);
        let id = event.subscribe(move |_| {
            log.borrow_mut().push("once");
            if let (Some(event), Some(id)) = (weak_event.upgrade(), slot.get()) {
                event.unsubscribe(id);
            }
        });
        self_id.set(Some(id));

        let log = Rc::clone(&calls);
        event.subscribe(move |_| log.borrow_mut().push("after"));

        event.invoke(());
        event.invoke(());

        assert_eq!(
            *calls.borrow(),
            vec!["before", "once", "after", "before", "after"]
        );
    }

    #[test]
    fn test_removing_later_sibling_mid_invoke_skips_it() {
        let event = Rc::new(Event::<()>::new());
        let calls = recorder();
        let victim: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let weak_event = Rc::downgrade(&event);
        let target = Rc::clone(&victim);
        let log = Rc::clone(&calls);
        event.subscribe(move |_| {
            log.borrow_mut().push("remover");
            if let (Some(event), Some(id)) = (weak_event.upgrade(), target.get()) {
                event.unsubscribe(id);
            }
        });

        let log = Rc::clone(&calls);
        victim.set(Some(event.subscribe(move |_| log.borrow_mut().push("victim"))));

        let log = Rc::clone(&calls);
        event.subscribe(move |_| log.borrow_mut().push("bystander"));

        event.invoke(());

        assert_eq!(*calls.borrow(), vec!["remover", "bystander"]);
        assert_eq!(event.len(), 2);
    }

    #[test]
    fn test_subscribe_during_invoke_is_deferred() {
        let event = Rc::new(Event::<()>::new());
        let count = Rc::new(Cell::new(0));

        let weak_event = Rc::downgrade(&event);
        let counter = Rc::clone(&count);
        let added = Rc::new(Cell::new(false));
        event.subscribe(move |_| {
            if added.replace(true) {
                return;
            }
            if let Some(event) = weak_event.upgrade() {
                let counter = Rc::clone(&counter);
                event.subscribe(move |_| counter.set(counter.get() + 1));
            }
        });

        event.invoke(());
        assert_eq!(count.get(), 0);

        event.invoke(());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_shared_listener_object() {
        struct Tally(Cell<u32>);

        impl Listener<u32> for Tally {
            fn on_event(&self, args: &u32) {
                self.0.set(self.0.get() + args);
            }
        }

        let event = Event::<u32>::new();
        let tally = Rc::new(Tally(Cell::new(0)));
        event.subscribe_listener(Rc::clone(&tally));

        event.invoke(3);
        event.invoke(4);

        assert_eq!(tally.0.get(), 7);
    }

    #[test]
    fn test_clear_removes_everything() {
        let event = Event::<()>::new();
        let id = event.subscribe(|_| {});
        event.subscribe(|_| {});

        event.clear();

        assert!(event.is_empty());
        assert!(!event.is_subscribed(id));
    }
}
