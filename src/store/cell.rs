use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A single value with synchronous change notification.
///
/// Subscribers run in registration order on the calling thread. A new
/// subscriber is called once with the current value right away. Setting a
/// value equal to the current one notifies nobody. A `set` made from inside
/// a subscriber is queued behind the notifications already pending, so every
/// subscriber sees values in order and ends on the current one.
pub struct Observable<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    queue: RefCell<VecDeque<(Subscriber<T>, T)>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            queue: RefCell::new(VecDeque::new()),
            notifying: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        if *self.value.borrow() == value {
            return;
        }
        *self.value.borrow_mut() = value;
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.borrow());
        self.set(next);
    }

    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let subscriber: Subscriber<T> = Rc::new(subscriber);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::clone(&subscriber)));

        let current = self.get();
        subscriber(&current);
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    fn notify(&self) {
        let value = self.get();
        self.queue.borrow_mut().extend(
            self.subscribers
                .borrow()
                .iter()
                .map(|(_, s)| (Rc::clone(s), value.clone())),
        );
        if self.notifying.replace(true) {
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some((subscriber, value)) = next else {
                break;
            };
            subscriber(&value);
        }
        self.notifying.set(false);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
