use crate::domain::model::DamageCategory;
use crate::domain::ports::{DamageObserver, DamageSubject, OutputSink};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Driving controls. Every control action that wears the car out is broadcast
/// to the subscribed damage observers.
///
/// The router never owns its observers: it keeps `Weak` handles in
/// subscription order and skips (and forgets) the ones that were dropped.
pub struct DamageRouter {
    observers: RefCell<Vec<Weak<dyn DamageObserver>>>,
    sink: Rc<dyn OutputSink>,
}

impl DamageRouter {
    pub fn new(sink: Rc<dyn OutputSink>) -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            sink,
        }
    }

    pub fn accelerate(&self) {
        self.sink.line("Step On The Gas");
        self.notify(DamageCategory::Tires);
    }

    pub fn brake(&self) {
        self.sink.line("Hit the Brake");
        self.notify(DamageCategory::Suspension);
    }

    pub fn change_gear(&self) {
        self.sink.line("Change Gear");
    }

    pub fn steer(&self, angle: f32) {
        self.sink.line(&format!("Turn The Rudder on angle: {}", angle));
    }

    /// Live subscriptions, duplicates included.
    pub fn subscriber_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }
}

impl DamageSubject for DamageRouter {
    fn subscribe(&self, observer: &Rc<dyn DamageObserver>) {
        self.observers.borrow_mut().push(Rc::downgrade(observer));
    }

    fn unsubscribe(&self, observer: &Rc<dyn DamageObserver>) {
        let mut observers = self.observers.borrow_mut();
        let target = Rc::as_ptr(observer);
        if let Some(index) = observers
            .iter()
            .position(|candidate| std::ptr::addr_eq(candidate.as_ptr(), target))
        {
            observers.remove(index);
        }
    }

    fn notify(&self, category: DamageCategory) {
        // Collect first: an observer may (un)subscribe while being notified.
        let live: Vec<Rc<dyn DamageObserver>> = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|observer| observer.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };

        tracing::debug!(%category, observers = live.len(), "dispatching damage notification");

        for observer in live {
            observer.handle_damage(category);
        }
    }
}
