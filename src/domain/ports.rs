use crate::domain::model::DamageCategory;
use std::rc::Rc;

/// Receives every human-readable line the car produces.
pub trait OutputSink {
    fn line(&self, text: &str);
}

pub trait DamageObserver {
    fn handle_damage(&self, category: DamageCategory);
}

pub trait DamageSubject {
    fn subscribe(&self, observer: &Rc<dyn DamageObserver>);
    fn unsubscribe(&self, observer: &Rc<dyn DamageObserver>);
    fn notify(&self, category: DamageCategory);
}
