use crate::domain::model::{DamageCategory, SharedPart};
use crate::domain::ports::{DamageObserver, OutputSink};
use std::rc::Rc;

/// Wear applied to each matching part per notification.
pub const DAMAGE_PER_HIT: u32 = 60;

pub struct DamageHandler {
    parts: Vec<SharedPart>,
    sink: Rc<dyn OutputSink>,
}

impl DamageHandler {
    pub fn new(parts: Vec<SharedPart>, sink: Rc<dyn OutputSink>) -> Self {
        Self { parts, sink }
    }
}

impl DamageObserver for DamageHandler {
    fn handle_damage(&self, category: DamageCategory) {
        for part in &self.parts {
            let mut part = part.borrow_mut();
            if part.category() == category {
                part.damage(DAMAGE_PER_HIT, self.sink.as_ref());
            }
        }
    }
}
