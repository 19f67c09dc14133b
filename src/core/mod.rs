pub mod car;
pub mod catalog;
pub mod damage;
pub mod diagnostic;
pub mod facade;
pub mod router;
pub mod scenario;

pub use crate::domain::model::{BodyStyle, DamageCategory, Manufacturer, Part, SharedPart};
pub use crate::domain::ports::{DamageObserver, DamageSubject, OutputSink};
pub use crate::utils::error::Result;
