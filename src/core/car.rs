use crate::core::facade::CarFacade;
use crate::domain::model::{BodyStyle, DamageCategory, Manufacturer, Part, PartStatus, SharedPart};
use crate::domain::ports::OutputSink;
use std::cell::RefCell;
use std::rc::Rc;

const PART_LAYOUT: [DamageCategory; 3] = [
    DamageCategory::Suspension,
    DamageCategory::Tires,
    DamageCategory::Engine,
];

pub struct Car {
    manufacturer: Manufacturer,
    model: String,
    body_style: BodyStyle,
    owner: RefCell<Option<String>>,
    parts: Vec<SharedPart>,
    facade: CarFacade,
}

impl Car {
    pub fn new(
        manufacturer: Manufacturer,
        model: impl Into<String>,
        body_style: BodyStyle,
        sink: Rc<dyn OutputSink>,
    ) -> Self {
        let parts: Vec<SharedPart> = PART_LAYOUT.iter().copied().map(Part::shared).collect();
        let facade = CarFacade::assemble(&parts, sink);
        let model = model.into();

        tracing::debug!(%manufacturer, %model, %body_style, "car assembled");

        Self {
            manufacturer,
            model,
            body_style,
            owner: RefCell::new(None),
            parts,
            facade,
        }
    }

    pub fn ford(model: impl Into<String>, body_style: BodyStyle, sink: Rc<dyn OutputSink>) -> Self {
        Self::new(Manufacturer::Ford, model, body_style, sink)
    }

    pub fn fiat(model: impl Into<String>, body_style: BodyStyle, sink: Rc<dyn OutputSink>) -> Self {
        Self::new(Manufacturer::Fiat, model, body_style, sink)
    }

    pub fn manufacturer(&self) -> Manufacturer {
        self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn body_style(&self) -> BodyStyle {
        self.body_style
    }

    pub fn owner(&self) -> Option<String> {
        self.owner.borrow().clone()
    }

    /// Overwrites the owner. No validation, no history.
    pub fn set_owner(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(model = %self.model, owner = %name, "owner changed");
        *self.owner.borrow_mut() = Some(name);
    }

    pub fn facade(&self) -> &CarFacade {
        &self.facade
    }

    pub fn parts(&self) -> &[SharedPart] {
        &self.parts
    }

    pub fn part(&self, category: DamageCategory) -> Option<SharedPart> {
        self.parts
            .iter()
            .find(|part| part.borrow().category() == category)
            .cloned()
    }

    pub fn status(&self) -> Vec<PartStatus> {
        self.parts
            .iter()
            .map(|part| PartStatus::from(&*part.borrow()))
            .collect()
    }
}

impl std::fmt::Debug for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Car")
            .field("manufacturer", &self.manufacturer)
            .field("model", &self.model)
            .field("body_style", &self.body_style)
            .field("owner", &self.owner.borrow())
            .field("parts", &self.status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;

    #[test]
    fn test_car_has_one_part_per_category_in_fixed_order() {
        let car = Car::ford("Ford Fusion", BodyStyle::Sedan, Rc::new(MemorySink::new()));
        let categories: Vec<DamageCategory> =
            car.parts().iter().map(|part| part.borrow().category()).collect();

        assert_eq!(categories, PART_LAYOUT.to_vec());
        assert!(car.status().iter().all(|status| status.condition == 100));
    }

    #[test]
    fn test_manufacturer_variants_only_differ_in_label() {
        let sink: Rc<dyn OutputSink> = Rc::new(MemorySink::new());
        let ford = Car::ford("Ford Fusion", BodyStyle::Sedan, Rc::clone(&sink));
        let fiat = Car::fiat("Fiat Stilo 2.4", BodyStyle::Hatchback, sink);

        assert_eq!(ford.manufacturer(), Manufacturer::Ford);
        assert_eq!(fiat.manufacturer(), Manufacturer::Fiat);
        assert_eq!(ford.model(), "Ford Fusion");
        assert_eq!(fiat.body_style(), BodyStyle::Hatchback);
        assert_eq!(ford.status(), fiat.status());
    }

    #[test]
    fn test_set_owner_overwrites() {
        let car = Car::fiat("Fiat Stilo 2.4", BodyStyle::Hatchback, Rc::new(MemorySink::new()));
        assert_eq!(car.owner(), None);

        car.set_owner("Dimon");
        car.set_owner("");
        assert_eq!(car.owner().as_deref(), Some(""));
    }

    #[test]
    fn test_facade_damage_is_visible_through_car_parts() {
        let car = Car::ford("Ford Fusion", BodyStyle::Sedan, Rc::new(MemorySink::new()));
        car.facade().brake();

        let suspension = car.part(DamageCategory::Suspension).unwrap();
        assert_eq!(suspension.borrow().condition(), 40);
    }
}
