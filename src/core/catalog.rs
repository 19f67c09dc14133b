use crate::core::car::Car;
use crate::domain::model::BodyStyle;
use std::rc::Rc;

/// Cars on sale. The catalog shares the cars rather than owning them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cars: Vec<Rc<Car>>,
}

impl Catalog {
    pub fn new(cars: Vec<Rc<Car>>) -> Self {
        Self { cars }
    }

    pub fn cars(&self) -> &[Rc<Car>] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn filter_by_body_style(&self, style: BodyStyle) -> Vec<Rc<Car>> {
        self.cars
            .iter()
            .filter(|car| car.body_style() == style)
            .cloned()
            .collect()
    }

    pub fn transfer_ownership(&self, car: &Car, new_owner: &str) {
        tracing::info!(model = car.model(), owner = new_owner, "car sold");
        car.set_owner(new_owner);
    }
}
