use crate::core::damage::DamageHandler;
use crate::core::diagnostic::DiagnosticService;
use crate::core::router::DamageRouter;
use crate::domain::model::SharedPart;
use crate::domain::ports::{DamageObserver, DamageSubject, OutputSink};
use std::rc::Rc;

pub struct Movement {
    sink: Rc<dyn OutputSink>,
}

impl Movement {
    pub fn new(sink: Rc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    pub fn move_forward(&self) {
        self.sink.line("Move Forward");
    }

    pub fn move_backward(&self) {
        self.sink.line("Move Backward");
    }
}

/// Single entry point to a car's subsystems.
pub struct CarFacade {
    router: DamageRouter,
    movement: Movement,
    damage_handler: Rc<DamageHandler>,
    diagnostics: DiagnosticService,
    sink: Rc<dyn OutputSink>,
}

impl CarFacade {
    /// Builds the subsystem graph over `parts` and subscribes the damage
    /// handler to the router.
    pub fn assemble(parts: &[SharedPart], sink: Rc<dyn OutputSink>) -> Self {
        let router = DamageRouter::new(Rc::clone(&sink));
        let movement = Movement::new(Rc::clone(&sink));
        let damage_handler = Rc::new(DamageHandler::new(parts.to_vec(), Rc::clone(&sink)));
        let diagnostics = DiagnosticService::new(parts.to_vec(), Rc::clone(&sink));

        let observer: Rc<dyn DamageObserver> = damage_handler.clone();
        router.subscribe(&observer);

        Self {
            router,
            movement,
            damage_handler,
            diagnostics,
            sink,
        }
    }

    pub fn accelerate(&self) {
        self.movement.move_forward();
        self.router.accelerate();
    }

    pub fn brake(&self) {
        self.movement.move_backward();
        self.router.brake();
    }

    pub fn change_gear(&self) {
        self.router.change_gear();
    }

    pub fn steer(&self, angle: f32) {
        self.router.steer(angle);
    }

    pub fn diagnose(&self) -> Vec<SharedPart> {
        self.diagnostics.diagnose()
    }

    /// Repairs every given part. The parts are not checked against this car
    /// or against the last diagnosis.
    pub fn repair(&self, parts: &[SharedPart]) {
        for part in parts {
            part.borrow_mut().repair(self.sink.as_ref());
        }
    }

    pub fn router(&self) -> &DamageRouter {
        &self.router
    }

    pub fn damage_handler(&self) -> Rc<dyn DamageObserver> {
        self.damage_handler.clone()
    }
}
