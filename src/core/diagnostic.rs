use crate::domain::model::SharedPart;
use crate::domain::ports::OutputSink;
use std::rc::Rc;

pub struct DiagnosticService {
    parts: Vec<SharedPart>,
    sink: Rc<dyn OutputSink>,
}

impl DiagnosticService {
    pub fn new(parts: Vec<SharedPart>, sink: Rc<dyn OutputSink>) -> Self {
        Self { parts, sink }
    }

    /// Parts below the repair threshold, in their original order.
    pub fn diagnose(&self) -> Vec<SharedPart> {
        self.sink.line("Diagnostic");
        let worn: Vec<SharedPart> = self
            .parts
            .iter()
            .filter(|part| part.borrow().needs_repair())
            .cloned()
            .collect();
        tracing::debug!(scanned = self.parts.len(), worn = worn.len(), "diagnostic finished");
        worn
    }
}
