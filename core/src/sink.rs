use crate::report::{EquivError, Failure};

/// Trait for streaming failures to a consumer.
pub trait FailureSink {
    /// Called once before any failures are emitted.
    ///
    /// Default is a no-op so sinks that don't need setup can ignore it.
    fn begin(&mut self) -> Result<(), EquivError> {
        Ok(())
    }

    fn report(&mut self, failure: Failure) -> Result<(), EquivError>;

    fn finish(&mut self) -> Result<(), EquivError> {
        Ok(())
    }
}

/// A sink that collects failures into a Vec for compatibility.
pub struct VecSink {
    failures: Vec<Failure>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureSink for VecSink {
    fn report(&mut self, failure: Failure) -> Result<(), EquivError> {
        self.failures.push(failure);
        Ok(())
    }
}

/// A sink that forwards failures to a callback.
pub struct CallbackSink<F: FnMut(Failure)> {
    f: F,
}

impl<F: FnMut(Failure)> CallbackSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Failure)> FailureSink for CallbackSink<F> {
    fn report(&mut self, failure: Failure) -> Result<(), EquivError> {
        (self.f)(failure);
        Ok(())
    }
}
