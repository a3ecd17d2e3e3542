/// A callable that maps a typed input to a typed output.
///
/// Implementations must be deterministic: calling a model twice with equal
/// inputs yields equal outputs. Solvers rely on this to reproduce a run
/// exactly.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model.
    ///
    /// # Errors
    ///
    /// Returns the model's own error type when the input cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
