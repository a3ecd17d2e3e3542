use crate::{DerivativeOf, StepIntegrable};

/// Describes how a model is integrated as an ordinary differential equation.
///
/// The problem pulls the integrable state out of a model input, reads the
/// state's derivative from the model input and output, and rebuilds the next
/// model input once the state has been stepped. Solvers only ever see the
/// model through this adapter.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the integrable state from a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input carries no usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the state derivative at the given input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be formed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the next model input from the previous one and a stepped state.
    ///
    /// `delta` is the step that produced `state`, so problems that track an
    /// independent variable (usually time) can advance it here.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be rebuilt.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
