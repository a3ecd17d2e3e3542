/// A state that can be advanced along its own derivative.
///
/// `Delta` is the increment of the independent variable, typically a time
/// step. Implementations decide how the derivative is applied, which lets a
/// state keep the exact floating-point evaluation order its equations call for.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state one step of size `delta` later.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
