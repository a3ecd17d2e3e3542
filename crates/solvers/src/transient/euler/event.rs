/// Emitted by the Euler solver once per recorded input.
///
/// Step 0 carries the initial input; step `n` the input reached after `n`
/// integration steps.
#[derive(Debug, Clone)]
pub struct Event<I> {
    pub step: usize,
    pub input: I,
}
