/// Receives events from a solver and optionally steers it.
///
/// `E` is the solver's event type and `A` its action type. Returning `None`
/// lets the solver continue unchanged.
pub trait Observer<E, A> {
    /// Observes one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure is an observer.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The unit observer ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
