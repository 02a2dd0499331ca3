/// Resolves the state after one reducer step: given the previous state and the
/// reducer's output, returns `Some(next)` to adopt a new state or `None` to
/// keep the previous one.
pub type CompareFn<S> = Box<dyn Fn(&S, Option<S>) -> Option<S>>;

/// Builds a `CompareFn` closed over the state the combined reducer was
/// invoked with.
pub type Compare<S> = Box<dyn Fn(&S) -> CompareFn<S>>;

/// Adopts whatever the reducer produced.
pub fn default_compare<S: 'static>() -> Compare<S> {
    Box::new(|_| Box::new(|_, current| current))
}

/// Adopts the reducer's output only when it differs from the previous state,
/// so no-op writes are reported as unchanged.
pub fn eq_compare<S: PartialEq + 'static>() -> Compare<S> {
    Box::new(|_| Box::new(|prev, current| current.filter(|next| next != prev)))
}
