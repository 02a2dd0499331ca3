/// A state reducer: returns `Some(next)` to replace the state or `None` to
/// keep the previous one.
pub type Reducer<S, A> = Box<dyn Fn(&S, &A) -> Option<S>>;

pub fn reducer<S, A, F>(f: F) -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(&S, &A) -> Option<S> + 'static,
{
    Box::new(f)
}
