use crate::compare::{default_compare, Compare};
use crate::reducer::Reducer;

/// Calls each given reducer in order with the previously resolved state and
/// the action.
///
/// The combined reducer is itself a [`Reducer`]: it returns `None` when no
/// step produced an adopted state (always the case for an empty sequence) and
/// `Some(final)` otherwise, so pipes can be nested inside other pipes.
///
/// # Examples
///
/// ```
/// use reducer_pipe::{pipe, reducer, Reducer};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct State(u32);
/// struct Action;
///
/// let reducers: Vec<Reducer<State, Action>> = vec![
///     reducer(|_, _| None),
///     reducer(|_, _| Some(State(1))),
///     reducer(|_, _| Some(State(2))),
/// ];
/// let combined = pipe(reducers);
///
/// // the last adopted write wins
/// assert_eq!(combined(&State(0), &Action), Some(State(2)));
/// ```
pub fn pipe<S, A>(reducers: Vec<Reducer<S, A>>) -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    pipe_with(default_compare(), reducers)
}

/// Like [`pipe`], with an explicit comparison factory deciding after every
/// step whether to adopt the reducer's output or keep the prior state.
pub fn pipe_with<S, A>(compare: Compare<S>, reducers: Vec<Reducer<S, A>>) -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    Box::new(move |state, action| {
        let compare_fn = compare(state);
        reducers.iter().fold(None, |saved, reducer| {
            let resolved = {
                let prev = saved.as_ref().unwrap_or(state);
                compare_fn(prev, reducer(prev, action))
            };
            resolved.or(saved)
        })
    })
}

/// Curried form of [`pipe_with`]: fixes the comparison factory now, takes the
/// reducers later. `with_compare(c).reducers(rs)` is equivalent to
/// `pipe_with(c, rs)`.
pub fn with_compare<S: 'static>(compare: Compare<S>) -> PipeBuilder<S> {
    PipeBuilder { compare }
}

pub struct PipeBuilder<S: 'static> {
    compare: Compare<S>,
}

impl<S: 'static> PipeBuilder<S> {
    pub fn reducers<A: 'static>(self, reducers: Vec<Reducer<S, A>>) -> Reducer<S, A> {
        pipe_with(self.compare, reducers)
    }
}
