use crate::reducer::Reducer;
use serde::Serialize;

pub struct Container<S: 'static, A: 'static> {
    state: S,
    reducer: Reducer<S, A>,
}

pub trait ContainerInterface<A> {
    fn dispatch(&mut self, action: &A) -> bool;
    fn get_state_serialized(&self) -> Result<String, serde_json::Error>;
}

impl<S, A> Container<S, A> {
    pub fn with_reducer(state: S, reducer: Reducer<S, A>) -> Container<S, A> {
        Container { state, reducer }
    }
    pub fn dispatch(&mut self, action: &A) -> bool {
        match (self.reducer)(&self.state, action) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }
    pub fn get_state(&self) -> &S {
        &self.state
    }
}

impl<S, A> ContainerInterface<A> for Container<S, A>
where
    S: Serialize,
{
    fn dispatch(&mut self, action: &A) -> bool {
        Container::dispatch(self, action)
    }
    fn get_state_serialized(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }
}
