use crate::{pipe, reducer, Container, Reducer};

#[derive(Clone, Debug, Default, PartialEq)]
struct CounterState {
    initialized: bool,
    count: i32,
}

enum CounterAction {
    Increment,
    Decrement,
    Noop,
}

fn counter_reducers() -> Reducer<CounterState, CounterAction> {
    pipe(vec![
        // replaces an uninitialized state before the counter reducers run
        reducer(|state: &CounterState, _| {
            if state.initialized {
                None
            } else {
                Some(CounterState {
                    initialized: true,
                    count: 0,
                })
            }
        }),
        reducer(|state: &CounterState, action| match action {
            CounterAction::Increment => Some(CounterState {
                count: state.count + 1,
                ..state.clone()
            }),
            _ => None,
        }),
        reducer(|state: &CounterState, action| match action {
            CounterAction::Decrement => Some(CounterState {
                count: state.count - 1,
                ..state.clone()
            }),
            _ => None,
        }),
    ])
}

#[test]
fn increment_counts_up_from_the_default_state() {
    let mut container = Container::with_reducer(CounterState::default(), counter_reducers());
    assert!(
        container.dispatch(&CounterAction::Increment),
        "the counter has changed"
    );
    assert_eq!(
        container.get_state(),
        &CounterState {
            initialized: true,
            count: 1,
        },
        "bootstrap runs before the increment"
    );
}

#[test]
fn bootstrap_resets_an_uninitialized_state_first() {
    let mut container = Container::with_reducer(
        CounterState {
            initialized: false,
            count: 41,
        },
        counter_reducers(),
    );
    container.dispatch(&CounterAction::Increment);
    assert_eq!(
        container.get_state(),
        &CounterState {
            initialized: true,
            count: 1,
        },
        "the increment applies to the bootstrapped state"
    );
}

#[test]
fn decrement_counts_down() {
    let mut container = Container::with_reducer(
        CounterState {
            initialized: true,
            count: 2,
        },
        counter_reducers(),
    );
    container.dispatch(&CounterAction::Decrement);
    container.dispatch(&CounterAction::Decrement);
    assert_eq!(
        container.get_state(),
        &CounterState {
            initialized: true,
            count: 0,
        },
        "each dispatch applies one decrement"
    );
}

#[test]
fn unknown_actions_leave_the_counter_untouched() {
    let mut container = Container::with_reducer(
        CounterState {
            initialized: true,
            count: 3,
        },
        counter_reducers(),
    );
    assert!(!container.dispatch(&CounterAction::Noop), "nothing changed");
    assert_eq!(
        container.get_state(),
        &CounterState {
            initialized: true,
            count: 3,
        },
        "the count is kept"
    );
}
