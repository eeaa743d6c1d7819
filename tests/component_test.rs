use marketplace::ui::core::{update_component_child, Cmd, Component, Immutable, UpdateReturn};

/// Counter that reports every increment through a command
#[derive(Debug, Clone, PartialEq)]
struct Counter {
    count: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum CounterMsg {
    Increment,
    Incremented(u32),
}

impl Component for Counter {
    type Params = u32;
    type Msg = CounterMsg;

    fn init(start: u32) -> Self {
        Self { count: start }
    }

    fn update(state: Immutable<Self>, msg: CounterMsg) -> UpdateReturn<Self, CounterMsg> {
        match msg {
            CounterMsg::Increment => {
                let state = state.update(|counter| counter.count += 1);
                let count = state.count;
                (state, Cmd::msg(CounterMsg::Incremented(count)))
            }
            CounterMsg::Incremented(_) => (state, Cmd::none()),
        }
    }
}

#[derive(Debug, Clone)]
struct Parent {
    counters: Vec<Immutable<Counter>>,
    label: Immutable<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum ParentMsg {
    Counter { index: usize, msg: CounterMsg },
}

fn update_parent(state: Immutable<Parent>, msg: ParentMsg) -> UpdateReturn<Parent, ParentMsg> {
    match msg {
        ParentMsg::Counter { index, msg } => update_component_child(
            state,
            |parent: &Parent| parent.counters.get(index).cloned(),
            |parent: &mut Parent, child| parent.counters[index] = child,
            msg,
            move |msg| ParentMsg::Counter { index, msg },
        ),
    }
}

fn parent() -> Immutable<Parent> {
    Immutable::new(Parent {
        counters: vec![Immutable::new(Counter::init(0)), Immutable::new(Counter::init(10))],
        label: Immutable::new("counters".to_string()),
    })
}

#[tokio::test]
async fn test_child_commands_are_rewrapped_with_parent_variant() {
    let (state, cmd) = update_parent(
        parent(),
        ParentMsg::Counter {
            index: 1,
            msg: CounterMsg::Increment,
        },
    );
    assert_eq!(state.counters[1].count, 11);
    assert_eq!(
        cmd.collect().await,
        vec![ParentMsg::Counter {
            index: 1,
            msg: CounterMsg::Incremented(11)
        }]
    );
}

#[test]
fn test_child_update_shares_untouched_siblings() {
    let before = parent();
    let (after, _) = update_parent(
        before.clone(),
        ParentMsg::Counter {
            index: 0,
            msg: CounterMsg::Increment,
        },
    );
    assert_eq!(before.counters[0].count, 0);
    assert!(Immutable::ptr_eq(&before.counters[1], &after.counters[1]));
    assert!(Immutable::ptr_eq(&before.label, &after.label));
}

#[test]
fn test_missing_child_leaves_parent_untouched() {
    let before = parent();
    let (after, cmd) = update_parent(
        before.clone(),
        ParentMsg::Counter {
            index: 5,
            msg: CounterMsg::Increment,
        },
    );
    assert!(cmd.is_none());
    assert!(Immutable::ptr_eq(&before, &after));
}
