use std::{
    collections::BTreeSet,
    sync::{Arc, Barrier},
    thread,
};

use idcounter::{InitState, LazyCounter, Strategy};

const CALLERS: usize = 50;

fn one_id_per_caller(strategy: Strategy) -> BTreeSet<u64> {
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                strategy.generator().next_id()
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect()
}

#[test]
fn eager_then_lazy() {
    let _ = env_logger::builder().is_test(true).try_init();

    let expected: BTreeSet<u64> = (1..=CALLERS as u64).collect();

    assert_eq!(one_id_per_caller(Strategy::Eager), expected);

    assert_eq!(LazyCounter::global().state(), InitState::Uninitialized);
    assert_eq!(one_id_per_caller(Strategy::Lazy), expected);
    assert_eq!(LazyCounter::global().constructions(), 1);
}
