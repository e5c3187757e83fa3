use std::{collections::BTreeSet, thread};

use idcounter::EagerCounter;

// This is the only test in this binary, so nothing else draws from the
// process-wide eager counter while it runs.
#[test]
fn concurrent_callers_receive_contiguous_ids() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(EagerCounter::instance().last_id(), 0);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            thread::spawn(|| {
                let instance = EagerCounter::instance();
                (0..250).map(|_| instance.next_id()).collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "ID {} was issued twice", id);
        }
    }

    let expected: BTreeSet<u64> = (1..=4000).collect();
    assert_eq!(ids, expected);
    assert_eq!(EagerCounter::instance().last_id(), 4000);
}
