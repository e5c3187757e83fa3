use idcounter::{EagerCounter, LazyCounter, Strategy};

#[test]
fn strategies_keep_separate_sequences() {
    let eager = Strategy::Eager.generator();
    let lazy = Strategy::Lazy.generator();

    let eager_ids: Vec<u64> = (0..5).map(|_| eager.next_id()).collect();
    assert_eq!(eager_ids, vec![1, 2, 3, 4, 5]);

    // Draining the eager counter has no effect on the lazy one.
    assert_eq!(LazyCounter::global().last_id(), 0);
    let lazy_ids: Vec<u64> = (0..3).map(|_| lazy.next_id()).collect();
    assert_eq!(lazy_ids, vec![1, 2, 3]);

    assert_eq!(EagerCounter::instance().next_id(), 6);
    assert_eq!(LazyCounter::instance().next_id(), 4);
}
