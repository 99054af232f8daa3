//! Concurrency properties of the counter pair.
//!
//! The accumulators must never lose an update no matter how many threads
//! hammer them, and a reset must leave a quiescent pair at exactly zero.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use redis_lens::lens::CommandCounters;

const THREADS: usize = 8;
const RECORDS_PER_THREAD: usize = 5_000;

#[test]
fn concurrent_records_lose_nothing() {
    let counters = Arc::new(CommandCounters::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let counters = counters.clone();
            thread::spawn(move || {
                for _ in 0..RECORDS_PER_THREAD {
                    counters.record(Duration::from_micros(3));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("recorder thread panicked");
    }

    let snap = counters.snapshot();
    let expected = (THREADS * RECORDS_PER_THREAD) as u64;

    // Integer-nanosecond accumulation is exact, not just approximate.
    assert_eq!(snap.calls, expected);
    assert_eq!(snap.elapsed, Duration::from_micros(3 * expected));
}

#[test]
fn concurrent_batch_records_sum_their_calls() {
    let counters = Arc::new(CommandCounters::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let counters = counters.clone();
            thread::spawn(move || {
                for _ in 0..RECORDS_PER_THREAD {
                    counters.record_calls(Duration::from_nanos(100), 5);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("recorder thread panicked");
    }

    assert_eq!(
        counters.snapshot().calls,
        (THREADS * RECORDS_PER_THREAD * 5) as u64
    );
}

#[test]
fn quiescent_reset_reads_exactly_zero() {
    let counters = CommandCounters::new();
    counters.record(Duration::from_millis(12));
    counters.record(Duration::from_millis(8));

    counters.reset();

    let snap = counters.snapshot();
    assert_eq!(snap.calls, 0);
    assert_eq!(snap.elapsed, Duration::ZERO);
}

#[test]
fn pair_is_usable_after_racing_resets() {
    // Resets racing with records are tolerated — the pair must come out the
    // other side still functional, and a final quiescent reset still zeroes.
    let counters = Arc::new(CommandCounters::new());

    let recorder = {
        let counters = counters.clone();
        thread::spawn(move || {
            for _ in 0..RECORDS_PER_THREAD {
                counters.record(Duration::from_nanos(50));
            }
        })
    };
    let resetter = {
        let counters = counters.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                counters.reset();
                thread::yield_now();
            }
        })
    };

    recorder.join().expect("recorder thread panicked");
    resetter.join().expect("resetter thread panicked");

    counters.reset();
    assert_eq!(counters.snapshot().calls, 0);

    counters.record(Duration::from_micros(7));
    let snap = counters.snapshot();
    assert_eq!(snap.calls, 1);
    assert_eq!(snap.elapsed, Duration::from_micros(7));
}
