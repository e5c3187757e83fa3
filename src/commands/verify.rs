use anyhow::{bail, ensure};
use idcounter::{InitState, LazyCounter, Strategy};

use crate::{
    commands::issue::draw_concurrently,
    config::Config,
    options::{GlobalOptions, VerifyOptions},
};

pub fn verify(global: GlobalOptions, options: VerifyOptions) -> anyhow::Result<()> {
    let config = Config::load(global.config.as_deref())?;
    let callers = options.callers.unwrap_or(config.callers);

    let lazy = LazyCounter::global();
    ensure!(
        lazy.state() == InitState::Uninitialized,
        "The lazy counter was built before verification started."
    );

    for &strategy in &[Strategy::Eager, Strategy::Lazy] {
        log::info!(
            "Drawing one ID from the {} counter on each of {} threads",
            strategy,
            callers
        );

        let ids = draw_concurrently(strategy.generator(), callers, 1, true)?;
        check_contiguous(strategy, &ids, callers)?;

        println!("{}: {} callers received IDs 1 through {}", strategy, callers, callers);
    }

    let constructions = lazy.constructions();
    ensure!(
        constructions == 1,
        "The lazy counter was built {} times, expected exactly once.",
        constructions
    );

    println!("lazy: built exactly once");

    Ok(())
}

/// Checks that a sorted list of IDs is exactly `1..=expected_count`.
fn check_contiguous(strategy: Strategy, ids: &[u64], expected_count: usize) -> anyhow::Result<()> {
    for (expected, &actual) in (1..).zip(ids) {
        if actual == expected {
            continue;
        }

        if expected > 1 && actual == expected - 1 {
            bail!("The {} counter issued ID {} twice.", strategy, actual);
        }

        bail!(
            "The {} counter skipped ID {}; the next ID issued was {}.",
            strategy,
            expected,
            actual
        );
    }

    ensure!(
        ids.len() == expected_count,
        "The {} counter issued {} IDs to {} callers.",
        strategy,
        ids.len(),
        expected_count
    );

    Ok(())
}
