use std::{
    io::{self, BufWriter, Write},
    path::Path,
    thread,
};

use anyhow::{anyhow, ensure, Context};
use fs_err as fs;
use idcounter::{CounterExhausted, IdGenerator, Strategy};

use crate::{
    config::Config,
    options::{GlobalOptions, IssueOptions},
};

pub fn issue(global: GlobalOptions, options: IssueOptions) -> anyhow::Result<()> {
    let config = Config::load(global.config.as_deref())?;
    let settings = IssueSettings::resolve(&options, &config);

    log::info!(
        "Drawing {} IDs from the {} counter on each of {} threads",
        settings.per_caller,
        settings.strategy,
        settings.callers
    );

    let ids = draw_concurrently(
        settings.strategy.generator(),
        settings.callers,
        settings.per_caller,
        options.checked,
    )?;

    match options.output {
        Some(path) => {
            write_json(&path, &ids)?;

            log::info!("Wrote {} IDs to {}", ids.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut output = BufWriter::new(stdout.lock());

            for id in &ids {
                writeln!(output, "{}", id)?;
            }

            output.flush()?;
        }
    }

    Ok(())
}

/// The settings `idgen issue` runs with once flags have been layered over the
/// config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IssueSettings {
    pub strategy: Strategy,
    pub callers: usize,
    pub per_caller: usize,
}

impl IssueSettings {
    pub(crate) fn resolve(options: &IssueOptions, config: &Config) -> Self {
        Self {
            strategy: options.strategy.unwrap_or(config.strategy),
            callers: options.callers.unwrap_or(config.callers),
            per_caller: options.per_caller.unwrap_or(config.per_caller),
        }
    }
}

fn write_json(path: &Path, ids: &[u64]) -> anyhow::Result<()> {
    if let Some(output_folder) = path.parent() {
        fs::create_dir_all(output_folder)?;
    }

    let mut file = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut file, ids)?;
    file.flush()?;

    Ok(())
}

/// Spawns `callers` threads that each draw `per_caller` IDs from `generator`
/// and returns every issued ID in ascending order.
pub(crate) fn draw_concurrently(
    generator: &dyn IdGenerator,
    callers: usize,
    per_caller: usize,
    checked: bool,
) -> anyhow::Result<Vec<u64>> {
    draw_on_threads(generator, callers, per_caller, checked, |index| {
        thread::Builder::new().name(format!("idgen-caller-{}", index))
    })
}

fn draw_on_threads<F>(
    generator: &dyn IdGenerator,
    callers: usize,
    per_caller: usize,
    checked: bool,
    make_builder: F,
) -> anyhow::Result<Vec<u64>>
where
    F: Fn(usize) -> thread::Builder,
{
    ensure!(callers > 0, "At least one caller is needed to draw IDs.");

    let batches = thread::scope(|scope| -> anyhow::Result<Vec<Vec<u64>>> {
        let mut handles = Vec::new();

        for index in 0..callers {
            // Threads that did start are joined when the scope ends.
            let handle = make_builder(index)
                .spawn_scoped(scope, move || draw_batch(generator, per_caller, checked))
                .with_context(|| {
                    format!(
                        "Failed to start thread {} of {} to draw IDs",
                        index + 1,
                        callers
                    )
                })?;

            handles.push(handle);
        }

        handles
            .into_iter()
            .map(|handle| -> anyhow::Result<Vec<u64>> {
                let batch = handle
                    .join()
                    .map_err(|_| anyhow!("A thread drawing IDs panicked"))?;

                Ok(batch?)
            })
            .collect()
    })?;

    let mut ids: Vec<u64> = batches.into_iter().flatten().collect();
    ids.sort_unstable();

    log::debug!("{} threads drew {} IDs", callers, ids.len());

    Ok(ids)
}

fn draw_batch(
    generator: &dyn IdGenerator,
    count: usize,
    checked: bool,
) -> Result<Vec<u64>, CounterExhausted> {
    (0..count)
        .map(|_| {
            if checked {
                generator.try_next_id()
            } else {
                Ok(generator.next_id())
            }
        })
        .collect()
}
