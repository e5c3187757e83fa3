use std::path::PathBuf;

use idcounter::Strategy;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Hands out process-wide unique IDs from eager or lazy counters")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The config file to read defaults from. If not specified, idgen will
    /// look for idgen.toml in the current directory and fall back to built-in
    /// defaults if there isn't one.
    #[structopt(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Print a handful of IDs from the eager counter, then from the lazy one.
    Demo(DemoOptions),

    /// Draw IDs from many threads at once and print every ID that was issued,
    /// in ascending order.
    Issue(IssueOptions),

    /// Check that concurrent callers receive exactly the IDs 1 through N from
    /// both counters, and that the lazy counter is only built once.
    Verify(VerifyOptions),
}

#[derive(Debug, StructOpt)]
pub struct DemoOptions {
    /// How many IDs to draw from each counter.
    #[structopt(long, default_value = "10")]
    pub count: u32,
}

#[derive(Debug, StructOpt)]
pub struct IssueOptions {
    /// Which counter to draw from.
    ///
    /// Options:
    ///
    /// - eager: The counter that exists before main starts
    ///
    /// - lazy: The counter that is built on first use
    #[structopt(long)]
    pub strategy: Option<Strategy>,

    /// How many threads should draw IDs concurrently.
    #[structopt(long)]
    pub callers: Option<usize>,

    /// How many IDs each thread should draw.
    #[structopt(long)]
    pub per_caller: Option<usize>,

    /// Fail instead of wrapping around if the counter runs out of IDs.
    #[structopt(long)]
    pub checked: bool,

    /// Write the issued IDs to this path as a JSON array instead of printing
    /// them.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct VerifyOptions {
    /// How many threads should each draw a single ID from each counter.
    #[structopt(long)]
    pub callers: Option<usize>,
}
