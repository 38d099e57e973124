use std::io::Write;

use indicatif::ProgressBar;

use crate::{config::GeneratorConfig, error::Result, query::Query};

/// Lines written between progress bar updates.
const PROGRESS_BATCH: u64 = 100;

/// Every query for `config`, in label index order.
pub fn queries(config: &GeneratorConfig) -> impl Iterator<Item = Query<'_>> {
    config.labels().map(Query::vertex_on_label)
}

/// Write one query per label to `out`, each terminated by `\n`, then flush.
/// Returns the number of lines written.
pub fn generate(
    config: &GeneratorConfig,
    mut out: impl Write,
    progress: &ProgressBar,
) -> Result<u64> {
    tracing::debug!(count = config.count, prefix = %config.prefix, "generating queries");

    if config.count < 0 {
        tracing::debug!(count = config.count, "negative label count, nothing to generate");
    }

    let mut written = 0;

    for query in queries(config) {
        writeln!(out, "{}", query)?;
        written += 1;

        if written % PROGRESS_BATCH == 0 {
            progress.inc(PROGRESS_BATCH);
        }
    }

    out.flush()?;
    progress.inc(written % PROGRESS_BATCH);

    tracing::info!(lines = written, "finished generating queries");

    Ok(written)
}
