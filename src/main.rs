use std::path::PathBuf;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use labelgen_rs::{output, GeneratorConfig};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(structopt::StructOpt)]
/// Generate "vertex on label" match queries for the graph benchmark harness,
/// one query per synthetic label.
struct Options {
    /// Number of labels to generate queries for. Negative values produce no
    /// output; pass them as --count=-N.
    #[structopt(long, env = "LABEL_COUNT", default_value = "10", allow_hyphen_values = true)]
    count: i64,

    /// Prefix of every label name. Label `i` is named `<prefix><i>`.
    #[structopt(long, env = "LABEL_PREFIX", default_value = "Label")]
    prefix: String,

    /// Write queries to this file instead of standard output
    #[structopt(long, short)]
    output: Option<PathBuf>,

    /// Draw a progress bar on standard error
    #[structopt(long)]
    progress: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("labelgen_rs=warn")),
        )
        .init();

    let opts = Options::from_args();

    let config = GeneratorConfig::default()
        .with_count(opts.count)
        .with_prefix(opts.prefix);

    let progress = if opts.progress {
        let bar = ProgressBar::new(config.label_count());
        bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} queries"));
        bar
    } else {
        ProgressBar::hidden()
    };

    let out = output::open(opts.output.as_deref())?;

    labelgen_rs::generate(&config, out, &progress).with_context(|| {
        format!(
            "generating {} queries with prefix {:?}",
            config.label_count(),
            config.prefix
        )
    })?;

    progress.finish_and_clear();

    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use labelgen_rs::GeneratorConfig;

    use super::Options;

    #[test]
    fn test_flags() {
        let opts = Options::from_iter(&["labelgen", "--count", "3", "--prefix", "Tag", "-o", "out.cypher"]);

        assert_eq!(opts.count, 3);
        assert_eq!(opts.prefix, "Tag");
        assert_eq!(opts.output.as_deref(), Some(std::path::Path::new("out.cypher")));
        assert!(!opts.progress);
    }

    #[test]
    fn test_negative_count() {
        let opts = Options::from_iter(&["labelgen", "--count=-4", "--prefix=L"]);

        assert_eq!(opts.count, -4);
    }

    // The environment is process-global, so every env-dependent case lives in
    // this one test.
    #[test]
    fn test_env_fallback() {
        std::env::remove_var("LABEL_COUNT");
        std::env::remove_var("LABEL_PREFIX");

        let defaults = GeneratorConfig::default();
        let opts = Options::from_iter(&["labelgen"]);
        assert_eq!(opts.count, 10);
        assert_eq!(opts.prefix, "Label");
        assert_eq!(opts.count, defaults.count);
        assert_eq!(opts.prefix, defaults.prefix);

        std::env::set_var("LABEL_COUNT", "-2");
        std::env::set_var("LABEL_PREFIX", "Env");

        let opts = Options::from_iter(&["labelgen"]);
        assert_eq!(opts.count, -2);
        assert_eq!(opts.prefix, "Env");

        let opts = Options::from_iter(&["labelgen", "--count", "5", "--prefix", "Flag"]);
        assert_eq!(opts.count, 5);
        assert_eq!(opts.prefix, "Flag");

        std::env::remove_var("LABEL_COUNT");
        std::env::remove_var("LABEL_PREFIX");
    }
}
