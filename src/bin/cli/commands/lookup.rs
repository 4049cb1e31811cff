//! The default command: resolve tokens, or list everything.

use std::io::{self, Write};

use tracing::debug;

use crate::cli::args::LookupArgs;
use crate::cli::config_layer::build_layered_config;
use crate::cli::output::{OutputSink, RunSummary};
use errknow::{Lookup, LookupResolver, Vocabulary};

/// Resolve every token in `args`, or dump the vocabulary when there are none.
///
/// Failed lookups are reported and never change the outcome; only config and
/// stream errors make this return `Err`. A reader that closes the pipe early
/// ends the run quietly.
pub fn lookup_command(args: LookupArgs) -> anyhow::Result<()> {
    let config = build_layered_config(&args)?;
    let vocabulary = Vocabulary::platform();
    debug!(entries = vocabulary.iter_present().count(), "loaded vocabulary");

    let resolver = LookupResolver::new(&vocabulary, config.matching);
    let sink = OutputSink::new(config.output, io::stdout().lock(), io::stderr().lock());

    let written = if args.tokens.is_empty() {
        write_lookups(sink, resolver.dump())
    } else {
        // Tokens that are not valid UTF-8 are looked up by their lossy text.
        let lookups = args
            .tokens
            .iter()
            .map(|token| resolver.resolve(&token.to_string_lossy()));
        write_lookups(sink, lookups)
    };

    if let Some(RunSummary { resolved, failed }) = stop_on_broken_pipe(written)? {
        debug!(resolved, failed, "lookup finished");
    }
    Ok(())
}

/// Emit each lookup in order, then flush.
fn write_lookups<W: Write, E: Write>(
    mut sink: OutputSink<W, E>,
    lookups: impl Iterator<Item = Lookup>,
) -> io::Result<RunSummary> {
    for lookup in lookups {
        sink.emit(&lookup)?;
    }
    sink.finish()
}

/// A closed pipe is a normal stop, not a failure.
fn stop_on_broken_pipe<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
