use std::fmt::Debug;
use std::io::Write;
use std::sync::atomic::Ordering;
use log::debug;
use num_traits::{PrimInt, Signed};

use crate::data_structures::{Cancellation, Consumer};
use crate::output::{binary, record::ResultRecord, text};
use crate::pipeline::Progress;
use crate::Result;

/// Serializes records as they arrive until `nodes` have been written or every worker is gone
///
/// In binary mode the header is written before anything else, so that an empty graph
/// or a run without a single record still yields a valid file. Whatever was written is
/// flushed, even when the writer stops on an error.
pub(crate) fn write_records<W, O>(
    nodes: usize,
    print: bool,
    results: Consumer<ResultRecord<W>>,
    out: &mut O,
    progress: &Progress,
    cancel: &Cancellation,
) -> Result<usize>
where
    W: PrimInt + Signed + Debug,
    O: Write,
{
    let written = drain(nodes, print, results, out, progress, cancel);
    out.flush()?;
    let written = written?;
    debug!("Writer done, {} records written", written);
    Ok(written)
}

fn drain<W, O>(
    nodes: usize,
    print: bool,
    results: Consumer<ResultRecord<W>>,
    out: &mut O,
    progress: &Progress,
    cancel: &Cancellation,
) -> Result<usize>
where
    W: PrimInt + Signed + Debug,
    O: Write,
{
    if !print {
        binary::write_header(out, nodes)?;
    }

    let mut written = 0;
    while written < nodes {
        // None: all workers exited, possibly after skipping some sources
        let Some(record) = results.pop(cancel)? else {
            break;
        };
        if print {
            text::write_record(out, &record)?;
        } else {
            binary::write_record(out, &record)?;
        }
        written = progress.written.fetch_add(1, Ordering::Relaxed) + 1;
    }
    Ok(written)
}
