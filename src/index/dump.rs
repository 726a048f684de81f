//! Human-readable index dump.
//!
//! One line per word in ascending word order:
//! `word doc1 (0.250000) doc2 (0.100000) `, newline-terminated. The dump is
//! meant for inspection and is never parsed back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::word_tree::IndexTree;
use crate::config::DUMP_PRECISION;
use crate::types::{IndexError, IndexResult};

/// Write the dump of `tree` to `out`.
pub fn write_dump<W: Write>(tree: &IndexTree, out: &mut W) -> IndexResult<()> {
    for node in tree {
        write!(out, "{} ", node.word())?;
        for posting in node.documents() {
            write!(
                out,
                "{} ({:.prec$}) ",
                posting.document,
                posting.term_frequency,
                prec = DUMP_PRECISION
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the dump of `tree` to a file, replacing any previous contents.
pub fn dump_to_file(tree: &IndexTree, path: &Path) -> IndexResult<()> {
    let file = File::create(path).map_err(|e| IndexError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_dump(tree, &mut out)?;
    out.flush().map_err(|e| IndexError::io(path, e))?;
    log::info!("Wrote {} words to {}", tree.len(), path.display());
    Ok(())
}
