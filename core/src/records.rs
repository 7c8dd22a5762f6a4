//! [`RecordLog`] implementations.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rentr_common::records::{RecordLog, RentalRecord};
use tracing::trace;

/// Appends records to a text file, one line each.
///
/// The file is opened for every record and closed again before `append`
/// returns, on success and on failure alike.
pub struct FileRecordLog {
    path: PathBuf,
}

impl FileRecordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordLog for FileRecordLog {
    fn append(&self, record: &RentalRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{record}")?;
        trace!(path = %self.path.display(), "rental record appended");
        Ok(())
    }
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemoryRecordLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryRecordLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl RecordLog for MemoryRecordLog {
    fn append(&self, record: &RentalRecord) -> io::Result<()> {
        self.lines.borrow_mut().push(record.to_string());
        Ok(())
    }
}
