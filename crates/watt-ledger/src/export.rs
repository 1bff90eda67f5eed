use fs2::FileExt;
use std::io::Write;
use std::path::Path;
use watt_core::{Bill, BillingError};

/// Append every bill's export line to the file at `path`, one record per
/// line, no header. The file is created if missing and always opened in
/// append mode, so repeated exports duplicate lines rather than dedupe.
///
/// The file is held under an exclusive lock for the duration of the call so
/// two processes cannot interleave lines. Lines written before an I/O
/// failure remain in the file; there is no rollback.
pub fn export_to_path(bills: &[Bill], path: &Path) -> Result<usize, BillingError> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.lock_exclusive()?;

    let written = export_to_writer(bills, &mut file)?;
    tracing::debug!(written, path = %path.display(), "ledger exported");
    Ok(written)
}

/// Write export lines to any sink. Returns the number of lines written;
/// on failure, lines already written stay written.
pub fn export_to_writer<W: Write>(bills: &[Bill], out: &mut W) -> Result<usize, BillingError> {
    let mut written = 0;
    for bill in bills {
        writeln!(out, "{}", bill.export_line())?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use watt_core::Consumer;

    fn bill(id: &str, name: &str, units: i64) -> Bill {
        Bill::new(Consumer::new(id, name, units).unwrap()).unwrap()
    }

    #[test]
    fn export_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.txt");
        let bills = vec![bill("C1", "Alice", 50), bill("C2", "Bob", 250)];

        let written = export_to_path(&bills, &path).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "C1,Alice,50,125.00\nC2,Bob,250,575.00\n");
    }

    #[test]
    fn repeated_export_appends_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.txt");
        let bills = vec![bill("C1", "Alice", 50), bill("C2", "Bob", 250)];

        export_to_path(&bills, &path).unwrap();
        export_to_path(&bills, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn export_to_unwritable_path_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let err = export_to_path(&[bill("C1", "Alice", 50)], dir.path()).unwrap_err();
        assert!(matches!(err, BillingError::ExportIo(_)));
    }

    #[test]
    fn empty_ledger_exports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.txt");
        assert_eq!(export_to_path(&[], &path).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    /// Writer that fails after a fixed number of successful writes.
    struct FailAfter {
        ok_lines: usize,
        inner: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.ok_lines == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            if buf == b"\n" {
                self.ok_lines -= 1;
            }
            self.inner.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn partial_write_before_failure_is_kept() {
        let bills = vec![bill("C1", "Alice", 50), bill("C2", "Bob", 250)];
        let mut out = FailAfter {
            ok_lines: 1,
            inner: Vec::new(),
        };

        let err = export_to_writer(&bills, &mut out).unwrap_err();
        assert!(matches!(err, BillingError::ExportIo(_)));
        // The first record survived; nothing rolled it back.
        let kept = String::from_utf8(out.inner).unwrap();
        assert_eq!(kept, "C1,Alice,50,125.00\n");
    }
}
