use std::cell::RefCell;
use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Line sink receiving every emitted command
pub trait Printer {
    /// Write `what`, appending a newline if it does not already end with one
    fn print(&mut self, what: &str) -> io::Result<()>;
}

fn write_line<W: Write>(writer: &mut W, what: &str) -> io::Result<()> {
    writer.write_all(what.as_bytes())?;
    if !what.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes commands to standard output as they are emitted
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, what: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_line(&mut handle, what)?;
        handle.flush()
    }
}

/// Writes commands to a file that stays open for the printer's lifetime.
///
/// Output is flushed line by line, so a partial script is on disk even when
/// generation stops early.
#[derive(Debug)]
pub struct FilePrinter {
    file: LineWriter<File>,
}

impl FilePrinter {
    /// Create (or truncate) the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file: LineWriter::new(file),
        })
    }
}

impl Printer for FilePrinter {
    fn print(&mut self, what: &str) -> io::Result<()> {
        write_line(&mut self.file, what)
    }
}

/// Collects commands in memory.
///
/// Clones share the same buffer, so one clone can be handed to a `Script`
/// while another reads the generated text back.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    buffer: Rc<RefCell<String>>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Printed lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.buffer.borrow().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Printer for BufferPrinter {
    fn print(&mut self, what: &str) -> io::Result<()> {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(what);
        if !what.ends_with('\n') {
            buffer.push('\n');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_buffer_printer_appends_newline() {
        let mut printer = BufferPrinter::new();
        printer.print("first").unwrap();
        printer.print("second\n").unwrap();
        assert_eq!(printer.contents(), "first\nsecond\n");
        assert_eq!(printer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_buffer_printer_clones_share_output() {
        let reader = BufferPrinter::new();
        let mut writer = reader.clone();
        writer.print("CreateModule").unwrap();
        assert_eq!(reader.lines(), vec!["CreateModule"]);

        reader.clear();
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn test_stdout_printer_accepts_lines() {
        let mut printer = StdoutPrinter::default();
        assert!(printer.print("SetDesignProperty \"Version\" \"\"").is_ok());
        assert!(printer.print("terminated\n").is_ok());
    }

    #[test]
    fn test_file_printer_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.tcl");

        let mut printer = FilePrinter::create(&path).unwrap();
        printer.print("a").unwrap();
        printer.print("b\n").unwrap();
        printer.print("c").unwrap();

        // Line buffering means the text is visible before the printer is dropped
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_file_printer_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FilePrinter::create(dir.path().join("missing").join("design.tcl"));
        assert!(result.is_err());
    }
}
