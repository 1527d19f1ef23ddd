use std::fs::File;
use std::io::{self, prelude::*};

/// Read a file line by line into a mutable buffer, counting lines as it goes
pub struct BufReader<R = io::BufReader<File>> {
    reader: R,
    line: usize,
}

impl BufReader {
    /// Opens the file from the path into a reader
    pub fn open(path: impl AsRef<std::path::Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);

        Ok(Self { reader, line: 0 })
    }
}

impl<R: BufRead> BufReader<R> {
    /// Wraps anything that is already buffered
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// Reads a line from the buffer reader to mutable string, None at the end
    /// of the file
    pub fn read_line<'buf>(&mut self,
                           buffer: &'buf mut String)
                           -> Option<io::Result<&'buf mut String>> {
        buffer.clear();

        let line = &mut self.line;
        self.reader
            .read_line(buffer)
            .map(|u| {
                if u == 0 {
                    None
                } else {
                    *line += 1;
                    Some(buffer)
                }
            })
            .transpose()
    }

    /// The 1-based number of the last line returned, 0 before any read
    pub fn line_number(&self) -> usize {
        self.line
    }
}
