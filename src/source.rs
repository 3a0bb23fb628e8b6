use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lines of a log with the line ending stripped. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD instead of failing the scan.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

pub fn log_lines<R: BufRead>(reader: R) -> LogLines<R> {
    LogLines {
        reader,
        buf: Vec::new(),
    }
}

pub fn open_log(path: &Path) -> io::Result<LogLines<BufReader<File>>> {
    Ok(log_lines(BufReader::new(File::open(path)?)))
}
