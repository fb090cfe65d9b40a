//! In-memory output sink
//!
//! `print` writes to any `Box<dyn Write>`. [`OutputBuffer`] is a cloneable
//! handle onto one shared byte buffer, so a caller can hand one clone to the
//! interpreter and read the text back through another.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Shared, growable capture buffer
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8 (lossily)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Take the captured text, leaving the buffer empty
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
