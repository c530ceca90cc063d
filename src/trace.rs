use std::fmt;
use std::fmt::Arguments;
use std::io;
use std::io::Write;

/// Receives formatted trace lines in place of the byte sink.
pub type DebugHandler = Box<dyn FnMut(&[u8])>;

/// Per-instance diagnostic tracer.
///
/// Verbosity levels: 0 is silent, 1 reports faults, 2 adds one line per
/// executed instruction, 3 and up add register writes and PC detail. Lines
/// are formatted into an instance-local buffer and handed to the handler,
/// the sink, or standard output, in that order of preference.
pub(crate) struct Tracer {
    level: u32,
    sink: Option<Box<dyn Write>>,
    handler: Option<DebugHandler>,
    buffer: Vec<u8>,
}

impl Tracer {
    pub(crate) fn new() -> Self {
        Tracer {
            level: 0,
            sink: None,
            handler: None,
            buffer: Vec::new(),
        }
    }

    pub(crate) fn enabled(&self, level: u32) -> bool {
        self.level >= level
    }

    pub(crate) fn set_level(&mut self, level: u32, sink: Option<Box<dyn Write>>) {
        self.level = level;
        self.sink = sink;
    }

    pub(crate) fn set_handler(&mut self, handler: Option<DebugHandler>) {
        self.handler = handler;
    }

    /// Emit one line if `level` is enabled.
    pub(crate) fn trace(&mut self, level: u32, args: Arguments) {
        if !self.enabled(level) {
            return;
        }

        self.buffer.clear();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push(b'\n');

        if let Some(handler) = &mut self.handler {
            handler(&self.buffer);
        } else if let Some(sink) = &mut self.sink {
            let _ = sink.write_all(&self.buffer);
        } else {
            let _ = io::stdout().write_all(&self.buffer);
        }
    }
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("level", &self.level)
            .field("sink", &self.sink.is_some())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Tracer;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn level_zero_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let captured = Rc::clone(&count);

        let mut tracer = Tracer::new();
        tracer.set_handler(Some(Box::new(move |_| *captured.borrow_mut() += 1)));
        tracer.trace(1, format_args!("dropped"));

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn handler_takes_precedence_over_sink() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&lines);

        let mut tracer = Tracer::new();
        tracer.set_level(2, Some(Box::new(Vec::<u8>::new())));
        tracer.set_handler(Some(Box::new(move |bytes| {
            captured.borrow_mut().push(String::from_utf8_lossy(bytes).into_owned());
        })));

        tracer.trace(2, format_args!("addu"));
        tracer.trace(3, format_args!("too detailed"));

        assert_eq!(lines.borrow().as_slice(), ["addu\n"]);
    }
}
