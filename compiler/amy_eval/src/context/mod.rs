//! Per-run execution context: output sink, input source and the module
//! whose code is currently executing.
//!
//! A context is created once per run and threaded by `&mut` through every
//! evaluation step. Sinks and sources use enum dispatch; the set of
//! destinations is closed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use amy_ir::Name;
use parking_lot::Mutex;

/// Cloneable handle to captured program output.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<String>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&self, text: &str) {
        self.0.lock().push_str(text);
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// Where program output goes.
#[derive(Debug)]
pub enum OutputSink {
    /// Process stdout (default).
    Stdout,
    /// Captured in memory for embedders and tests.
    Buffer(SharedBuffer),
    /// Discarded.
    Silent,
}

impl OutputSink {
    pub fn write(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
                    tracing::warn!(%err, "failed to write program output");
                }
            }
            Self::Buffer(buffer) => buffer.push_str(text),
            Self::Silent => {}
        }
    }

    /// The capture buffer, for `Buffer` sinks.
    pub fn buffer(&self) -> Option<&SharedBuffer> {
        match self {
            Self::Buffer(buffer) => Some(buffer),
            Self::Stdout | Self::Silent => None,
        }
    }
}

/// Where input built-ins read lines from.
#[derive(Debug)]
pub enum InputSource {
    /// Process stdin (default).
    Stdin,
    /// Pre-supplied lines, consumed front to back.
    Lines(VecDeque<String>),
    /// Always at end of input.
    Empty,
}

impl InputSource {
    /// Lines of `text`, split on `\n` or `\r\n`.
    pub fn scripted(text: &str) -> Self {
        Self::Lines(text.lines().map(str::to_owned).collect())
    }

    /// Next line without its terminator, `None` at end of input.
    ///
    /// A host read error counts as end of input.
    pub fn read_line(&mut self) -> Option<String> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) => None,
                    Ok(_) => Some(strip_line_terminator(line)),
                    Err(err) => {
                        tracing::warn!(%err, "failed to read stdin; treating as end of input");
                        None
                    }
                }
            }
            Self::Lines(lines) => lines.pop_front(),
            Self::Empty => None,
        }
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Run-scoped state handed to every evaluation step.
#[derive(Debug)]
pub struct ExecContext {
    output: OutputSink,
    input: InputSource,
    current_module: Option<Name>,
}

impl ExecContext {
    pub fn new(output: OutputSink, input: InputSource) -> Self {
        Self {
            output,
            input,
            current_module: None,
        }
    }

    /// Context bound to the process's stdout and stdin.
    pub fn stdio() -> Self {
        Self::new(OutputSink::Stdout, InputSource::Stdin)
    }

    /// Context that captures output and reads the lines of `input`.
    ///
    /// ```text
    /// let (mut ctx, output) = ExecContext::captured("42\n");
    /// run(&program, &interner, &mut ctx)?;
    /// assert_eq!(output.contents(), "42\n");
    /// ```
    pub fn captured(input: &str) -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let ctx = Self::new(
            OutputSink::Buffer(buffer.clone()),
            InputSource::scripted(input),
        );
        (ctx, buffer)
    }

    #[inline]
    pub fn write(&self, text: &str) {
        self.output.write(text);
    }

    /// Write `text` followed by a line terminator.
    pub fn write_line(&self, text: &str) {
        let mut line = String::with_capacity(text.len().saturating_add(1));
        line.push_str(text);
        line.push('\n');
        self.output.write(&line);
    }

    #[inline]
    pub fn read_line(&mut self) -> Option<String> {
        self.input.read_line()
    }

    pub fn output(&self) -> &OutputSink {
        &self.output
    }

    #[inline]
    pub fn current_module(&self) -> Option<Name> {
        self.current_module
    }

    /// Replace the current module, returning the previous one.
    #[inline]
    pub fn set_current_module(&mut self, module: Option<Name>) -> Option<Name> {
        std::mem::replace(&mut self.current_module, module)
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::stdio()
    }
}
