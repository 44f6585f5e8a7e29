use crate::error;
use crate::lang::{Drill, Error, Frame, Step};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// ## Drill runner
///
/// Drills run one after another in the order they were queued.
/// Call `execute` repeatedly until it reports `Event::Stopped`.

pub struct Runtime {
    queue: VecDeque<Drill>,
    frame: Option<Frame>,
    pending: Option<Error>,
    interrupted: bool,
}

/// What the runtime did during one `execute` slice.
#[derive(Debug, PartialEq)]
pub enum Event {
    Errors(Arc<Vec<Error>>),
    Print(String),
    Running,
    Stopped,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Drill::all().iter().copied())
    }
}

impl Runtime {
    pub fn new<T: IntoIterator<Item = Drill>>(drills: T) -> Runtime {
        Runtime {
            queue: drills.into_iter().collect(),
            frame: None,
            pending: None,
            interrupted: false,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.frame.is_none() && self.queue.is_empty() && self.pending.is_none()
    }

    /// Break out of whatever is running. Queued drills are discarded.
    pub fn interrupt(&mut self) {
        // A deferred error means the run already ended.
        if self.frame.is_some() || !self.queue.is_empty() {
            self.interrupted = true;
        }
    }

    /// Runs at most `cycles` loop iterations.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.pending.take() {
            return Event::Errors(Arc::new(vec![error]));
        }
        if self.interrupted {
            self.interrupted = false;
            if let Some(frame) = &self.frame {
                debug!(drill = %frame.drill(), "interrupted");
            }
            self.halt();
            return Event::Errors(Arc::new(vec![error!(Break)]));
        }
        let mut output = String::new();
        let mut ran = 0;
        while ran < cycles {
            if self.frame.is_none() {
                match self.queue.pop_front() {
                    Some(drill) => {
                        debug!(drill = %drill, "drill started");
                        self.frame = Some(drill.frame());
                    }
                    None => break,
                }
            }
            let step = match self.frame.as_mut() {
                Some(frame) => frame.step(),
                None => break,
            };
            ran += 1;
            match step {
                Ok(Step::Emit(line)) => {
                    output.push_str(&line);
                    output.push('\n');
                }
                Ok(Step::Continue) => {}
                Ok(Step::Done) => {
                    if let Some(frame) = self.frame.take() {
                        debug!(drill = %frame.drill(), "drill finished");
                    }
                }
                Err(error) => {
                    debug!(%error, "drill failed");
                    self.halt();
                    if output.is_empty() {
                        return Event::Errors(Arc::new(vec![error]));
                    }
                    self.pending = Some(error);
                    break;
                }
            }
        }
        trace!(cycles = ran, bytes = output.len(), "slice");
        if !output.is_empty() {
            Event::Print(output)
        } else if self.is_stopped() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn halt(&mut self) {
        self.queue.clear();
        self.frame = None;
    }
}
