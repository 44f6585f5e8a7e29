use super::Drill;
use crate::lang::Error;

/// Outcome of one loop iteration.
#[derive(Debug, PartialEq)]
pub enum Step {
    /// The iteration produced one line of output.
    Emit(String),
    /// The iteration ran but printed nothing.
    Continue,
    /// The drill has finished. Every later step is also `Done`.
    Done,
}

/// ## Live state of a running drill
///
/// Holds the loop counter and the accumulator. Both start fresh
/// every time a drill is framed so reruns never share state.

#[derive(Debug, Clone)]
pub struct Frame {
    drill: Drill,
    to: i64,
    next: Option<i64>,
    acc: i64,
    finished: bool,
}

impl Frame {
    pub fn new(drill: Drill) -> Frame {
        let (next, to) = match drill.bounds() {
            Some((from, to)) => (Some(from), to),
            None => (None, 0),
        };
        Frame {
            drill,
            to,
            next,
            acc: 0,
            finished: false,
        }
    }

    pub fn drill(&self) -> Drill {
        self.drill
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> Result<Step, Error> {
        let i = match self.next {
            Some(i) => i,
            None => return Ok(self.finish()),
        };
        // Stop on equality so a range ending at i64::MAX never increments past it.
        self.next = if i == self.to { None } else { Some(i + 1) };
        let drill = self.drill;
        let name = drill.name();
        match drill {
            Drill::Range { .. } => Ok(Step::Emit(format!("Iteration is: {}", i))),
            Drill::EvenSum { .. } => {
                if i % 2 == 0 {
                    self.acc = match self.acc.checked_add(i) {
                        Some(acc) => acc,
                        None => return Err(self.fail(error!(Overflow, name))),
                    };
                }
                Ok(Step::Continue)
            }
            Drill::Chars { text } => match text.chars().nth(i as usize) {
                Some(ch) => Ok(Step::Emit(ch.to_string())),
                None => Err(self.fail(error!(InternalError, name; "INDEX OUT OF RANGE"))),
            },
            Drill::Table { multiplicand, .. } => match multiplicand.checked_mul(i) {
                Some(product) => Ok(Step::Emit(format!(
                    "{} * {} = {}",
                    multiplicand, i, product
                ))),
                None => Err(self.fail(error!(Overflow, name))),
            },
        }
    }

    fn finish(&mut self) -> Step {
        if self.finished {
            return Step::Done;
        }
        self.finished = true;
        match self.drill {
            Drill::EvenSum { .. } => Step::Emit(format!("Sum of even numbers is: {}", self.acc)),
            _ => Step::Done,
        }
    }

    fn fail(&mut self, error: Error) -> Error {
        self.next = None;
        self.finished = true;
        error
    }
}

/// Yields each output line, skipping silent iterations.
impl Iterator for Frame {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Ok(Step::Emit(line)) => return Some(Ok(line)),
                Ok(Step::Continue) => {}
                Ok(Step::Done) => return None,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
