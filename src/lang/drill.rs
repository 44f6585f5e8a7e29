use super::Frame;
use crate::lang::Error;

/// ## The four loop drills
///
/// Every drill is a counted loop with inclusive bounds. The literals each
/// drill runs with are fixed by the associated constants; `Drill::all()`
/// lists them in the order they run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    /// Print `Iteration is: <i>` for each i in the range.
    Range { from: i64, to: i64 },
    /// Add up every even i in the range, then print the total.
    EvenSum { from: i64, to: i64 },
    /// Print each character of `text` on its own line.
    Chars { text: &'static str },
    /// Print `<m> * <i> = <m*i>` for each i in the range.
    Table { multiplicand: i64, from: i64, to: i64 },
}

impl Drill {
    pub const RANGE: Drill = Drill::Range { from: 1, to: 10 };
    pub const EVEN_SUM: Drill = Drill::EvenSum { from: 1, to: 100 };
    pub const CHARS: Drill = Drill::Chars { text: "JavaScript" };
    pub const TABLE: Drill = Drill::Table {
        multiplicand: 5,
        from: 1,
        to: 10,
    };

    pub fn all() -> [Drill; 4] {
        [Drill::RANGE, Drill::EVEN_SUM, Drill::CHARS, Drill::TABLE]
    }

    pub fn from_name(name: &str) -> Option<Drill> {
        Drill::all().iter().copied().find(|d| d.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Drill::Range { .. } => "range",
            Drill::EvenSum { .. } => "even-sum",
            Drill::Chars { .. } => "chars",
            Drill::Table { .. } => "table",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Drill::Range { .. } => "Print each number of a range",
            Drill::EvenSum { .. } => "Sum the even numbers of a range",
            Drill::Chars { .. } => "Print each character of a string",
            Drill::Table { .. } => "Print a multiplication table",
        }
    }

    /// Inclusive loop bounds. `None` when the loop runs zero times.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let (from, to) = match *self {
            Drill::Range { from, to } => (from, to),
            Drill::EvenSum { from, to } => (from, to),
            Drill::Table { from, to, .. } => (from, to),
            Drill::Chars { text } => {
                let len = text.chars().count() as i64;
                (0, len - 1)
            }
        };
        if from <= to {
            Some((from, to))
        } else {
            None
        }
    }

    pub fn frame(self) -> Frame {
        Frame::new(self)
    }

    /// Runs the drill to completion and collects its output lines.
    pub fn lines(self) -> Result<Vec<String>, Error> {
        self.frame().collect()
    }
}

impl std::fmt::Display for Drill {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for drill in Drill::all().iter() {
            assert_eq!(Drill::from_name(drill.name()), Some(*drill));
        }
        assert_eq!(Drill::from_name("while"), None);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Drill::RANGE.bounds(), Some((1, 10)));
        assert_eq!(Drill::EVEN_SUM.bounds(), Some((1, 100)));
        assert_eq!(Drill::CHARS.bounds(), Some((0, 9)));
        assert_eq!(Drill::TABLE.bounds(), Some((1, 10)));
        assert_eq!(Drill::Range { from: 3, to: 0 }.bounds(), None);
        assert_eq!(Drill::Chars { text: "" }.bounds(), None);
    }

    #[test]
    fn test_chars_counts_scalars_not_bytes() {
        assert_eq!(Drill::Chars { text: "año" }.bounds(), Some((0, 2)));
    }
}
