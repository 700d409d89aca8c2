use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: u32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word: &str = match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        };
        f.write_str(word)
    }
}

/// `"{value} is even"` or `"{value} is odd"`.
pub fn parity_line(value: u32) -> String {
    format!("{} is {}", value, Parity::of(value))
}
