use std::fmt;

/// A named individual with an age. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}
