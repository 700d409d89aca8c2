/// Literal inputs of a run.
///
/// Nothing fills these from the outside; `Config::default()` is the only
/// configuration the program ever uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub person_name: String,
    pub person_age: u32,
    /// Name passed to [`crate::greeting::greet`].
    pub greetee: String,
    /// Last value of the parity loop, inclusive.
    pub parity_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            person_name: String::from("Alice"),
            person_age: 30,
            greetee: String::from("Bob"),
            parity_limit: 4,
        }
    }
}
