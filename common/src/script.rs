use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::Config;
use crate::greeting::greet;
use crate::parity::parity_line;
use crate::person::Person;

/// Output lines of one run, in print order.
pub fn lines(cfg: &Config) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(cfg.parity_limit as usize + 3);

    let person: Person = Person::new(cfg.person_name.as_str(), cfg.person_age);
    debug!(name = person.name(), age = person.age(), "person constructed");
    out.push(person.display_info());

    debug!(greetee = cfg.greetee.as_str(), "greeting");
    out.push(greet(&cfg.greetee));

    for i in 0..=cfg.parity_limit {
        trace!(value = i, "parity check");
        out.push(parity_line(i));
    }

    out
}

/// Writes every line of [`lines`] to `sink`, newline terminated.
pub fn run<W: Write>(cfg: &Config, sink: &mut W) -> io::Result<()> {
    for line in lines(cfg) {
        writeln!(sink, "{line}")?;
    }
    sink.flush()
}
