use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "greetr")]
#[command(version, about = "Greets Bob, introduces Alice and counts parities up to 4.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
