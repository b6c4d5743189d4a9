use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::{Cli, CompletionsArgs};
use crate::client::CliResult;

const BIN_NAME: &str = "webflowctl";

pub(crate) fn handle_completions(args: &CompletionsArgs) -> CliResult<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}
