mod commands;
mod terminal;

use commands::{CommandLine, query};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let invocation = CommandLine::parse_invocation();

    logging::init_logging(invocation.verbose);
    print::banner(invocation.cfg.no_banner, invocation.cfg.quiet);

    let result = query::query(invocation.target, &invocation.cfg).await;

    print::end_of_program(invocation.cfg.quiet);
    result
}
