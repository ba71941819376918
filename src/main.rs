mod cli;

use cli::commands::Command;
use cli::Connect4;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    connect4::instrumentation::init_tracing();

    Connect4::from_args().execute();

    #[cfg(feature = "instrumentation")]
    connect4::instrumentation::print_timing_statistics();
}
