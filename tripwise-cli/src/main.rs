//! Entry point for the `tripwise` binary.
#![forbid(unsafe_code)]

use env_logger::Env;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    if let Err(err) = tripwise_cli::run() {
        eprintln!("tripwise: {err}");
        std::process::exit(1);
    }
}
