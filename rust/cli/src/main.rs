use std::io;

fn main() {
    cloudpoker_cli::logging::init_logging();
    let code = cloudpoker_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
