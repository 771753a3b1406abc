use std::io;

fn main() {
    fivecard_cli::logging::init_logging();
    let code = fivecard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
