use std::process;

fn main() {
    if let Err(error) = adminboard_cli::run() {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}
