use arcade_tms::cli::run_cli;

fn main() {
    arcade_tms::init();
    if let Err(err) = run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
