fn main() {
    if let Err(e) = stdgrimmsim::cli::run(std::env::args_os()) {
        eprintln!("stdgrimmsim: error: {e:#}");
        std::process::exit(1);
    }
}
