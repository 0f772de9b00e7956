fn main() {
    if let Err(err) = athrd::run_entry() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
