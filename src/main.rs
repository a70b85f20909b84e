fn main() {
    // The only place that turns a startup error into a process exit.
    if let Err(e) = strikechat::cli::main() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
