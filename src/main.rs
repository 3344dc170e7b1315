fn main() {
    if let Err(e) = hosts_merge::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
