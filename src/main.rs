fn main() {
    if let Err(e) = molecule_sim::app::run() {
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}
