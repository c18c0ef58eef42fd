fn main() {
    if let Err(err) = tabview::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
