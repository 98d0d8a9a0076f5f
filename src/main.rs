fn main() {
    if let Err(e) = devremind_lib::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
