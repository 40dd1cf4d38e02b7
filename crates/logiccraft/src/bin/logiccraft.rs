fn main() {
    if let Err(err) = logiccraft::run() {
        eprintln!("{}", logiccraft::format_error(&err));
        std::process::exit(1);
    }
}
