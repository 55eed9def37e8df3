fn main() {
    if let Err(e) = lib_routing_tool::init() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
