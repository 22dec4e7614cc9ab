fn main() {
    if let Err(err) = storeatlas::app::run() {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
