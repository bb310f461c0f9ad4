mod macros;

pub fn formsend_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
