fn main() {
    // Export ESP-IDF build metadata for on-device builds. Host targets
    // compile only the library and tests, so nothing to emit there.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
