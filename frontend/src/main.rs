fn main() {
    #[cfg(target_arch = "wasm32")]
    admin_console_frontend::run();
}
