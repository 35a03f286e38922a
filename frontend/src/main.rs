use shade_frontend::app;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Shade frontend");

    app::mount_app();
}
