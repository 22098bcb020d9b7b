//! CSR hosting entry: mounts the application shell into the document body.

use sniplink_web::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("console logger already installed");

    log::info!("mounting sniplink-web");
    leptos::mount::mount_to_body(App);
}
