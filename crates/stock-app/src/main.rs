use leptos::prelude::*;
use stock_app::{init_logging, App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    init_logging(config.log_level);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
