use log::{error, info};

use page_interactions::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page interactions");
    if let Err(err) = page_interactions::run() {
        error!("page interactions not installed: {}", err);
    }
}
