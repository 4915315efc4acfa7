//! Light Rays entry point
//!
//! Loads settings, opens the window and runs the loop until quit.

use std::process::ExitCode;

use light_rays::Settings;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Light Rays starting...");

    let settings = Settings::load();

    match light_rays::platform::run(settings) {
        Ok(()) => {
            log::info!("Light Rays stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Initialization failed: {e}");
            eprintln!("light-rays: {e}");
            ExitCode::FAILURE
        }
    }
}
