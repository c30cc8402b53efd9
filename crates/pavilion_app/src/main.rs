mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod ui;

fn main() {
    // Keep stdout for the page rendering; logs go to ./site.log.
    logging::initialize(logging::LogDestination::File);
    app::run();
}
