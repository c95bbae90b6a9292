mod app;
mod audio;
mod config;
mod error;
mod library;
mod queue;
mod runtime;
mod transport;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
