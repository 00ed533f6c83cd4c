use clap::Parser;
use uno::uno_game::{GameController, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let settings = Settings::parse();
    log::info!("Starting Uno with {:?}", settings);

    let mut controller = GameController::new(settings);
    controller.run()
}
