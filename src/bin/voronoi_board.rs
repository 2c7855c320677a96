//! Territory board: 1200x800 with Voronoi shading

use tactics_board::{window, BoardConfigBuilder, BoardVariant};

fn window_conf() -> macroquad::window::Conf {
    window::conf(BoardVariant::Territory)
}

#[macroquad::main(window_conf)]
async fn main() {
    pretty_env_logger::init();

    let config = match BoardConfigBuilder::new()
        .variant(BoardVariant::Territory)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid board configuration: {}", err);
            std::process::exit(1);
        }
    };
    log::info!("stripe spacing {}", config.stripe_spacing);

    if let Err(err) = window::run(config).await {
        log::error!("board stopped: {}", err);
        std::process::exit(1);
    }
}
