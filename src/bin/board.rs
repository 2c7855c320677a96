//! Classic tactics board: 800x600, markers only

use tactics_board::{window, BoardConfigBuilder, BoardVariant};

const VARIANT: BoardVariant = BoardVariant::Classic;

fn window_conf() -> macroquad::window::Conf {
    window::conf(VARIANT)
}

#[macroquad::main(window_conf)]
async fn main() {
    pretty_env_logger::init();

    let config = match BoardConfigBuilder::new().variant(VARIANT).build() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid board configuration: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = window::run(config).await {
        log::error!("board stopped: {}", err);
        std::process::exit(1);
    }
}
