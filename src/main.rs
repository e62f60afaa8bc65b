use log::{info, Level};

use forge_structural::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Forge Structural site initialized");
    info!("Serving Ontario with precision structural engineering");
    yew::Renderer::<App>::new().render();
}
