mod api;
mod components;
mod messages;
mod model;
mod nutrition;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
