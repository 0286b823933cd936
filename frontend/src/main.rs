mod app;
mod components;
mod hooks;
mod pages;
mod services;
mod session;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
