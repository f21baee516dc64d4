// src/main.rs: RCCG 360 Degrees Youth Church (Rust + Yew + WASM)
mod app;
mod clipboard;
mod components;
mod config;
mod content;
mod pages;
mod route;
mod schedule;
mod state;
mod theme;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("{} starting", config::SITE_NAME);

    yew::Renderer::<app::App>::new().render();
}
