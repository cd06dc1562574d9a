use ifds_dashboard::app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🔐 IFDS dashboard starting...");

    yew::Renderer::<App>::new().render();
}
