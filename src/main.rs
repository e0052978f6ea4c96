use employee_manager::components::App;
use employee_manager::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    if CONFIG.is_logging_enabled() {
        log::info!("🚀 Employee Manager starting ({})...", CONFIG.environment);
        log::info!("🌐 Backend: {}", CONFIG.backend_url());
    }

    yew::Renderer::<App>::new().render();
}
