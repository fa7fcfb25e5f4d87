use shared::{AppConfig, MountBinder, MountHost};
use zoon::{eprintln, println, web_sys, *};

mod app;
mod index_page;
mod layout;
mod router;

// ------ ------
//     Host
// ------ ------

struct BrowserHost;

impl MountHost for BrowserHost {
    fn has_element(&self, id: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .is_some()
    }

    fn render_root(&mut self, id: &str) {
        // The router publishes the current route before the first render.
        router::router();
        start_app(id, app::root);
    }
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    tracing_wasm::set_as_global_default();

    let mut binder = MountBinder::new(BrowserHost, AppConfig::default());
    match binder.mount() {
        Ok(state) => {
            println!("App {:?}", state);
            app::load_colors();
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error);
            Err(JsValue::from_str(&error.to_string()))
        }
    }
}
