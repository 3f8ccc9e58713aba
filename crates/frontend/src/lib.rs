pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use contracts::dashboards::DashboardKind;
use shared::launch::LaunchParams;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Element with id `app`, if the host page declares one.
fn app_container() -> Result<Option<HtmlElement>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    match document.get_element_by_id("app") {
        Some(element) => Ok(Some(element.dyn_into::<HtmlElement>()?)),
        None => Ok(None),
    }
}

/// What the module-load entry does with the page it was loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMount {
    /// Standalone page: mount into `#app` and mirror the tab into the URL.
    AppElement,
    /// Host page embedding dashboards through `mount_sirocco`/`mount_retention`.
    Skip,
}

pub fn startup_mount(has_app_element: bool) -> StartupMount {
    if has_app_element {
        StartupMount::AppElement
    } else {
        StartupMount::Skip
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();

    let container = match app_container() {
        Ok(container) => container,
        Err(err) => {
            log::error!("failed to look up #app container: {:?}", err);
            None
        }
    };
    let container = match (startup_mount(container.is_some()), container) {
        (StartupMount::AppElement, Some(container)) => container,
        _ => {
            log::debug!("no #app element, waiting for an explicit mount");
            return;
        }
    };

    let params = LaunchParams::from_location();
    let kind = params.dashboard();
    let tab = params.tab.clone();
    log::info!("mounting {} dashboard (tab: {:?})", kind, tab);

    leptos::mount::mount_to(container, move || view_app(kind, tab.clone(), true)).forget();
}

/// Mounts the SIROCCO dashboard into a host-supplied element.
#[wasm_bindgen]
pub fn mount_sirocco(container: HtmlElement) {
    mount_into(container, DashboardKind::Sirocco);
}

/// Mounts the retention dashboard into a host-supplied element.
#[wasm_bindgen]
pub fn mount_retention(container: HtmlElement) {
    mount_into(container, DashboardKind::Retention);
}

fn mount_into(container: HtmlElement, kind: DashboardKind) {
    init_logging();
    log::info!("mounting {} dashboard into host container", kind);
    // Embedded dashboards leave the host page URL alone.
    leptos::mount::mount_to(container, move || view_app(kind, None, false)).forget();
}

fn view_app(kind: DashboardKind, tab: Option<String>, sync_url: bool) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    view! { <app::App kind=kind initial_tab=tab sync_url=sync_url /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_mounts_only_into_app_element() {
        assert_eq!(startup_mount(true), StartupMount::AppElement);
        assert_eq!(startup_mount(false), StartupMount::Skip);
    }
}
