//! Plotly Bindings
//!
//! Thin `wasm-bindgen` imports of the Plotly.js calls the dashboard uses, and
//! the DOM-backed [`RenderSurface`].

use dashboard_core::{ChartSpec, DashboardError, DashboardResult, RenderSurface, EXPORT_BUTTON_ID};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(container: &Element, data: &JsValue, layout: &JsValue, config: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(container: &Element) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], js_name = resize, catch)]
    fn plots_resize(container: &Element) -> Result<JsValue, JsValue>;
}

/// Slot the Export link is rendered into
pub const EXPORT_SLOT_ID: &str = "export-slot";

fn element(id: &str) -> DashboardResult<Element> {
    dom::document()?
        .get_element_by_id(id)
        .ok_or_else(|| DashboardError::ElementMissing(format!("#{}", id)))
}

fn to_js(value: &serde_json::Value) -> DashboardResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| DashboardError::Parse(e.to_string()))
}

fn plot_config() -> JsValue {
    let config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&config, &"responsive".into(), &JsValue::TRUE);
    let _ = js_sys::Reflect::set(&config, &"displaylogo".into(), &JsValue::FALSE);
    config.into()
}

/// Draws into the live document
#[derive(Debug, Default, Clone, Copy)]
pub struct DomSurface;

impl RenderSurface for DomSurface {
    fn plot(&mut self, container_id: &str, spec: &ChartSpec) -> DashboardResult<()> {
        let container = element(container_id)?;
        // A placeholder may sit where the chart goes
        container.set_inner_html("");
        new_plot(&container, &to_js(&spec.data)?, &to_js(&spec.layout)?, &plot_config())
            .map(|_| ())
            .map_err(|e| DashboardError::Parse(format!("Plotly.newPlot({}): {}", container_id, dom::js_message(&e))))
    }

    fn placeholder(&mut self, container_id: &str, message: &str) -> DashboardResult<()> {
        let container = element(container_id)?;
        let _ = purge(&container);
        container.set_inner_html(&format!(r#"<p class="text-muted text-center">{}</p>"#, message));
        Ok(())
    }

    fn resize(&mut self, container_id: &str) -> DashboardResult<()> {
        let container = element(container_id)?;
        // Placeholders have nothing to resize
        if container.query_selector(".plot-container").ok().flatten().is_none() {
            return Ok(());
        }
        plots_resize(&container)
            .map(|_| ())
            .map_err(|e| DashboardError::Parse(dom::js_message(&e)))
    }

    fn remove_export_controls(&mut self) -> DashboardResult<usize> {
        let existing = dom::document()?
            .query_selector_all(&format!("#{}", EXPORT_BUTTON_ID))
            .map_err(|e| DashboardError::Parse(dom::js_message(&e)))?;
        let mut removed = 0;
        for i in 0..existing.length() {
            if let Some(el) = existing.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                el.remove();
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn insert_export_control(&mut self, href: &str) -> DashboardResult<()> {
        let slot = element(EXPORT_SLOT_ID)?;
        let link = dom::document()?
            .create_element("a")
            .map_err(|e| DashboardError::Parse(dom::js_message(&e)))?;
        link.set_id(EXPORT_BUTTON_ID);
        link.set_class_name("btn btn-secondary mt-3");
        link.set_attribute("href", href)
            .map_err(|e| DashboardError::Parse(dom::js_message(&e)))?;
        link.set_text_content(Some("Export CSV"));
        slot.append_child(&link)
            .map(|_| ())
            .map_err(|e| DashboardError::Parse(dom::js_message(&e)))
    }
}
