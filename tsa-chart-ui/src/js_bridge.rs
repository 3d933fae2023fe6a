//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), then promoted to `window.*`. This module
//! provides safe Rust wrappers that serialize data and call those globals,
//! plus the one callback going the other way: map-marker clicks invoking a
//! registered Rust closure through `window.__tsaMarkerClick`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static PROVINCE_MAP_JS: &str = include_str!("../assets/js/province-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TSA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. To make
/// them globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope via indirect `eval()` once
/// D3 is ready, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, PIE_CHART_JS, PROVINCE_MAP_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__tsaChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__tsaChartsReady) { delete window.__tsaChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__tsaChartScripts);
                    delete window.__tsaChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderProvinceMap !== 'undefined') window.renderProvinceMap = renderProvinceMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__tsaChartsReady = true;
                    console.log('TSA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call a promoted chart render function once the scripts and the target
/// container both exist, polling until then.
fn render_when_ready(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__tsaChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[TSA] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the grouped male/female/total bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the single-province male/female pie chart.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render the province marker map.
pub fn render_province_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderProvinceMap", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Register the Rust handler invoked when a map marker is clicked.
///
/// The map JS calls `window.__tsaMarkerClick(provinceName)`. The closure is
/// leaked (`forget`) on purpose: it must outlive every render for the whole
/// session. Registering again replaces the window binding.
pub fn set_marker_click_handler(mut handler: impl FnMut(String) + 'static) {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        if let Some(province) = value.as_string() {
            handler(province);
        }
    });
    if let Some(window) = web_sys::window() {
        let target: JsValue = window.into();
        let _ = js_sys::Reflect::set(
            &target,
            &JsValue::from_str("__tsaMarkerClick"),
            closure.as_ref(),
        );
    }
    closure.forget();
}
