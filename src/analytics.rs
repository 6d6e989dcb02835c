//! Google Ads conversion reporting.
//!
//! The tag loader and the page-view config event live in `index.html`; this
//! module only fires the enquiry conversion. Everything here is write-only:
//! when the loader is absent or blocked, calls are silent no-ops and nothing
//! else in the app may notice.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Ads account the page shell configures on load.
pub const ADS_ACCOUNT: &str = "AW-16918294850";

/// Conversion label for a processed enquiry.
const ENQUIRY_CONVERSION_LABEL: &str = "KWoeCI6b2asaEMLiooM_";

const CONVERSION_VALUE: f64 = 1.0;
const CONVERSION_CURRENCY: &str = "INR";

/// Fire the one-shot enquiry conversion event via `window.gtag`.
pub fn report_enquiry_conversion() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Ok(gtag) = gtag.dyn_into::<Function>() else {
        return;
    };

    let params = Object::new();
    let send_to = format!("{ADS_ACCOUNT}/{ENQUIRY_CONVERSION_LABEL}");
    let _ = Reflect::set(&params, &"send_to".into(), &send_to.into());
    let _ = Reflect::set(&params, &"value".into(), &JsValue::from_f64(CONVERSION_VALUE));
    let _ = Reflect::set(&params, &"currency".into(), &CONVERSION_CURRENCY.into());

    let _ = gtag.call3(
        &JsValue::NULL,
        &"event".into(),
        &"conversion".into(),
        &params,
    );
}
