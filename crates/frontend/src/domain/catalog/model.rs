use contracts::domain::product::aggregate::Product;

/// Static resource holding the product collection.
const PRODUCTS_URL: &str = "/data/products.json";

/// Loads the product collection, once per page view.
///
/// Caching is disabled so the payload always reflects the file on disk. Any
/// transport failure, non-success status or parse failure surfaces as `Err`,
/// which the pages turn into their terminal "unavailable" view.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestCache, RequestInit, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request =
        Request::new_with_str_and_init(PRODUCTS_URL, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Product> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
