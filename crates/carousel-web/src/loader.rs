use carousel_core::gpu::TextureData;
use carousel_core::{ImageLoader, LoadError, LoadedImage};
use std::future::Future;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fetches images over HTTP and decodes them into RGBA8.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchImageLoader;

impl ImageLoader for FetchImageLoader {
    type Texture = TextureData;

    fn load(&self, url: &str) -> impl Future<Output = Result<LoadedImage<TextureData>, LoadError>> {
        let url = url.to_string();
        async move {
            let bytes = fetch_bytes(&url)
                .await
                .map_err(|e| LoadError::new(&url, e))?;
            let ((width, height), texture) =
                TextureData::decode(&bytes).map_err(|e| LoadError::new(&url, e))?;
            log::debug!(
                "[loader] {} -> {}x{} (texture {}x{})",
                url,
                width,
                height,
                texture.width,
                texture.height
            );
            Ok(LoadedImage {
                width,
                height,
                texture,
            })
        }
    }
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);

    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("failed to create request: {:?}", e))?;
    let window = web::window().ok_or("no window")?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }
    let array_buffer = wasm_bindgen_futures::JsFuture::from(
        resp.array_buffer()
            .map_err(|e| format!("failed to get array buffer: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("failed to read response: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}
