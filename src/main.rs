mod telemetry;

// Rendered by the wasm frontend; native builds compile them for tests only.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod celestial;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod relay;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod starfield;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
