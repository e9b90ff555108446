// One-shot coordinate load, run off the UI thread and handed back over a channel.

use std::sync::mpsc::{self, Receiver};

use crate::{
    config::DF,
    data::{CoordinateProvider, HttpCoordinateProvider},
    domain::Coordinate,
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context, std::thread, tokio::runtime::Builder};

pub type FetchResult = anyhow::Result<Vec<Coordinate>>;

pub async fn fetch_coordinates<P: CoordinateProvider + ?Sized>(provider: &P) -> FetchResult {
    if DF.log_fetch {
        log::info!("Fetching coordinates from {}", provider.source());
    }
    let coordinates = provider.fetch_coordinates().await?;
    if DF.log_fetch {
        log::info!("Received {} coordinates", coordinates.len());
    }
    Ok(coordinates)
}

async fn fetch_from_url(url: &str) -> FetchResult {
    let provider = HttpCoordinateProvider::new(url)?;
    fetch_coordinates(&provider).await
}

/// Kick off the request and return immediately. The receiver yields exactly one result,
/// after which `notify` runs (the UI uses it to wake the frame loop).
/// Nothing cancels the request; if the receiver is gone by then the result is dropped.
pub fn spawn_coordinate_fetch<F>(url: String, notify: F) -> Receiver<FetchResult>
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    #[cfg(not(target_arch = "wasm32"))]
    thread::spawn(move || {
        let result = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create fetch runtime")
            .and_then(|rt| rt.block_on(fetch_from_url(&url)));
        let _ = tx.send(result);
        notify();
    });

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_from_url(&url).await;
        let _ = tx.send(result);
        notify();
    });

    rx
}
