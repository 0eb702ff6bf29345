use crate::config;
use crate::events::AppEvent;
use crate::sys::{SOCKET_PATH, server};
use async_channel::Sender;
use std::future::Future;
use std::pin::Pin;
use std::thread;
use tokio::runtime::Runtime;
use tokio::task::JoinSet;

type Service = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Runs the control socket and the config watcher on a tokio runtime of their own.
///
/// The thread ends once every service has returned.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("dotpage-services".into())
        .spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };
            rt.block_on(supervise(services(tx)));
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn background thread: {}", e);
    }
}

fn services(tx: Sender<AppEvent>) -> Vec<(&'static str, Service)> {
    log::info!("Control socket at {}", SOCKET_PATH);
    vec![
        ("control socket", Box::pin(server::run_server(tx.clone())) as Service),
        ("config watcher", Box::pin(config::run_async_watcher(tx)) as Service),
    ]
}

/// Drives every service to completion and returns their names in the order they stopped.
///
/// A panicking service is logged and left out of the result.
async fn supervise(services: Vec<(&'static str, Service)>) -> Vec<&'static str> {
    let mut running = JoinSet::new();
    for (name, service) in services {
        log::info!("Starting {}", name);
        running.spawn(async move {
            service.await;
            name
        });
    }

    let mut stopped = Vec::new();
    while let Some(result) = running.join_next().await {
        match result {
            Ok(name) => {
                log::warn!("Background service stopped: {}", name);
                stopped.push(name);
            }
            Err(e) => log::error!("Background service failed: {}", e),
        }
    }
    stopped
}
