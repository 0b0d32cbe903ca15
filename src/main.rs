use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use fizzbuzz_actix::common::common::setup_logging;
use fizzbuzz_actix::config::structs::configuration::Configuration;
use fizzbuzz_actix::http::http::http_service;
use fizzbuzz_actix::http::structs::http_service_data::HttpServiceData;
use fizzbuzz_actix::stats::structs::stats_tracker::StatsTracker;
use fizzbuzz_actix::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let stats_tracker = Arc::new(StatsTracker::new());
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let address: SocketAddr = match config.http_server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[HTTP] Invalid bind address {}: {error}", config.http_server.bind_address);
                    exit(1);
                }
            };

            let (http_handle, http_future) = match http_service(
                address,
                Arc::new(HttpServiceData {
                    stats_tracker: stats_tracker.clone(),
                    config: config.clone(),
                })
            ).await {
                Ok(result) => result,
                Err(error) => {
                    error!("[HTTP] Unable to bind to {address}: {error}");
                    exit(1);
                }
            };
            let http_task = tokio::spawn(http_future);

            let stats_handler = tokio_shutdown.clone();
            let stats_tracker_spawn = stats_tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let most_frequent = stats_tracker_spawn.most_frequent();
                            info!(
                                "[STATS] Combinations: {} - Hits: {} - Most frequent: {} hits for {:?}",
                                stats_tracker_spawn.distinct(),
                                stats_tracker_spawn.total_hits(),
                                most_frequent.hits,
                                most_frequent.params
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            http_handle.stop(true).await;
            match http_task.await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    sentry::capture_error(&error);
                    error!("Errors happened on shutting down HTTP server: {error}");
                }
                Err(error) => {
                    error!("HTTP server task failed: {error}");
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
