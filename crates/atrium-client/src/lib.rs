pub mod commands;
pub mod events;
pub mod facts;
pub mod labs;
pub mod nav;
pub mod notify;
pub mod portal;
pub mod render;
pub mod state;

mod handlers;
mod presence;
mod session;
mod subscriptions;

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use atrium_store::{MemoryAuth, MemoryStore};

use crate::portal::Portal;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("atrium_client_lib=debug,atrium_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting {} desktop client", atrium_shared::constants::APP_NAME);

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            let sink: Arc<dyn events::EventSink> = Arc::new(app.handle().clone());
            let portal = Portal::new(
                Arc::new(MemoryAuth::new()),
                Arc::new(MemoryStore::new()),
                sink,
            );
            app.manage(portal.clone());

            tauri::async_runtime::spawn(portal.run_session_loop());
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::CloseRequested { .. } = event {
                use tauri::Manager;

                let portal = window.app_handle().state::<Arc<Portal>>().inner().clone();
                tauri::async_runtime::spawn(async move {
                    if let Err(e) = portal.set_presence(false).await {
                        tracing::warn!(error = %e, "could not mark identity offline");
                    }
                });
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::session::login,
            commands::session::register,
            commands::session::logout,
            commands::session::current_session,
            commands::community::send_message,
            commands::community::filter_messages,
            commands::community::common_formulas,
            commands::assignments::add_assignment,
            commands::resources::add_resource,
            commands::resources::filter_resources,
            commands::doubts::ask_doubt,
            commands::doubts::filter_doubts,
            commands::ui::switch_tab,
            commands::ui::restore_tab,
            commands::ui::tab_shortcut,
            commands::ui::dismiss_notification,
            commands::ui::open_simulation,
            commands::ui::physics_fact,
        ])
        .run(tauri::generate_context!())
        .expect("Failed to run Tauri application");
}
