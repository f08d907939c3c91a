use std::sync::Arc;

use tauri::State;

use crate::nav::Tab;
use crate::portal::Portal;

#[tauri::command]
pub fn switch_tab(portal: State<'_, Arc<Portal>>, tab: String) -> bool {
    match Tab::from_name(&tab) {
        Some(tab) => {
            portal.switch_tab(tab);
            true
        }
        None => false,
    }
}

/// Restore the tab named by an address fragment (back/forward navigation).
#[tauri::command]
pub fn restore_tab(portal: State<'_, Arc<Portal>>, fragment: String) -> bool {
    portal.restore_tab(&fragment)
}

/// Tab bound to a number-key shortcut.
#[tauri::command]
pub fn tab_shortcut(portal: State<'_, Arc<Portal>>, key: u8) -> bool {
    match Tab::from_shortcut(key) {
        Some(tab) => {
            portal.switch_tab(tab);
            true
        }
        None => false,
    }
}

#[tauri::command]
pub fn dismiss_notification(portal: State<'_, Arc<Portal>>) {
    portal.dismiss_notification();
}

#[tauri::command]
pub fn open_simulation(portal: State<'_, Arc<Portal>>, key: String) -> Option<&'static str> {
    portal.open_simulation(&key)
}

#[tauri::command]
pub fn physics_fact(portal: State<'_, Arc<Portal>>) -> &'static str {
    portal.show_physics_fact()
}
