#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    atrium_client_lib::run()
}
