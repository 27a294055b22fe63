// Biblioteca raíz del crate `quickgrilla`.
// Reexporta los módulos principales del generador de horarios.
pub mod algorithm;
pub mod analithics;
pub mod api_json;
pub mod excel;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
