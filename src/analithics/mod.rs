pub mod db;
pub mod insertions;
pub mod queries;

pub use db::init_db;
pub use insertions::{log_generacion_segura, log_seleccion_segura};
pub use queries::resumen;
