// Handlers HTTP del generador, agrupados por tema.
pub mod analisis;
pub mod catalogos;
pub mod docs;
pub mod exportar;
pub mod generar;
