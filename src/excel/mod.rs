// Lectura y escritura de los archivos Excel del generador.
pub mod catalogo;
pub mod export;
pub mod io;

pub use catalogo::leer_catalogo_cursos;
pub use export::exportar_horario_xlsx;
pub use io::{normalize_header, normalize_name};

use std::error::Error;
use std::path::{Path, PathBuf};

/// Directorio protegido donde viven los catálogos subidos.
pub const DATAFILES_DIR: &str = "data/catalogos";

/// Directorio donde se escriben los horarios exportados.
pub const EXPORTS_DIR: &str = "data/exports";

/// Resuelve el nombre de un catálogo a una ruta existente: primero tal cual,
/// luego dentro de `DATAFILES_DIR`. Rechaza nombres con `..`.
pub fn resolve_catalogo_path(nombre: &str) -> Result<PathBuf, Box<dyn Error>> {
    if nombre.trim().is_empty() {
        return Err("nombre de catálogo vacío".into());
    }
    if nombre.contains("..") {
        return Err(format!("nombre de catálogo inválido: '{}'", nombre).into());
    }

    let directo = Path::new(nombre);
    if directo.exists() {
        return Ok(directo.to_path_buf());
    }
    let candidato = Path::new(DATAFILES_DIR).join(nombre);
    if candidato.exists() {
        return Ok(candidato);
    }
    Err(format!("catálogo '{}' no encontrado en {}", nombre, DATAFILES_DIR).into())
}

/// Lista los catálogos (.xlsx / .xls) disponibles en `DATAFILES_DIR`.
pub fn list_catalogos() -> Result<Vec<String>, Box<dyn Error>> {
    let mut out = Vec::new();
    let base = Path::new(DATAFILES_DIR);
    if !base.exists() {
        return Ok(out);
    }
    for entry in std::fs::read_dir(base)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let lower = name.to_lowercase();
        if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            out.push(name);
        }
    }
    out.sort();
    Ok(out)
}
