// Módulo de alto nivel para la generación de horarios
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod conflicto;
pub mod filtros;
pub mod generador;
pub mod grafo;
pub mod selector;
pub mod tiempo;

// Reexportar la API que usan los handlers y los tests de integración
pub use conflicto::{cursos_chocan, tiene_conflicto};
pub use filtros::{filtrar_cursos, semestres_presentes};
pub use generador::{MAX_CANDIDATOS, generar_horarios_acotado, generar_horarios_validos};
pub use grafo::pares_en_conflicto;

use std::error::Error;

use crate::models::{Curso, Horario};

/// Orquestador del flujo por acción de usuario: lee el catálogo, filtra por
/// semestre y enumera los horarios válidos. Devuelve también la lista
/// candidata para que el llamador distinga "sin cursos en el semestre" de
/// "ninguna combinación válida" y pueda pedir diagnósticos.
///
/// Todo se recomputa de arriba a abajo en cada llamada: el núcleo no guarda
/// estado entre pedidos.
pub fn generar_desde_catalogo(
    catalogo: &str,
    semestre: &str,
) -> Result<(Vec<Curso>, Vec<Horario>), Box<dyn Error>> {
    let filas = crate::excel::leer_catalogo_cursos(catalogo)?;
    let candidatos = filtrar_cursos(&filas, semestre);
    let horarios = generar_horarios_acotado(&candidatos)?;
    Ok((candidatos, horarios))
}
