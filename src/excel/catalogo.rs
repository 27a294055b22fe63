use calamine::{Reader, open_workbook_auto};

use crate::excel::io::{cell_to_string, normalize_header};
use crate::models::FilaCurso;

/// Resolución de columnas del catálogo: índices dentro de la fila.
struct MapaColumnas {
    nombre: usize,
    sala: usize,
    profesor: Option<usize>,
    semestre: usize,
    horario: usize,
}

/// Intenta reconocer la fila de encabezados por nombre normalizado.
/// Devuelve None si la fila no trae al menos `nombre` y `horario`.
fn detectar_encabezados(fila: &[String]) -> Option<MapaColumnas> {
    let mut nombre = None;
    let mut sala = None;
    let mut profesor = None;
    let mut semestre = None;
    let mut horario = None;

    for (i, celda) in fila.iter().enumerate() {
        match normalize_header(celda).as_str() {
            "nombre" | "curso" | "asignatura" | "name" => nombre = nombre.or(Some(i)),
            "sala" | "ubicacion" | "location" => sala = sala.or(Some(i)),
            "profesor" | "docente" | "professor" => profesor = profesor.or(Some(i)),
            "semestre" | "semester" => semestre = semestre.or(Some(i)),
            "horario" | "horarios" | "times" => horario = horario.or(Some(i)),
            _ => {}
        }
    }

    match (nombre, horario) {
        (Some(n), Some(h)) => Some(MapaColumnas {
            nombre: n,
            sala: sala.unwrap_or(1),
            profesor,
            semestre: semestre.unwrap_or(2),
            horario: h,
        }),
        _ => None,
    }
}

/// Disposición legada de 4 columnas: nombre, sala, semestre, horario.
/// En esa disposición la sala hace también de profesor.
fn mapa_legado() -> MapaColumnas {
    MapaColumnas {
        nombre: 0,
        sala: 1,
        profesor: None,
        semestre: 2,
        horario: 3,
    }
}

fn fila_a_curso(fila: &[String], mapa: &MapaColumnas) -> Option<FilaCurso> {
    let celda = |i: usize| fila.get(i).cloned().unwrap_or_default().trim().to_string();

    let nombre = celda(mapa.nombre);
    if nombre.is_empty() {
        return None;
    }

    let sala = celda(mapa.sala);
    // sin columna de profesor, el campo sala hace de profesor (disposición legada)
    let profesor = match mapa.profesor {
        Some(i) => {
            let p = celda(i);
            if p.is_empty() { sala.clone() } else { p }
        }
        None => sala.clone(),
    };
    let semestre = celda(mapa.semestre);
    let horario_str = celda(mapa.horario);
    let horario = if horario_str.is_empty() {
        "Sin horario".to_string()
    } else {
        horario_str
    };

    Some(FilaCurso {
        nombre,
        sala,
        profesor,
        semestre,
        horario,
    })
}

fn filas_a_cursos(filas: &[Vec<String>]) -> Vec<FilaCurso> {
    if filas.is_empty() {
        return Vec::new();
    }

    let (mapa, desde) = match detectar_encabezados(&filas[0]) {
        Some(m) => (m, 1),
        // sin encabezados reconocibles: disposición legada, saltando la
        // primera fila igual (los catálogos de origen siempre traen título)
        None => (mapa_legado(), 1),
    };

    let mut cursos = Vec::new();
    for fila in filas.iter().skip(desde) {
        if fila.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if let Some(c) = fila_a_curso(fila, &mapa) {
            cursos.push(c);
        }
    }
    cursos
}

/// Lee el catálogo de cursos y devuelve una lista ordenada de `FilaCurso`.
///
/// Intenta primero con calamine; si no devuelve datos, recorre las hojas
/// listadas en el zip del workbook como alternativa.
pub fn leer_catalogo_cursos(nombre_archivo: &str) -> Result<Vec<FilaCurso>, Box<dyn std::error::Error>> {
    let resolved = crate::excel::resolve_catalogo_path(nombre_archivo)?;

    // Intentar primero con calamine (más rápido si funciona)
    if let Ok(mut workbook) = open_workbook_auto(&resolved) {
        let sheet_names = workbook.sheet_names().to_owned();

        for sheet in sheet_names.iter() {
            if let Ok(range) = workbook.worksheet_range(sheet) {
                let filas: Vec<Vec<String>> = range
                    .rows()
                    .map(|r| r.iter().map(cell_to_string).collect())
                    .collect();
                let cursos = filas_a_cursos(&filas);
                if !cursos.is_empty() {
                    return Ok(cursos);
                }
            }
        }
    }

    // Fallback: usar zip para enumerar hojas si calamine falló o vino vacío
    eprintln!(
        "DEBUG: calamine falló o no devolvió datos, intentando vía zip para '{}'",
        resolved.display()
    );

    if let Ok(archive) = zip::ZipArchive::new(std::fs::File::open(&resolved)?) {
        let file_list: Vec<String> = archive.file_names().map(|s| s.to_string()).collect();

        for fname in file_list.iter() {
            if !fname.starts_with("xl/worksheets/sheet") {
                continue;
            }
            if let Ok(filas) = crate::excel::io::read_sheet(&resolved, fname) {
                let cursos = filas_a_cursos(&filas);
                if !cursos.is_empty() {
                    eprintln!(
                        "DEBUG: leer_catalogo_cursos cargó {} filas vía zip",
                        cursos.len()
                    );
                    return Ok(cursos);
                }
            }
        }
    }

    Err(format!(
        "No se pudo leer ninguna hoja del catálogo '{}'.",
        nombre_archivo
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(celdas: &[&str]) -> Vec<String> {
        celdas.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encabezados_con_profesor() {
        let filas = vec![
            fila(&["nombre", "sala", "profesor", "semestre", "horario"]),
            fila(&["Algebra", "A-1", "Soto", "1-1", "['LU1']"]),
        ];
        let cursos = filas_a_cursos(&filas);
        assert_eq!(cursos.len(), 1);
        assert_eq!(cursos[0].profesor, "Soto");
        assert_eq!(cursos[0].sala, "A-1");
    }

    #[test]
    fn test_disposicion_legada_sala_hace_de_profesor() {
        let filas = vec![
            fila(&["titulo", "x", "y", "z"]),
            fila(&["Algebra", "Perez", "1-1", "['LU1']"]),
        ];
        let cursos = filas_a_cursos(&filas);
        assert_eq!(cursos.len(), 1);
        assert_eq!(cursos[0].profesor, "Perez");
        assert_eq!(cursos[0].semestre, "1-1");
        assert_eq!(cursos[0].horario, "['LU1']");
    }

    #[test]
    fn test_filas_vacias_y_sin_nombre_se_saltan() {
        let filas = vec![
            fila(&["nombre", "sala", "semestre", "horario"]),
            fila(&["", "", "", ""]),
            fila(&["", "A-1", "1-1", "['LU1']"]),
            fila(&["Fisica", "A-2", "1-1", ""]),
        ];
        let cursos = filas_a_cursos(&filas);
        assert_eq!(cursos.len(), 1);
        assert_eq!(cursos[0].nombre, "Fisica");
        // horario vacío recibe el centinela
        assert_eq!(cursos[0].horario, "Sin horario");
    }
}
