// Filtro por semestre y deduplicación del catálogo.
use std::collections::HashSet;

use crate::algorithm::tiempo::parse_bloques;
use crate::models::{Curso, FilaCurso};

/// Reduce la lista completa de filas al semestre objetivo, anota los bloques
/// parseados y elimina duplicados exactos (mismo nombre + misma codificación
/// de horario), conservando la primera aparición y el orden de entrada.
///
/// Dos filas con el mismo nombre pero distinto horario NO se deduplican:
/// son secciones legítimamente distintas del mismo curso.
pub fn filtrar_cursos(filas: &[FilaCurso], semestre: &str) -> Vec<Curso> {
    let mut vistos: HashSet<(String, String)> = HashSet::new();
    let mut cursos = Vec::new();

    for fila in filas.iter() {
        if fila.semestre != semestre {
            continue;
        }
        let clave = (fila.nombre.clone(), fila.horario.clone());
        if vistos.contains(&clave) {
            continue;
        }
        vistos.insert(clave);

        cursos.push(Curso {
            nombre: fila.nombre.clone(),
            sala: fila.sala.clone(),
            profesor: fila.profesor.clone(),
            semestre: fila.semestre.clone(),
            horario_raw: fila.horario.clone(),
            bloques: parse_bloques(&fila.horario),
        });
    }

    cursos
}

/// Semestres distintos presentes en el catálogo, en orden de primera aparición.
pub fn semestres_presentes(filas: &[FilaCurso]) -> Vec<String> {
    let mut vistos: HashSet<String> = HashSet::new();
    let mut semestres = Vec::new();
    for fila in filas.iter() {
        let s = fila.semestre.trim();
        if s.is_empty() || vistos.contains(s) {
            continue;
        }
        vistos.insert(s.to_string());
        semestres.push(s.to_string());
    }
    semestres
}
