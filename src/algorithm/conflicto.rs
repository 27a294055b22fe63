// Detección de conflictos de horario entre cursos.
use crate::models::Curso;

/// True si ambos cursos comparten algún bloque (día, periodo) exacto.
/// Un periodo es una unidad atómica, no un intervalo: no hay semántica de
/// solapamiento parcial.
pub fn cursos_chocan(a: &Curso, b: &Curso) -> bool {
    a.bloques
        .iter()
        .any(|b1| b.bloques.iter().any(|b2| b1 == b2))
}

/// True si el candidato choca con cualquier curso ya comprometido en el
/// horario parcial.
pub fn tiene_conflicto(parcial: &[Curso], candidato: &Curso) -> bool {
    parcial.iter().any(|c| cursos_chocan(c, candidato))
}
