// Enumeración exhaustiva de horarios válidos.
use std::collections::HashSet;
use std::error::Error;

use crate::algorithm::conflicto::cursos_chocan;
use crate::models::{Curso, Horario};

/// Cota superior de secciones candidatas. La enumeración es O(2^n): más allá
/// de esto el pedido se rechaza antes de empezar.
pub const MAX_CANDIDATOS: usize = 25;

/// Enumera exhaustivamente todas las combinaciones válidas de cursos.
///
/// Búsqueda binaria de decisiones (incluir / saltar) sobre la lista en orden
/// de entrada, con pila de decisiones explícita en lugar de recursión. Al
/// incluir se exige que el nombre del curso no esté ya usado y que no choque
/// con el horario parcial.
///
/// Un camino completo se acepta sólo si la cantidad de nombres distintos
/// incluidos iguala la cantidad de nombres distintos de la lista candidata
/// completa: todo curso debe quedar representado exactamente una vez. Si
/// algún nombre no puede colocarse, el conjunto de resultados queda vacío
/// aunque existan horarios parciales válidos.
pub fn generar_horarios_validos(candidatos: &[Curso]) -> Vec<Horario> {
    if candidatos.is_empty() {
        return vec![];
    }

    let objetivo = candidatos
        .iter()
        .map(|c| c.nombre.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut resultados: Vec<Horario> = Vec::new();
    // marco de decisión: (índice a decidir, índices incluidos, nombres usados)
    let mut pila: Vec<(usize, Vec<usize>, HashSet<String>)> =
        vec![(0, Vec::new(), HashSet::new())];

    while let Some((idx, incluidos, usados)) = pila.pop() {
        if idx == candidatos.len() {
            if usados.len() == objetivo {
                let cursos = incluidos.iter().map(|&i| candidatos[i].clone()).collect();
                resultados.push(Horario { cursos });
            }
            continue;
        }

        // Rama "saltar" primero: la pila es LIFO, así la rama "incluir" se
        // explora antes (recorrido en profundidad, incluir delante).
        pila.push((idx + 1, incluidos.clone(), usados.clone()));

        let curso = &candidatos[idx];
        let nombre_libre = !usados.contains(&curso.nombre);
        let sin_choque = !incluidos
            .iter()
            .any(|&i| cursos_chocan(&candidatos[i], curso));
        if nombre_libre && sin_choque {
            let mut incluidos2 = incluidos;
            incluidos2.push(idx);
            let mut usados2 = usados;
            usados2.insert(curso.nombre.clone());
            pila.push((idx + 1, incluidos2, usados2));
        }
    }

    resultados
}

/// Variante con verificación de cota: rechaza listas candidatas que excedan
/// `MAX_CANDIDATOS` con un error recuperable.
pub fn generar_horarios_acotado(candidatos: &[Curso]) -> Result<Vec<Horario>, Box<dyn Error>> {
    if candidatos.len() > MAX_CANDIDATOS {
        return Err(format!(
            "demasiadas secciones candidatas ({}, máximo {})",
            candidatos.len(),
            MAX_CANDIDATOS
        )
        .into());
    }
    Ok(generar_horarios_validos(candidatos))
}
