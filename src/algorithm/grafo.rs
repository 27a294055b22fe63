// Grafo de conflictos entre secciones candidatas (diagnóstico).
use std::collections::BTreeSet;

use petgraph::graph::UnGraph;

use crate::algorithm::conflicto::cursos_chocan;
use crate::models::Curso;

/// Construye el grafo no dirigido de exclusión entre candidatos: una arista
/// une dos secciones que comparten algún bloque o que llevan el mismo nombre
/// de curso (secciones mutuamente excluyentes).
pub fn grafo_de_conflictos(candidatos: &[Curso]) -> UnGraph<usize, ()> {
    let mut grafo = UnGraph::<usize, ()>::new_undirected();
    let nodos: Vec<_> = (0..candidatos.len()).map(|i| grafo.add_node(i)).collect();

    for i in 0..candidatos.len() {
        for j in (i + 1)..candidatos.len() {
            let a = &candidatos[i];
            let b = &candidatos[j];
            if a.nombre == b.nombre || cursos_chocan(a, b) {
                grafo.add_edge(nodos[i], nodos[j], ());
            }
        }
    }

    grafo
}

/// Pares de nombres de curso con choque de horario real (nombres distintos),
/// deduplicados y en orden determinista. Sirve para explicar por qué el
/// conjunto de resultados quedó vacío.
pub fn pares_en_conflicto(candidatos: &[Curso]) -> Vec<(String, String)> {
    let grafo = grafo_de_conflictos(candidatos);
    let mut pares: BTreeSet<(String, String)> = BTreeSet::new();

    for arista in grafo.edge_indices() {
        let (na, nb) = match grafo.edge_endpoints(arista) {
            Some(par) => par,
            None => continue,
        };
        let ca = &candidatos[*grafo.node_weight(na).expect("nodo recién insertado")];
        let cb = &candidatos[*grafo.node_weight(nb).expect("nodo recién insertado")];
        if ca.nombre == cb.nombre {
            // secciones del mismo curso: excluyentes por definición, no es choque
            continue;
        }
        if !cursos_chocan(ca, cb) {
            continue;
        }
        let par = if ca.nombre <= cb.nombre {
            (ca.nombre.clone(), cb.nombre.clone())
        } else {
            (cb.nombre.clone(), ca.nombre.clone())
        };
        pares.insert(par);
    }

    pares.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::tiempo::parse_bloques;

    fn curso(nombre: &str, horario: &str) -> Curso {
        Curso {
            nombre: nombre.to_string(),
            sala: "E-105".to_string(),
            profesor: "Sin asignar".to_string(),
            semestre: "2-2".to_string(),
            horario_raw: horario.to_string(),
            bloques: parse_bloques(horario),
        }
    }

    #[test]
    fn test_pares_en_conflicto() {
        let candidatos = vec![
            curso("A", "['LU1']"),
            curso("B", "['LU1']"),
            curso("C", "['VI5']"),
        ];
        let pares = pares_en_conflicto(&candidatos);
        assert_eq!(pares, vec![("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_secciones_del_mismo_curso_no_se_reportan() {
        let candidatos = vec![curso("A", "['LU1']"), curso("A", "['LU1']")];
        assert!(pares_en_conflicto(&candidatos).is_empty());
    }

    #[test]
    fn test_grafo_cuenta_aristas_de_exclusion() {
        let candidatos = vec![
            curso("A", "['LU1']"),
            curso("A", "['MA1']"),
            curso("B", "['LU1']"),
        ];
        let grafo = grafo_de_conflictos(&candidatos);
        // A/A por nombre, A(LU1)/B por choque
        assert_eq!(grafo.edge_count(), 2);
    }
}
