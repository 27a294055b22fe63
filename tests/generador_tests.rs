use std::collections::HashSet;

use quickgrilla::algorithm::generador::{MAX_CANDIDATOS, generar_horarios_acotado};
use quickgrilla::algorithm::generar_horarios_validos;
use quickgrilla::algorithm::tiempo::parse_bloques;
use quickgrilla::models::{Curso, Horario};

fn curso(nombre: &str, horario: &str) -> Curso {
    Curso {
        nombre: nombre.to_string(),
        sala: "A-101".to_string(),
        profesor: "Sin asignar".to_string(),
        semestre: "1-1".to_string(),
        horario_raw: horario.to_string(),
        bloques: parse_bloques(horario),
    }
}

fn nombres(h: &Horario) -> HashSet<String> {
    h.cursos.iter().map(|c| c.nombre.clone()).collect()
}

#[test]
fn test_escenario_sin_choques_genera_horario_completo() {
    // Matemática LU1 e Inglés MA2 no comparten bloque: exactamente un
    // horario, con ambos cursos
    let candidatos = vec![curso("Matematica", "['LU1']"), curso("Ingles", "['MA2']")];
    let horarios = generar_horarios_validos(&candidatos);
    assert_eq!(horarios.len(), 1);
    assert_eq!(nombres(&horarios[0]).len(), 2);
}

#[test]
fn test_escenario_choque_total_queda_vacio() {
    // A y B ocupan el mismo bloque; la regla de completitud exige ambos
    // nombres, así que no hay ningún horario aceptable (aunque {A} y {B}
    // por separado serían válidos)
    let candidatos = vec![curso("A", "['LU1']"), curso("B", "['LU1']")];
    assert!(generar_horarios_validos(&candidatos).is_empty());
}

#[test]
fn test_todo_horario_cumple_invariantes() {
    let candidatos = vec![
        curso("Algebra", "['LU1', 'MI2']"),
        curso("Algebra", "['MA1']"),
        curso("Fisica", "['LU1']"),
        curso("Fisica", "['JU4']"),
        curso("Quimica", "['VI5']"),
    ];
    let horarios = generar_horarios_validos(&candidatos);
    assert!(!horarios.is_empty());

    for h in horarios.iter() {
        // ningún bloque repetido dentro del horario
        let mut bloques = Vec::new();
        for c in h.cursos.iter() {
            bloques.extend(c.bloques.iter().copied());
        }
        let unicos: HashSet<_> = bloques.iter().copied().collect();
        assert_eq!(bloques.len(), unicos.len(), "bloques repetidos en {:?}", h);

        // ningún nombre repetido, y todos los nombres candidatos presentes
        assert_eq!(nombres(h).len(), h.cursos.len());
        assert_eq!(nombres(h).len(), 3);
    }
}

#[test]
fn test_completitud_contra_lista_original() {
    // Tres nombres candidatos; las secciones de C chocan con todo lo demás,
    // así que ningún horario puede llevar los tres nombres -> vacío
    let candidatos = vec![
        curso("A", "['LU1']"),
        curso("B", "['MA1']"),
        curso("C", "['LU1']"),
        curso("C", "['MA1']"),
    ];
    assert!(generar_horarios_validos(&candidatos).is_empty());
}

#[test]
fn test_idempotencia_del_conjunto_de_resultados() {
    let candidatos = vec![
        curso("Algebra", "['LU1']"),
        curso("Algebra", "['MA1']"),
        curso("Fisica", "['MI2']"),
        curso("Redes", "['JU3', 'VI3']"),
    ];
    let firma = |hs: &[Horario]| -> HashSet<Vec<String>> {
        hs.iter()
            .map(|h| h.cursos.iter().map(|c| c.horario_raw.clone()).collect())
            .collect()
    };
    let primera = firma(&generar_horarios_validos(&candidatos));
    let segunda = firma(&generar_horarios_validos(&candidatos));
    assert_eq!(primera, segunda);
}

#[test]
fn test_curso_sin_bloques_entra_sin_restricciones() {
    // horario ilegible -> sin bloques -> nunca choca, pero su nombre cuenta
    let candidatos = vec![curso("A", "['LU1']"), curso("B", "horario ilegible")];
    let horarios = generar_horarios_validos(&candidatos);
    assert_eq!(horarios.len(), 1);
    assert_eq!(nombres(&horarios[0]).len(), 2);
}

#[test]
fn test_cota_de_candidatos_rechaza_listas_grandes() {
    let candidatos: Vec<Curso> = (0..MAX_CANDIDATOS + 1)
        .map(|i| curso(&format!("Curso{}", i), "['LU1']"))
        .collect();
    let err = generar_horarios_acotado(&candidatos).unwrap_err();
    assert!(format!("{}", err).contains("demasiadas secciones"));
}
