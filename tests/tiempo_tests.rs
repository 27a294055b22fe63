use quickgrilla::algorithm::tiempo::{parse_bloques, periodo_a_hora};
use quickgrilla::models::Dia;

#[test]
fn test_variantes_de_comillas_equivalentes() {
    // los catálogos de origen mezclan comillas simples y dobles
    let simples = parse_bloques("['LU1', 'JU7']");
    let dobles = parse_bloques("[\"LU1\", \"JU7\"]");
    assert_eq!(simples, dobles);
    assert_eq!(simples.len(), 2);
    assert_eq!(simples[0].dia, Dia::LU);
    assert_eq!(simples[1].periodo, 7);
}

#[test]
fn test_forma_delimitada_equivale_al_literal() {
    assert_eq!(parse_bloques("MA2, VI10"), parse_bloques("['MA2', 'VI10']"));
}

#[test]
fn test_orden_de_tokens_se_conserva() {
    let bloques = parse_bloques("['VI5', 'LU1', 'MI3']");
    let dias: Vec<Dia> = bloques.iter().map(|b| b.dia).collect();
    assert_eq!(dias, vec![Dia::VI, Dia::LU, Dia::MI]);
}

#[test]
fn test_malformados_vacian_sin_fallar() {
    for crudo in [
        "",
        "Sin horario",
        "['SA1']",          // sábado: fuera del conjunto de 5 días
        "['LU0']",          // periodo bajo el rango
        "['LU11']",         // periodo sobre el rango
        "[rotisimo",        // literal inválido
        "LU1, ???",         // token ilegible en forma delimitada
    ] {
        assert!(
            parse_bloques(crudo).is_empty(),
            "'{}' debería parsear vacío",
            crudo
        );
    }
}

#[test]
fn test_tabla_periodo_hora() {
    assert_eq!(periodo_a_hora(1), Some(9));
    assert_eq!(periodo_a_hora(5), Some(13));
    assert_eq!(periodo_a_hora(10), Some(18));
    assert_eq!(periodo_a_hora(0), None);
    assert_eq!(periodo_a_hora(12), None);
}
