// Flujo completo contra un catálogo .xlsx real escrito en disco.
use std::path::PathBuf;

use quickgrilla::algorithm::{filtrar_cursos, generar_horarios_acotado, pares_en_conflicto};
use quickgrilla::excel::{exportar_horario_xlsx, leer_catalogo_cursos};

fn dir_de_trabajo(nombre: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quickgrilla-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("crear dir temporal");
    dir.join(nombre)
}

fn escribir_catalogo(destino: &PathBuf, filas: &[[&str; 5]]) {
    let mut book = umya_spreadsheet::new_file();
    let hoja = book
        .get_sheet_by_name_mut("Sheet1")
        .expect("hoja inicial del workbook nuevo");

    let encabezados = ["nombre", "sala", "profesor", "semestre", "horario"];
    for (col, texto) in encabezados.iter().enumerate() {
        let coord = format!("{}1", (b'A' + col as u8) as char);
        hoja.get_cell_mut(coord.as_str()).set_value(texto.to_string());
    }
    for (i, fila) in filas.iter().enumerate() {
        for (col, texto) in fila.iter().enumerate() {
            let coord = format!("{}{}", (b'A' + col as u8) as char, i + 2);
            hoja.get_cell_mut(coord.as_str()).set_value(texto.to_string());
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, destino).expect("escribir catálogo de prueba");
}

#[test]
fn test_pipeline_completo_desde_xlsx() {
    let ruta = dir_de_trabajo("catalogo-basico.xlsx");
    escribir_catalogo(
        &ruta,
        &[
            ["Algebra", "A-1", "Soto", "1-1", "['LU1', 'MI1']"],
            ["Algebra", "A-2", "Rojas", "1-1", "['MA1']"],
            ["Fisica", "B-1", "Herrera", "1-1", "['LU1']"],
            ["Redes", "C-1", "Vidal", "3-2", "['LU1']"],
        ],
    );

    let filas = leer_catalogo_cursos(ruta.to_str().expect("ruta utf-8")).expect("leer catálogo");
    assert_eq!(filas.len(), 4);
    assert_eq!(filas[0].profesor, "Soto");

    let candidatos = filtrar_cursos(&filas, "1-1");
    assert_eq!(candidatos.len(), 3);

    let horarios = generar_horarios_acotado(&candidatos).expect("dentro de la cota");
    // Fisica ocupa LU1, así que sólo la sección MA1 de Algebra convive con ella
    assert_eq!(horarios.len(), 1);
    assert_eq!(horarios[0].cursos.len(), 2);

    // los pares en conflicto explican la sección descartada
    let pares = pares_en_conflicto(&candidatos);
    assert_eq!(
        pares,
        vec![("Algebra".to_string(), "Fisica".to_string())]
    );

    // y el horario elegido se puede exportar como grilla
    let destino = dir_de_trabajo("horario-exportado.xlsx");
    exportar_horario_xlsx(&horarios[0], &destino).expect("exportar horario");
    assert!(destino.exists());

    // la grilla exportada se puede releer: encabezado + cursos en sus celdas
    let exportado = quickgrilla::excel::io::read_sheet(&destino, "").expect("releer export");
    assert_eq!(exportado[0][0], "Hora");
    assert_eq!(exportado[0][1], "LU");
    // MA1 -> columna MA (índice 2), fila del periodo 1
    assert!(exportado[1][2].contains("Algebra"));
    assert!(exportado[1][1].contains("Fisica"));
}

#[test]
fn test_pipeline_semestre_sin_cursos() {
    let ruta = dir_de_trabajo("catalogo-un-semestre.xlsx");
    escribir_catalogo(&ruta, &[["Algebra", "A-1", "Soto", "1-1", "['LU1']"]]);

    let filas = leer_catalogo_cursos(ruta.to_str().expect("ruta utf-8")).expect("leer catálogo");
    let candidatos = filtrar_cursos(&filas, "4-2");
    assert!(candidatos.is_empty());
    let horarios = generar_horarios_acotado(&candidatos).expect("lista vacía dentro de cota");
    assert!(horarios.is_empty());
}

#[test]
fn test_catalogo_inexistente_es_error() {
    assert!(leer_catalogo_cursos("no-existe-este-catalogo.xlsx").is_err());
    // y los nombres con '..' se rechazan antes de tocar el disco
    assert!(leer_catalogo_cursos("../fuera.xlsx").is_err());
}
