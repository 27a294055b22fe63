// Exportación de un horario seleccionado a una grilla .xlsx.
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::algorithm::tiempo::{PERIODO_MAX, PERIODO_MIN, periodo_a_hora};
use crate::excel::io::index_to_column_letters;
use crate::models::{Dia, Horario};

/// Coordenada de celda tipo "B3" a partir de columna y fila 1-based.
fn coordenada(col: usize, fila: usize) -> String {
    format!("{}{}", index_to_column_letters(col), fila)
}

/// Escribe el horario como grilla días × horas: encabezado LU..VI, primera
/// columna con la hora de inicio de cada periodo, y en cada celda ocupada
/// "nombre (sala)".
pub fn exportar_horario_xlsx(horario: &Horario, destino: &Path) -> Result<(), Box<dyn Error>> {
    let mut book = umya_spreadsheet::new_file();
    let hoja = book
        .get_sheet_by_name_mut("Sheet1")
        .expect("la hoja inicial siempre existe en un workbook nuevo");

    hoja.get_cell_mut(coordenada(1, 1).as_str()).set_value("Hora");
    for dia in Dia::TODOS.iter() {
        let col = 2 + dia.indice();
        hoja.get_cell_mut(coordenada(col, 1).as_str())
            .set_value(dia.etiqueta());
    }

    for periodo in PERIODO_MIN..=PERIODO_MAX {
        let fila = 1 + periodo as usize;
        let hora = periodo_a_hora(periodo).unwrap_or(0);
        hoja.get_cell_mut(coordenada(1, fila).as_str())
            .set_value(format!("{}:00", hora));
    }

    // celda (columna, fila) -> contenido; el invariante del horario garantiza
    // a lo más un curso por bloque, pero concatenamos por si acaso
    let mut celdas: HashMap<(usize, usize), String> = HashMap::new();
    for curso in horario.cursos.iter() {
        for bloque in curso.bloques.iter() {
            let col = 2 + bloque.dia.indice();
            let fila = 1 + bloque.periodo as usize;
            let texto = format!("{} ({})", curso.nombre, curso.sala);
            celdas
                .entry((col, fila))
                .and_modify(|t| *t = format!("{} / {}", t, texto))
                .or_insert(texto);
        }
    }
    for ((col, fila), texto) in celdas.into_iter() {
        hoja.get_cell_mut(coordenada(col, fila).as_str()).set_value(texto);
    }

    if let Some(dir) = destino.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, destino)
        .map_err(|e| format!("no se pudo escribir el xlsx: {:?}", e))?;
    Ok(())
}
