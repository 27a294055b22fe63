use calamine::{Data, open_workbook_auto};
use std::path::Path;

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normaliza un nombre human-readable: minúsculas, sin acentos, puntuación a
/// espacios y espacios múltiples colapsados.
pub fn normalize_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // mapa simple de acentos comunes en español/latam
    for ch in s.chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' | 'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            'Ç' | 'ç' => 'c',
            other => other,
        };

        if c.is_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(' ');
        }
    }

    // colapsar espacios múltiples
    let mut res = String::with_capacity(out.len());
    let mut prev_space = false;
    for ch in out.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                res.push(' ');
                prev_space = true;
            }
        } else {
            res.push(ch);
            prev_space = false;
        }
    }

    res.trim().to_string()
}

/// Convierte un índice de columna 1-based a letras (1 -> "A", 27 -> "AA").
/// Se usa para armar coordenadas de celda al exportar.
pub fn index_to_column_letters(mut idx: usize) -> String {
    let mut letras: Vec<char> = Vec::new();
    while idx > 0 {
        let resto = (idx - 1) % 26;
        letras.push((b'A' + resto as u8) as char);
        idx = (idx - 1) / 26;
    }
    letras.iter().rev().collect()
}

/// Intenta leer una hoja del archivo Excel y devolverla como Vec<Vec<String>>.
/// Si la hoja pedida no existe se usa la primera del workbook.
pub fn read_sheet<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    use calamine::Reader;
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = if sheet_name.is_empty() {
        names.first().cloned().unwrap_or_default()
    } else {
        names
            .iter()
            .find(|s| *s == sheet_name)
            .cloned()
            .unwrap_or_else(|| names.first().cloned().unwrap_or_default())
    };

    if sheet_to_use.is_empty() {
        return Ok(Vec::new());
    }

    match workbook.worksheet_range(&sheet_to_use) {
        Ok(range) => {
            let mut rows: Vec<Vec<String>> = Vec::new();
            for r in range.rows() {
                let mut row_vec: Vec<String> = Vec::new();
                for cell in r.iter() {
                    row_vec.push(cell_to_string(cell));
                }
                rows.push(row_vec);
            }
            Ok(rows)
        }
        Err(_) => Ok(Vec::new()),
    }
}
