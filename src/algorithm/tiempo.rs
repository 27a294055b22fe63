// Parseo de la codificación cruda de horarios por curso.
use crate::models::{Bloque, Dia};

/// Tabla periodo -> hora de inicio. Periodo 1 = 09:00, periodo 10 = 18:00.
pub const PERIODO_A_HORA: [u8; 10] = [9, 10, 11, 12, 13, 14, 15, 16, 17, 18];

pub const PERIODO_MIN: u8 = 1;
pub const PERIODO_MAX: u8 = 10;

/// Hora de inicio del periodo indicado, si el periodo es válido.
pub fn periodo_a_hora(periodo: u8) -> Option<u8> {
    if (PERIODO_MIN..=PERIODO_MAX).contains(&periodo) {
        Some(PERIODO_A_HORA[(periodo - 1) as usize])
    } else {
        None
    }
}

/// Parsea un token individual tipo "LU3": prefijo de día + número de periodo.
fn parse_token(tok: &str) -> Option<Bloque> {
    let t = tok.trim();
    if t.is_empty() {
        return None;
    }
    let pos_digito = t.find(|c: char| c.is_ascii_digit())?;
    let (dia_tok, numero) = t.split_at(pos_digito);
    let dia = Dia::desde_token(dia_tok)?;
    let periodo = numero.trim().parse::<u8>().ok()?;
    if !(PERIODO_MIN..=PERIODO_MAX).contains(&periodo) {
        return None;
    }
    Some(Bloque { dia, periodo })
}

/// Parsea la codificación cruda de horario de un curso a bloques (día, periodo).
///
/// Acepta dos formas:
/// - literal de lista `["LU1", "MA3"]`, tolerando comillas simples o dobles
///   (los catálogos de origen usan cualquiera de los dos estilos)
/// - cadena delimitada `LU1, MA3` (coma o punto y coma)
///
/// Entrada malformada devuelve lista vacía: un curso con horario ilegible
/// no debe abortar la generación del resto. Un token ilegible invalida la
/// lista completa (todo-o-nada).
pub fn parse_bloques(crudo: &str) -> Vec<Bloque> {
    let s = crudo.trim();
    if s.is_empty() {
        return vec![];
    }

    // Forma literal: normalizar comillas simples y delegar en serde_json
    if s.starts_with('[') {
        let normalizado = s.replace('\'', "\"");
        let tokens: Vec<String> = match serde_json::from_str(&normalizado) {
            Ok(t) => t,
            Err(_) => return vec![],
        };
        let mut bloques = Vec::with_capacity(tokens.len());
        for tok in tokens.iter() {
            match parse_token(tok) {
                Some(b) => bloques.push(b),
                None => return vec![],
            }
        }
        return bloques;
    }

    // Forma delimitada
    let mut bloques = Vec::new();
    for tok in s.split(|c| c == ',' || c == ';') {
        if tok.trim().is_empty() {
            continue;
        }
        match parse_token(tok) {
            Some(b) => bloques.push(b),
            None => return vec![],
        }
    }
    bloques
}
