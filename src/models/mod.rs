// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Días hábiles de la semana. El generador trabaja con semana de 5 días.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dia {
    LU,
    MA,
    MI,
    JU,
    VI,
}

impl Dia {
    pub const TODOS: [Dia; 5] = [Dia::LU, Dia::MA, Dia::MI, Dia::JU, Dia::VI];

    /// Normaliza un token de día ("LUN", "lu", "Mie") a su variante.
    pub fn desde_token(tok: &str) -> Option<Dia> {
        let token = tok.trim().to_uppercase().chars().take(3).collect::<String>();
        match token.as_str() {
            "LUN" | "LU" => Some(Dia::LU),
            "MAR" | "MA" => Some(Dia::MA),
            "MIE" | "MI" => Some(Dia::MI),
            "JUE" | "JU" => Some(Dia::JU),
            "VIE" | "VI" => Some(Dia::VI),
            _ => None,
        }
    }

    /// Índice de columna 0..=4 en orden LU..VI.
    pub fn indice(&self) -> usize {
        match self {
            Dia::LU => 0,
            Dia::MA => 1,
            Dia::MI => 2,
            Dia::JU => 3,
            Dia::VI => 4,
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Dia::LU => "LU",
            Dia::MA => "MA",
            Dia::MI => "MI",
            Dia::JU => "JU",
            Dia::VI => "VI",
        }
    }
}

/// Bloque atómico de clase: un día y un periodo lectivo (1..=10).
/// Dos bloques chocan sólo si coinciden exactamente en ambos campos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bloque {
    pub dia: Dia,
    pub periodo: u8,
}

/// Fila cruda leída del catálogo, antes de validar el horario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilaCurso {
    pub nombre: String,
    pub sala: String,
    pub profesor: String,
    pub semestre: String,
    pub horario: String,
}

/// Curso validado: la fila del catálogo con sus bloques ya parseados.
/// La identidad para deduplicación es (nombre, horario_raw).
#[derive(Debug, Clone, Serialize)]
pub struct Curso {
    pub nombre: String,
    pub sala: String,
    pub profesor: String,
    pub semestre: String,
    pub horario_raw: String,
    pub bloques: Vec<Bloque>,
}

/// Un horario generado: secuencia de cursos sin choques de bloque y sin
/// nombres repetidos.
#[derive(Debug, Clone, Serialize)]
pub struct Horario {
    pub cursos: Vec<Curso>,
}

/// Criterio de selección aplicado sobre el conjunto de horarios generados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterio {
    MasDiasLibres,
    Profesor,
    Balanceado,
    MenosVentanas,
}

impl Criterio {
    /// Parsea el identificador en minúsculas que usa la API (query strings).
    pub fn desde_str(s: &str) -> Option<Criterio> {
        match s.trim() {
            "mas_dias_libres" => Some(Criterio::MasDiasLibres),
            "profesor" => Some(Criterio::Profesor),
            "balanceado" => Some(Criterio::Balanceado),
            "menos_ventanas" => Some(Criterio::MenosVentanas),
            _ => None,
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Criterio::MasDiasLibres => "mas_dias_libres",
            Criterio::Profesor => "profesor",
            Criterio::Balanceado => "balanceado",
            Criterio::MenosVentanas => "menos_ventanas",
        }
    }
}
