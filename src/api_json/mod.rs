use serde::{Deserialize, Serialize};

use crate::models::Criterio;

/// Parámetros de entrada para la generación y selección de horarios
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "catalogo": "Catalogo2026.xlsx",
///   "semestre": "3-1",
///   "criterio": "mas_dias_libres",
///   "profesor": "García"
/// }
/// ```
///
/// # Campos:
/// - `catalogo`: Nombre del archivo de catálogo subido (requerido)
/// - `semestre`: Semestre objetivo, p.ej. "1-1".."4-2" (requerido)
/// - `criterio`: Criterio de selección: "mas_dias_libres", "profesor",
///   "balanceado" o "menos_ventanas" (requerido sólo para /seleccionar)
/// - `profesor`: Subcadena a buscar cuando el criterio es "profesor"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametrosGeneracion {
    pub catalogo: String,
    pub semestre: String,
    #[serde(default)]
    pub criterio: Option<Criterio>,
    #[serde(default)]
    pub profesor: Option<String>,
}

/// Parsea y valida los parámetros desde un cuerpo JSON.
///
/// Semestre en blanco es un error de parámetros (el usuario todavía no
/// seleccionó uno); un semestre desconocido NO lo es: eso se responde como
/// "sin cursos" más adelante.
pub fn parse_parametros(json_str: &str) -> Result<ParametrosGeneracion, Box<dyn std::error::Error>> {
    let params: ParametrosGeneracion = serde_json::from_str(json_str)?;
    if params.catalogo.trim().is_empty() {
        return Err("catalogo es requerido".into());
    }
    if params.semestre.trim().is_empty() {
        return Err("semestre es requerido: seleccione un semestre antes de generar".into());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completo() {
        let p = parse_parametros(
            r#"{"catalogo": "c.xlsx", "semestre": "1-1", "criterio": "balanceado"}"#,
        )
        .expect("parámetros válidos");
        assert_eq!(p.criterio, Some(Criterio::Balanceado));
        assert!(p.profesor.is_none());
    }

    #[test]
    fn test_semestre_en_blanco_es_error() {
        assert!(parse_parametros(r#"{"catalogo": "c.xlsx", "semestre": "  "}"#).is_err());
        assert!(parse_parametros(r#"{"catalogo": "", "semestre": "1-1"}"#).is_err());
    }

    #[test]
    fn test_criterio_desconocido_es_error() {
        assert!(
            parse_parametros(r#"{"catalogo": "c.xlsx", "semestre": "1-1", "criterio": "magico"}"#)
                .is_err()
        );
    }
}
