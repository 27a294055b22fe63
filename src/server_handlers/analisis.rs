// Handlers de diagnóstico y analytics.
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::algorithm::{filtrar_cursos, pares_en_conflicto};

/// GET /analisis/conflictos?catalogo=..&semestre=..
/// Pares de cursos cuyo horario choca dentro del semestre pedido. Útil para
/// entender un resultado "sin_soluciones" sin volver a generar.
pub async fn conflictos_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();
    let catalogo = match qm.get("catalogo").map(|s| s.trim()) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "catalogo query parameter is required"}));
        }
    };
    let semestre = match qm.get("semestre").map(|s| s.trim()) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "semestre query parameter is required"}));
        }
    };

    let filas = match crate::excel::leer_catalogo_cursos(&catalogo) {
        Ok(f) => f,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("failed to read catalogo '{}': {}", catalogo, e)}));
        }
    };
    let candidatos = filtrar_cursos(&filas, &semestre);
    let conflictos: Vec<serde_json::Value> = pares_en_conflicto(&candidatos)
        .into_iter()
        .map(|(a, b)| json!({"curso_a": a, "curso_b": b}))
        .collect();

    HttpResponse::Ok().json(json!({
        "catalogo": catalogo,
        "semestre": semestre,
        "candidatos": candidatos.len(),
        "conflictos": conflictos,
    }))
}

/// GET /analithics/resumen
/// Totales y generaciones recientes registradas en la base de analytics.
pub async fn analithics_resumen_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let limit = query
        .get("limit")
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(20);

    match crate::analithics::resumen(limit) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to read analytics: {}", e)})),
    }
}
