// Exportación del horario seleccionado como archivo .xlsx.
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::algorithm::selector;
use crate::algorithm::{generar_desde_catalogo, pares_en_conflicto};
use crate::excel::EXPORTS_DIR;
use crate::models::{Criterio, Horario};

/// GET /exportar?catalogo=..&semestre=..&criterio=..[&profesor=..]
/// Corre el pipeline, selecciona UN horario según el criterio (por defecto
/// mas_dias_libres, tomando el primero de los empatados) y lo devuelve como
/// adjunto .xlsx. También queda una copia en `data/exports`.
pub async fn exportar_handler(
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
    let criterio = match qm.get("criterio").map(|s| s.trim()) {
        None | Some("") => Criterio::MasDiasLibres,
        Some(s) => match Criterio::desde_str(s) {
            Some(c) => c,
            None => {
                return HttpResponse::BadRequest()
                    .json(json!({"error": format!("criterio desconocido: '{}'", s)}));
            }
        },
    };

    let (candidatos, horarios) = match generar_desde_catalogo(&catalogo, &semestre) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("generation failed: {}", e)}));
        }
    };
    if candidatos.is_empty() {
        return HttpResponse::Ok().json(json!({
            "status": "sin_cursos",
            "mensaje": "no hay cursos para el semestre seleccionado",
        }));
    }
    if horarios.is_empty() {
        let conflictos: Vec<serde_json::Value> = pares_en_conflicto(&candidatos)
            .into_iter()
            .map(|(a, b)| json!({"curso_a": a, "curso_b": b}))
            .collect();
        return HttpResponse::Ok().json(json!({
            "status": "sin_soluciones",
            "mensaje": "ninguna combinación satisface las restricciones",
            "conflictos": conflictos,
        }));
    }

    let elegido: Option<&Horario> = match criterio {
        Criterio::MasDiasLibres => {
            // el primero de los empatados en el máximo
            let maximo = horarios
                .iter()
                .map(selector::dias_libres)
                .max()
                .unwrap_or(0);
            horarios.iter().find(|h| selector::dias_libres(h) == maximo)
        }
        Criterio::Profesor => {
            let buscado = qm.get("profesor").map(|s| s.trim()).unwrap_or("");
            if buscado.is_empty() {
                return HttpResponse::BadRequest().json(
                    json!({"error": "profesor es requerido cuando el criterio es 'profesor'"}),
                );
            }
            match selector::seleccionar_por_profesor(&horarios, buscado) {
                Some(h) => Some(h),
                None => {
                    let sugerencia = selector::sugerir_profesor(&horarios, buscado);
                    return HttpResponse::Ok().json(json!({
                        "status": "sin_coincidencia",
                        "profesor": buscado,
                        "sugerencia": sugerencia,
                    }));
                }
            }
        }
        Criterio::Balanceado => selector::seleccionar_balanceado(&horarios).map(|(h, _)| h),
        Criterio::MenosVentanas => selector::seleccionar_menos_ventanas(&horarios).map(|(h, _)| h),
    };

    let horario = match elegido {
        Some(h) => h,
        None => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": "no se pudo seleccionar un horario"}));
        }
    };

    let nombre_archivo = format!("horario-{}.xlsx", chrono::Utc::now().timestamp_millis());
    let destino = std::path::Path::new(EXPORTS_DIR).join(&nombre_archivo);
    if let Err(e) = crate::excel::exportar_horario_xlsx(horario, &destino) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to export horario: {}", e)}));
    }

    match tokio::fs::read(&destino).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .append_header((
                actix_web::http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", nombre_archivo),
            ))
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to read export: {}", e)})),
    }
}
