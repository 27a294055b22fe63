// Handlers del flujo principal: generación y selección de horarios.
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::algorithm::selector;
use crate::algorithm::{generar_desde_catalogo, pares_en_conflicto};
use crate::analithics::{log_generacion_segura, log_seleccion_segura};
use crate::api_json::{ParametrosGeneracion, parse_parametros};
use crate::models::{Criterio, Curso, Horario};

/// Cantidad máxima de horarios serializados en la respuesta de /generar.
/// El conteo total siempre viaja aparte.
const MAX_HORARIOS_RESPUESTA: usize = 20;

fn parse_body(body: web::Json<serde_json::Value>) -> Result<ParametrosGeneracion, HttpResponse> {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => {
            return Err(HttpResponse::BadRequest()
                .json(json!({"error": format!("invalid JSON body: {}", e)})));
        }
    };
    parse_parametros(&json_str).map_err(|e| {
        HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)}))
    })
}

/// Corre el pipeline completo para los parámetros dados y registra la
/// generación en analytics. Errores de lectura o de cota vuelven como Err.
fn correr_pipeline(
    params: &ParametrosGeneracion,
) -> Result<(Vec<Curso>, Vec<Horario>), HttpResponse> {
    let inicio = std::time::Instant::now();
    let (candidatos, horarios) = match generar_desde_catalogo(&params.catalogo, &params.semestre) {
        Ok(r) => r,
        Err(e) => {
            return Err(HttpResponse::BadRequest()
                .json(json!({"error": format!("generation failed: {}", e)})));
        }
    };
    let duracion_ms = inicio.elapsed().as_millis() as i64;
    log_generacion_segura(
        &params.catalogo,
        &params.semestre,
        candidatos.len() as i64,
        horarios.len() as i64,
        duracion_ms,
    );
    Ok((candidatos, horarios))
}

/// Respuesta para los dos estados "sin resultados" del pipeline, o None si
/// hay horarios para seguir trabajando.
fn respuesta_sin_resultados(candidatos: &[Curso], horarios: &[Horario]) -> Option<HttpResponse> {
    if candidatos.is_empty() {
        return Some(HttpResponse::Ok().json(json!({
            "status": "sin_cursos",
            "mensaje": "no hay cursos para el semestre seleccionado; no se pudo generar ningún horario",
        })));
    }
    if horarios.is_empty() {
        let conflictos: Vec<serde_json::Value> = pares_en_conflicto(candidatos)
            .into_iter()
            .map(|(a, b)| json!({"curso_a": a, "curso_b": b}))
            .collect();
        return Some(HttpResponse::Ok().json(json!({
            "status": "sin_soluciones",
            "mensaje": "ninguna combinación satisface las restricciones",
            "conflictos": conflictos,
        })));
    }
    None
}

/// POST /generar
/// Espera un JSON con la forma de `ParametrosGeneracion` (catalogo + semestre)
/// y responde con el conjunto completo de horarios válidos.
pub async fn generar_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let (candidatos, horarios) = match correr_pipeline(&params) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if let Some(resp) = respuesta_sin_resultados(&candidatos, &horarios) {
        return resp;
    }

    eprintln!(
        "🗓️  [generar] {} candidatos -> {} horarios ({} / {})",
        candidatos.len(),
        horarios.len(),
        params.catalogo,
        params.semestre
    );

    let muestra: Vec<&Horario> = horarios.iter().take(MAX_HORARIOS_RESPUESTA).collect();
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "candidatos": candidatos.len(),
        "horarios_count": horarios.len(),
        "horarios": muestra,
    }))
}

/// POST /seleccionar
/// Recomputa el pipeline y aplica el criterio pedido sobre el conjunto
/// generado. El conjunto no se guarda entre pedidos: cada acción de usuario
/// recalcula todo de arriba a abajo.
pub async fn seleccionar_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let criterio = match params.criterio {
        Some(c) => c,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "criterio es requerido para /seleccionar"}));
        }
    };

    let (candidatos, horarios) = match correr_pipeline(&params) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if let Some(resp) = respuesta_sin_resultados(&candidatos, &horarios) {
        return resp;
    }

    match criterio {
        Criterio::MasDiasLibres => {
            let (dias, mejores) = selector::seleccionar_mas_dias_libres(&horarios);
            log_seleccion_segura(criterio.etiqueta(), None, "ok");
            HttpResponse::Ok().json(json!({
                "status": "ok",
                "criterio": criterio.etiqueta(),
                "dias_libres": dias,
                "horarios_count": horarios.len(),
                "horarios": mejores,
            }))
        }
        Criterio::Profesor => {
            let buscado = match params.profesor.as_deref() {
                Some(p) if !p.trim().is_empty() => p,
                _ => {
                    return HttpResponse::BadRequest().json(
                        json!({"error": "profesor es requerido cuando el criterio es 'profesor'"}),
                    );
                }
            };
            match selector::seleccionar_por_profesor(&horarios, buscado) {
                Some(horario) => {
                    log_seleccion_segura(criterio.etiqueta(), Some(buscado), "ok");
                    HttpResponse::Ok().json(json!({
                        "status": "ok",
                        "criterio": criterio.etiqueta(),
                        "profesor": buscado.trim(),
                        "horarios_count": horarios.len(),
                        "horario": horario,
                    }))
                }
                None => {
                    // sin coincidencia: el conjunto generado sigue vigente,
                    // sólo esta heurística no encontró nada
                    let sugerencia = selector::sugerir_profesor(&horarios, buscado);
                    log_seleccion_segura(criterio.etiqueta(), Some(buscado), "sin_coincidencia");
                    HttpResponse::Ok().json(json!({
                        "status": "sin_coincidencia",
                        "criterio": criterio.etiqueta(),
                        "profesor": buscado.trim(),
                        "mensaje": format!("ningún horario contiene un profesor que coincida con '{}'", buscado.trim()),
                        "sugerencia": sugerencia,
                        "horarios_count": horarios.len(),
                    }))
                }
            }
        }
        Criterio::Balanceado => match selector::seleccionar_balanceado(&horarios) {
            Some((horario, puntaje)) => {
                log_seleccion_segura(criterio.etiqueta(), None, "ok");
                HttpResponse::Ok().json(json!({
                    "status": "ok",
                    "criterio": criterio.etiqueta(),
                    "puntaje_balance": puntaje,
                    "horarios_count": horarios.len(),
                    "horario": horario,
                }))
            }
            None => HttpResponse::InternalServerError()
                .json(json!({"error": "conjunto de horarios vacío tras la generación"})),
        },
        Criterio::MenosVentanas => match selector::seleccionar_menos_ventanas(&horarios) {
            Some((horario, puntaje)) => {
                log_seleccion_segura(criterio.etiqueta(), None, "ok");
                HttpResponse::Ok().json(json!({
                    "status": "ok",
                    "criterio": criterio.etiqueta(),
                    "puntaje_ventanas": puntaje,
                    "horarios_count": horarios.len(),
                    "horario": horario,
                }))
            }
            None => HttpResponse::InternalServerError()
                .json(json!({"error": "conjunto de horarios vacío tras la generación"})),
        },
    }
}
