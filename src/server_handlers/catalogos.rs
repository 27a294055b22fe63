// Handlers de administración de catálogos subidos.
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::stream::StreamExt;
use serde_json::json;
use tokio::io::AsyncWriteExt;

use crate::excel::{DATAFILES_DIR, list_catalogos, resolve_catalogo_path};

/// GET /catalogos
/// Lista los nombres de catálogos disponibles en el directorio protegido.
pub async fn catalogos_list_handler() -> impl Responder {
    match list_catalogos() {
        Ok(catalogos) => HttpResponse::Ok().json(json!({"catalogos": catalogos})),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to list catalogos: {}", e)})),
    }
}

/// POST /catalogos
/// Guarda los archivos del multipart en el directorio de catálogos.
pub async fn catalogos_upload_handler(mut payload: Multipart) -> impl Responder {
    let base = std::path::Path::new(DATAFILES_DIR);
    if let Err(e) = std::fs::create_dir_all(base) {
        return HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to create catalogos dir: {}", e)}));
    }

    let mut saved: Vec<String> = Vec::new();
    while let Some(field_res) = payload.next().await {
        match field_res {
            Ok(mut field) => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| {
                        format!("catalogo-{}.xlsx", chrono::Utc::now().timestamp_millis())
                    });

                // Sanitizar el nombre un poco
                if filename.contains("..") {
                    continue;
                }

                let filepath = base.join(&filename);
                match tokio::fs::File::create(&filepath).await {
                    Ok(mut f) => {
                        while let Some(chunk) = field.next().await {
                            match chunk {
                                Ok(bytes) => {
                                    if let Err(e) = f.write_all(&bytes).await {
                                        eprintln!("failed to write upload chunk: {}", e);
                                        break;
                                    }
                                }
                                Err(e) => {
                                    eprintln!("upload stream error: {}", e);
                                    break;
                                }
                            }
                        }
                        saved.push(filename);
                    }
                    Err(e) => {
                        eprintln!("failed to create upload file: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("multipart field error: {}", e);
            }
        }
    }

    HttpResponse::Ok().json(json!({"status": "ok", "saved": saved}))
}

/// GET /catalogos/descargar?nombre=Catalogo2026.xlsx
pub async fn catalogos_download_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let nombre = match query.get("nombre") {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => return HttpResponse::BadRequest().json(json!({"error": "missing nombre parameter"})),
    };

    let path = match resolve_catalogo_path(&nombre) {
        Ok(p) => p,
        Err(e) => return HttpResponse::NotFound().json(json!({"error": format!("{}", e)})),
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = match path.extension().and_then(std::ffi::OsStr::to_str) {
                Some("xlsx") => {
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                }
                Some("xls") => "application/vnd.ms-excel",
                _ => "application/octet-stream",
            };
            HttpResponse::Ok()
                .content_type(mime)
                .append_header((
                    actix_web::http::header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", nombre),
                ))
                .body(bytes)
        }
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to read file: {}", e)})),
    }
}

/// GET /catalogos/eliminar?nombre=Catalogo2026.xlsx
pub async fn catalogos_delete_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let nombre = match query.get("nombre") {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => return HttpResponse::BadRequest().json(json!({"error": "missing nombre parameter"})),
    };
    if nombre.contains("..") {
        return HttpResponse::BadRequest().json(json!({"error": "invalid nombre"}));
    }
    let path = std::path::Path::new(DATAFILES_DIR).join(&nombre);
    if !path.exists() {
        return HttpResponse::NotFound().json(json!({"error": "file not found"}));
    }
    match tokio::fs::remove_file(&path).await {
        Ok(_) => HttpResponse::Ok().json(json!({"status": "deleted", "nombre": nombre})),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to delete file: {}", e)})),
    }
}

/// GET /semestres?catalogo=Catalogo2026.xlsx
/// Semestres distintos presentes en el catálogo, en orden de aparición.
pub async fn semestres_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let catalogo = match query.get("catalogo") {
        Some(c) if !c.trim().is_empty() => c.clone(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "catalogo query parameter is required"}));
        }
    };

    match crate::excel::leer_catalogo_cursos(&catalogo) {
        Ok(filas) => {
            let semestres = crate::algorithm::semestres_presentes(&filas);
            HttpResponse::Ok().json(json!({
                "catalogo": catalogo,
                "cursos": filas.len(),
                "semestres": semestres,
            }))
        }
        Err(e) => HttpResponse::BadRequest()
            .json(json!({"error": format!("failed to read catalogo '{}': {}", catalogo, e)})),
    }
}
