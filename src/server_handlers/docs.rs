// Documentación en línea de la API.
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ParametrosGeneracion;
use crate::models::Criterio;

pub async fn help_handler() -> impl Responder {
    // Ejemplo de ParametrosGeneracion para POST /generar y /seleccionar
    let example = ParametrosGeneracion {
        catalogo: "Catalogo2026.xlsx".to_string(),
        semestre: "3-1".to_string(),
        criterio: Some(Criterio::MasDiasLibres),
        profesor: Some("García".to_string()),
    };

    let help = json!({
        "description": "API del generador de horarios. Subir un catálogo (.xlsx) con columnas nombre/sala/profesor/semestre/horario, generar todas las combinaciones sin choques para un semestre y seleccionar una por criterio.",
        "endpoints": {
            "POST /catalogos": "subir catálogos (multipart)",
            "GET /catalogos": "listar catálogos disponibles",
            "GET /catalogos/descargar?nombre=": "descargar un catálogo",
            "GET /catalogos/eliminar?nombre=": "eliminar un catálogo",
            "GET /semestres?catalogo=": "semestres presentes en el catálogo",
            "POST /generar": "generar todos los horarios válidos",
            "POST /seleccionar": "elegir horario(s) según criterio",
            "GET /exportar?catalogo=&semestre=&criterio=": "horario elegido como .xlsx",
            "GET /analisis/conflictos?catalogo=&semestre=": "pares de cursos en choque",
            "GET /analithics/resumen": "actividad registrada",
        },
        "post_example": example,
        "criterios": ["mas_dias_libres", "profesor", "balanceado", "menos_ventanas"],
        "note": "el horario de cada curso se codifica como lista de bloques día+periodo, p.ej. ['LU1', 'MI3']; periodos 1..10 = 09:00..18:00",
    });

    HttpResponse::Ok().json(help)
}
