use chrono::Utc;
use postgres::{Client, NoTls};
use rusqlite::params;
use std::error::Error;

use crate::analithics::db::{AnalyticsConn, open_analytics_connection};

/// Registra una generación de horarios. Abre una conexión de vida corta e
/// inserta la fila.
pub fn log_generacion(
    catalogo: &str,
    semestre: &str,
    candidatos: i64,
    soluciones: i64,
    duracion_ms: i64,
) -> Result<(), Box<dyn Error>> {
    let ts = Utc::now().to_rfc3339();
    match open_analytics_connection()? {
        AnalyticsConn::Sqlite(conn) => {
            conn.execute(
                "INSERT INTO generaciones (ts, catalogo, semestre, candidatos, soluciones, duracion_ms)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![ts, catalogo, semestre, candidatos, soluciones, duracion_ms],
            )?;
            Ok(())
        }
        AnalyticsConn::PostgresConfig(url) => {
            let catalogo = catalogo.to_string();
            let semestre = semestre.to_string();
            let handle = std::thread::spawn(move || -> Result<(), Box<dyn Error + Send + 'static>> {
                let mut client = Client::connect(&url, NoTls)
                    .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                client
                    .execute(
                        "INSERT INTO generaciones (ts, catalogo, semestre, candidatos, soluciones, duracion_ms)
                         VALUES ($1, $2, $3, $4, $5, $6)",
                        &[&ts, &catalogo, &semestre, &candidatos, &soluciones, &duracion_ms],
                    )
                    .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                Ok(())
            });
            match handle.join() {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e as Box<dyn Error>),
                Err(e) => Err(format!("thread join error: {:?}", e).into()),
            }
        }
    }
}

/// Registra una selección por criterio (resultado: "ok" / "sin_coincidencia").
pub fn log_seleccion(
    criterio: &str,
    profesor: Option<&str>,
    resultado: &str,
) -> Result<(), Box<dyn Error>> {
    let ts = Utc::now().to_rfc3339();
    match open_analytics_connection()? {
        AnalyticsConn::Sqlite(conn) => {
            conn.execute(
                "INSERT INTO selecciones (ts, criterio, profesor, resultado) VALUES (?1, ?2, ?3, ?4)",
                params![ts, criterio, profesor, resultado],
            )?;
            Ok(())
        }
        AnalyticsConn::PostgresConfig(url) => {
            let criterio = criterio.to_string();
            let profesor = profesor.map(|p| p.to_string());
            let resultado = resultado.to_string();
            let handle = std::thread::spawn(move || -> Result<(), Box<dyn Error + Send + 'static>> {
                let mut client = Client::connect(&url, NoTls)
                    .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                client
                    .execute(
                        "INSERT INTO selecciones (ts, criterio, profesor, resultado) VALUES ($1, $2, $3, $4)",
                        &[&ts, &criterio, &profesor, &resultado],
                    )
                    .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                Ok(())
            });
            match handle.join() {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e as Box<dyn Error>),
                Err(e) => Err(format!("thread join error: {:?}", e).into()),
            }
        }
    }
}

/// Variante best-effort: los fallos de analytics se reportan por stderr y
/// nunca afectan el pedido en curso.
pub fn log_generacion_segura(
    catalogo: &str,
    semestre: &str,
    candidatos: i64,
    soluciones: i64,
    duracion_ms: i64,
) {
    if let Err(e) = log_generacion(catalogo, semestre, candidatos, soluciones, duracion_ms) {
        eprintln!("WARN: no se pudo registrar la generación en analytics: {}", e);
    }
}

/// Variante best-effort de `log_seleccion`.
pub fn log_seleccion_segura(criterio: &str, profesor: Option<&str>, resultado: &str) {
    if let Err(e) = log_seleccion(criterio, profesor, resultado) {
        eprintln!("WARN: no se pudo registrar la selección en analytics: {}", e);
    }
}
