use postgres::{Client, NoTls};
use rusqlite::params;
use serde_json::{Value, json};
use std::error::Error;

use crate::analithics::db::{AnalyticsConn, open_analytics_connection};

/// Fila resumida de la tabla `generaciones`.
type FilaGeneracion = (i64, String, String, String, i64, i64, i64);

/// Resumen de actividad: totales y últimas generaciones. Pensado para el
/// endpoint GET /analithics/resumen.
pub fn resumen(limit: i64) -> Result<Value, Box<dyn Error>> {
    let (total_generaciones, total_selecciones, recientes) = match open_analytics_connection()? {
        AnalyticsConn::Sqlite(conn) => {
            let total_g: i64 =
                conn.query_row("SELECT COUNT(*) FROM generaciones", [], |r| r.get(0))?;
            let total_s: i64 =
                conn.query_row("SELECT COUNT(*) FROM selecciones", [], |r| r.get(0))?;

            let mut stmt = conn.prepare(
                "SELECT id, ts, catalogo, semestre, candidatos, soluciones, duracion_ms
                 FROM generaciones ORDER BY id DESC LIMIT ?1",
            )?;
            let filas_iter = stmt.query_map(params![limit], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    row.get::<_, Option<i64>>(4)?.unwrap_or(0),
                    row.get::<_, Option<i64>>(5)?.unwrap_or(0),
                    row.get::<_, Option<i64>>(6)?.unwrap_or(0),
                ))
            })?;
            let mut filas: Vec<FilaGeneracion> = Vec::new();
            for f in filas_iter {
                filas.push(f?);
            }
            (total_g, total_s, filas)
        }
        AnalyticsConn::PostgresConfig(url) => {
            let handle = std::thread::spawn(
                move || -> Result<(i64, i64, Vec<FilaGeneracion>), Box<dyn Error + Send + 'static>> {
                    let mut client = Client::connect(&url, NoTls)
                        .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                    let total_g: i64 = client
                        .query_one("SELECT COUNT(*) FROM generaciones", &[])
                        .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?
                        .get(0);
                    let total_s: i64 = client
                        .query_one("SELECT COUNT(*) FROM selecciones", &[])
                        .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?
                        .get(0);
                    let rows = client
                        .query(
                            "SELECT id, ts, catalogo, semestre, candidatos, soluciones, duracion_ms
                             FROM generaciones ORDER BY id DESC LIMIT $1",
                            &[&limit],
                        )
                        .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                    let mut filas: Vec<FilaGeneracion> = Vec::new();
                    for r in rows.iter() {
                        filas.push((
                            r.get(0),
                            r.get(1),
                            r.get::<_, Option<String>>(2).unwrap_or_default(),
                            r.get::<_, Option<String>>(3).unwrap_or_default(),
                            r.get::<_, Option<i64>>(4).unwrap_or(0),
                            r.get::<_, Option<i64>>(5).unwrap_or(0),
                            r.get::<_, Option<i64>>(6).unwrap_or(0),
                        ));
                    }
                    Ok((total_g, total_s, filas))
                },
            );
            match handle.join() {
                Ok(res) => res.map_err(|e| e as Box<dyn Error>)?,
                Err(e) => return Err(format!("thread join error: {:?}", e).into()),
            }
        }
    };

    let recientes_json: Vec<Value> = recientes
        .into_iter()
        .map(|(id, ts, catalogo, semestre, candidatos, soluciones, duracion_ms)| {
            json!({
                "id": id,
                "ts": ts,
                "catalogo": catalogo,
                "semestre": semestre,
                "candidatos": candidatos,
                "soluciones": soluciones,
                "duracion_ms": duracion_ms,
            })
        })
        .collect();

    Ok(json!({
        "total_generaciones": total_generaciones,
        "total_selecciones": total_selecciones,
        "generaciones_recientes": recientes_json,
    }))
}
