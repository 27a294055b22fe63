use rusqlite::Connection;
use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

// Postgres client for remote DB support
use postgres::{Client, NoTls};

/// Abstracción sencilla para conexiones de analytics que puede ser SQLite o
/// Postgres. Para Postgres guardamos la URL y realizamos operaciones en un
/// hilo separado para no arrancar runtimes tokio dentro del runtime existente.
pub enum AnalyticsConn {
    Sqlite(Connection),
    /// Contiene la URL completa (postgres://...)
    PostgresConfig(String),
}

impl fmt::Debug for AnalyticsConn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsConn::Sqlite(_) => write!(f, "AnalyticsConn::Sqlite(..)"),
            AnalyticsConn::PostgresConfig(_) => write!(f, "AnalyticsConn::PostgresConfig(..)"),
        }
    }
}

// load .env at module init if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Ruta del archivo SQLite de analytics. Honra ANALITHICS_DB_PATH /
/// ANALITHICS_DB_URL; otros submódulos abren conexiones de vida corta con
/// esta ruta.
pub fn analytics_db_path() -> PathBuf {
    load_dotenv();
    if let Ok(p) = env::var("ANALITHICS_DB_PATH") {
        PathBuf::from(p)
    } else if let Ok(p) = env::var("ANALITHICS_DB_URL") {
        if p.starts_with("sqlite://") {
            let without = p.trim_start_matches("sqlite://");
            PathBuf::from(without)
        } else if p.starts_with("file://") {
            let without = p.trim_start_matches("file://");
            PathBuf::from(without)
        } else {
            // Para URLs remotas (postgres://...) no hay PathBuf local; ruta por defecto
            PathBuf::from("analithics/analytics.db")
        }
    } else {
        PathBuf::from("analithics/analytics.db")
    }
}

/// Inicializa la base de analytics (directorio + archivo sqlite + tablas).
pub fn init_db() -> Result<(), Box<dyn Error>> {
    load_dotenv();
    // Con sqlite local, asegurar que el directorio exista
    let usa_archivo_local = match env::var("ANALITHICS_DB_URL") {
        Ok(url) => url.starts_with("sqlite://") || url.starts_with("file://"),
        Err(_) => true,
    };
    if usa_archivo_local || env::var("ANALITHICS_DB_PATH").is_ok() {
        let db_path = analytics_db_path();
        if let Some(dir) = db_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
    }

    match open_analytics_connection() {
        Ok(AnalyticsConn::Sqlite(conn)) => {
            conn.execute(
                "CREATE TABLE IF NOT EXISTS generaciones (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    ts TEXT NOT NULL,
                    catalogo TEXT,
                    semestre TEXT,
                    candidatos INTEGER,
                    soluciones INTEGER,
                    duracion_ms INTEGER
                )",
                [],
            )?;

            conn.execute(
                "CREATE TABLE IF NOT EXISTS selecciones (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    ts TEXT NOT NULL,
                    criterio TEXT NOT NULL,
                    profesor TEXT,
                    resultado TEXT
                )",
                [],
            )?;
            Ok(())
        }
        Ok(AnalyticsConn::PostgresConfig(url)) => {
            // Crear tablas en un hilo dedicado para evitar conflictos de runtime
            let url = url.clone();
            let handle = std::thread::spawn(move || -> Result<(), Box<dyn Error + Send + 'static>> {
                let mut client = Client::connect(&url, NoTls)
                    .map_err(|e| Box::new(e) as Box<dyn Error + Send + 'static>)?;
                client
                    .batch_execute(
                        "CREATE TABLE IF NOT EXISTS generaciones (
                            id BIGSERIAL PRIMARY KEY,
                            ts TEXT NOT NULL,
                            catalogo TEXT,
                            semestre TEXT,
                            candidatos BIGINT,
                            soluciones BIGINT,
                            duracion_ms BIGINT
                        );

                        CREATE TABLE IF NOT EXISTS selecciones (
                            id BIGSERIAL PRIMARY KEY,
                            ts TEXT NOT NULL,
                            criterio TEXT NOT NULL,
                            profesor TEXT,
                            resultado TEXT
                        );",
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
        Err(e) => Err(e),
    }
}

/// Abre una conexión a la base de analytics. Acepta esquemas sqlite://,
/// file:// y postgres:// en ANALITHICS_DB_URL; sin URL usa la ruta local.
pub fn open_analytics_connection() -> Result<AnalyticsConn, Box<dyn Error>> {
    load_dotenv();
    if let Ok(url) = env::var("ANALITHICS_DB_URL") {
        if url.starts_with("sqlite://") {
            let path = url.trim_start_matches("sqlite://");
            let conn = Connection::open(path)?;
            return Ok(AnalyticsConn::Sqlite(conn));
        } else if url.starts_with("file://") {
            let path = url.trim_start_matches("file://");
            let conn = Connection::open(path)?;
            return Ok(AnalyticsConn::Sqlite(conn));
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            // Con Postgres sólo guardamos la URL: el connect real ocurre en el
            // sitio de la operación, dentro de su hilo dedicado.
            return Ok(AnalyticsConn::PostgresConfig(url));
        } else {
            return Err(format!("ANALITHICS_DB_URL uses unsupported scheme: {}", url).into());
        }
    }

    let path = analytics_db_path();
    let conn = Connection::open(path)?;
    Ok(AnalyticsConn::Sqlite(conn))
}
