// --- Generador de Horarios por Semestre - Archivo principal ---

use quickgrilla::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv::dotenv();
    println!("=== Generador de Horarios (API) ===");

    if let Err(e) = quickgrilla::analithics::init_db() {
        eprintln!("WARN: no se pudo inicializar la base de analytics: {}", e);
    }

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("Iniciando servidor en http://{}", bind);
    run_server(&bind).await
}
