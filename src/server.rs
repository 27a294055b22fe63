use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use crate::server_handlers::{analisis, catalogos, docs, exportar, generar};

/// Arma y corre el servidor HTTP. CORS permisivo: el consumidor de esta API
/// es una aplicación de navegador servida desde otro origen.
pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .route("/help", web::get().to(docs::help_handler))
            .route("/catalogos", web::post().to(catalogos::catalogos_upload_handler))
            .route("/catalogos", web::get().to(catalogos::catalogos_list_handler))
            .route(
                "/catalogos/descargar",
                web::get().to(catalogos::catalogos_download_handler),
            )
            .route(
                "/catalogos/eliminar",
                web::get().to(catalogos::catalogos_delete_handler),
            )
            .route("/semestres", web::get().to(catalogos::semestres_handler))
            .route("/generar", web::post().to(generar::generar_handler))
            .route("/seleccionar", web::post().to(generar::seleccionar_handler))
            .route("/exportar", web::get().to(exportar::exportar_handler))
            .route(
                "/analisis/conflictos",
                web::get().to(analisis::conflictos_handler),
            )
            .route(
                "/analithics/resumen",
                web::get().to(analisis::analithics_resumen_handler),
            )
    })
    .workers(std::cmp::max(1, num_cpus::get()))
    .bind(bind_addr)?
    .run()
    .await
}
