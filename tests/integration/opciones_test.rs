//! Integration tests for the catalog option listings.

use axum::http::StatusCode;
use serde_json::json;

use archivo_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_ubicaciones() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/opciones/ubicaciones", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!(["Norte", "Sur", "Centro", "Este", "Oeste"])
    );
}

#[tokio::test]
async fn test_list_tipos_expediente() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/opciones/tipos-expediente", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["Histórico", "Día a Día", "Guarda"]));
}

#[tokio::test]
async fn test_configured_catalog_drives_options_and_validation() {
    let mut config = AppConfig::default();
    config.store.seed_demo_data = false;
    config.catalogo.ubicaciones = vec!["Bodega A".to_string(), "Bodega B".to_string()];
    let app = TestApp::with_config(config).await;

    let response = app.request("GET", "/opciones/ubicaciones", None).await;
    assert_eq!(response.body, json!(["Bodega A", "Bodega B"]));

    let body = json!({ "estado": "ACT", "ubicacion_id": "Bodega A" });
    let response = app.request("POST", "/cajas", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = json!({ "estado": "ACT", "ubicacion_id": "Norte" });
    let response = app.request("POST", "/cajas", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Ubicación inválida. Valores permitidos: Bodega A, Bodega B"
    );
}
