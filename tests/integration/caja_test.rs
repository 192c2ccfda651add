//! Integration tests for caja operations.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_cajas_seeded() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let cajas = response.body.as_array().expect("array body");
    assert_eq!(cajas.len(), 3);
    assert_eq!(cajas[0]["caja_id"], 1);
    assert_eq!(cajas[0]["estado"], "ACT");
    assert_eq!(cajas[0]["ubicacion_id"], "Norte");
    assert_eq!(cajas[0]["expedientes_count"], 2);
}

#[tokio::test]
async fn test_list_cajas_empty_store() {
    let app = TestApp::empty().await;

    let response = app.request("GET", "/cajas", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_get_caja() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas/2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["caja_id"], 2);
    assert_eq!(response.body["estado"], "INA");
    assert_eq!(response.body["ubicacion_id"], "Sur");
    assert_eq!(response.body["expedientes_count"], 1);
}

#[tokio::test]
async fn test_get_caja_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas/99", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["message"], "Caja con ID 99 no encontrada");
}

#[tokio::test]
async fn test_get_caja_non_numeric_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_caja() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACT", "ubicacion_id": "Este" });
    let response = app.request("POST", "/cajas", Some(body)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.headers["location"], "/cajas/4");
    assert_eq!(response.body["caja_id"], 4);
    assert_eq!(response.body["estado"], "ACT");
    assert_eq!(response.body["ubicacion_id"], "Este");
    assert_eq!(response.body["expedientes_count"], 0);
}

#[tokio::test]
async fn test_create_caja_blank_estado() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "   ", "ubicacion_id": "Norte" });
    let response = app.request("POST", "/cajas", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "El estado es obligatorio");
}

#[tokio::test]
async fn test_create_caja_estado_wrong_length() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACTIVO", "ubicacion_id": "Norte" });
    let response = app.request("POST", "/cajas", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "El estado debe tener exactamente 3 caracteres"
    );
}

#[tokio::test]
async fn test_create_caja_unknown_ubicacion() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACT", "ubicacion_id": "Noreste" });
    let response = app.request("POST", "/cajas", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Ubicación inválida. Valores permitidos: Norte, Sur, Centro, Este, Oeste"
    );
}

#[tokio::test]
async fn test_create_caja_missing_field() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACT" });
    let response = app.request("POST", "/cajas", Some(body)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_caja() {
    let app = TestApp::new().await;

    let body = json!({ "caja_id": 1, "estado": "INA", "ubicacion_id": "Oeste" });
    let response = app.request("PUT", "/cajas/1", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["caja_id"], 1);
    assert_eq!(response.body["estado"], "INA");
    assert_eq!(response.body["ubicacion_id"], "Oeste");
    assert_eq!(response.body["expedientes_count"], 2);
}

#[tokio::test]
async fn test_update_caja_id_mismatch() {
    let app = TestApp::new().await;

    // Invalid fields as well, but the mismatch is reported first.
    let body = json!({ "caja_id": 2, "estado": "", "ubicacion_id": "" });
    let response = app.request("PUT", "/cajas/1", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        response.body["message"],
        "El ID de la URL no coincide con el ID del cuerpo de la petición"
    );
}

#[tokio::test]
async fn test_update_caja_invalid_estado_leaves_caja_unchanged() {
    let app = TestApp::new().await;

    let body = json!({ "caja_id": 1, "estado": "AB", "ubicacion_id": "Norte" });
    let response = app.request("PUT", "/cajas/1", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "El estado debe tener exactamente 3 caracteres"
    );

    let response = app.request("GET", "/cajas/1", None).await;
    assert_eq!(response.body["estado"], "ACT");
    assert_eq!(response.body["ubicacion_id"], "Norte");
}

#[tokio::test]
async fn test_update_caja_not_found() {
    let app = TestApp::new().await;

    let body = json!({ "caja_id": 99, "estado": "ACT", "ubicacion_id": "Norte" });
    let response = app.request("PUT", "/cajas/99", Some(body)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Caja con ID 99 no encontrada");
}

#[tokio::test]
async fn test_delete_caja_with_expedientes() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/cajas/1", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(
        response.body["message"],
        "No se puede eliminar una caja que contiene expedientes"
    );

    // The caja is untouched.
    let response = app.request("GET", "/cajas/1", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_empty_caja() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACT", "ubicacion_id": "Este" });
    let created = app.request("POST", "/cajas", Some(body)).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let response = app.request("DELETE", "/cajas/4", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/cajas/4", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_caja_not_found() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/cajas/99", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Caja con ID 99 no encontrada");
}

#[tokio::test]
async fn test_list_expedientes_de_caja() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas/1/expedientes", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let expedientes = response.body.as_array().expect("array body");
    assert_eq!(expedientes.len(), 2);
    assert!(expedientes.iter().all(|e| e["caja_id"] == 1));
    assert_eq!(expedientes[0]["nombre_empleado"], "Juan Pérez");
}

#[tokio::test]
async fn test_list_expedientes_de_caja_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/cajas/99/expedientes", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Caja con ID 99 no encontrada");
}

#[tokio::test]
async fn test_caja_ids_are_not_reused() {
    let app = TestApp::new().await;

    let body = json!({ "estado": "ACT", "ubicacion_id": "Este" });
    let created = app.request("POST", "/cajas", Some(body.clone())).await;
    assert_eq!(created.body["caja_id"], 4);

    let response = app.request("DELETE", "/cajas/4", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let created = app.request("POST", "/cajas", Some(body)).await;
    assert_eq!(created.body["caja_id"], 5);
}
