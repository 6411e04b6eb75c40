use bayespro_api::config::Config;
use bayespro_events::Dashboard;
use bayespro_report::{DocumentRenderer, MarkupDocument, RenderError, Theme};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_app(bayespro_api::app::build_app(&Config::default())).await
    }

    async fn spawn_app(app: axum::Router) -> Self {
        // Same router as prod, but bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct BrokenRenderer;

impl DocumentRenderer for BrokenRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, _document: &MarkupDocument) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Backend("no renderer available".into()))
    }
}

fn screening_form() -> serde_json::Value {
    json!({
        "label_a": "Enfermedad",
        "label_b": "Prueba positiva",
        "prior_a": 0.02,
        "sensitivity": 0.9,
        "false_positive_rate": 0.01,
    })
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn index_serves_the_dashboard() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("BayesPro Analytics"));
    assert!(body.contains("id=\"prior_a_slider\""));
    assert!(body.contains("btn-exportar"));
}

#[tokio::test]
async fn calculate_returns_posterior_and_toast() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "rendered");
    assert_eq!(body["toast"], true);
    assert_eq!(body["view"]["posterior_a"]["percent"], "64.75%");
    let posterior = body["result"]["posterior_a"].as_f64().unwrap();
    assert!((posterior - 0.018 / 0.0278).abs() < 1e-9);
    assert!(body["chart_svg"].as_str().unwrap().starts_with("<svg"));
    assert!(body["panel_html"].as_str().unwrap().contains("P(Enfermedad|Prueba positiva)"));

    let state: serde_json::Value = client
        .get(srv.url("/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["last_result"]["label_a"], "Enfermedad");
}

#[tokio::test]
async fn missing_input_is_skipped_silently() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/calculate"))
        .json(&json!({"prior_a": 0.2, "sensitivity": 0.9}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let state: serde_json::Value = client
        .get(srv.url("/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(state["last_result"].is_null());
}

#[tokio::test]
async fn invalid_input_reports_error_panel() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut form = screening_form();
    form["prior_a"] = json!(1.5);
    let res = client
        .post(srv.url("/api/calculate"))
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "failed");
    assert!(body["panel_html"].as_str().unwrap().contains("alert-danger"));
}

#[tokio::test]
async fn theme_toggle_redraws_without_toast() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/theme"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["toast"], false);
    assert_eq!(body["theme"]["name"], "dark");
    assert_eq!(body["theme"]["toggle_caption"], "Modo Claro");
    assert!(body["chart_svg"].as_str().unwrap().contains("#303030"));

    let res = client
        .post(srv.url("/api/theme"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "skipped");
    assert_eq!(body["theme"]["name"], "light");
}

#[tokio::test]
async fn export_before_calculation_is_a_noop() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/api/export")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn export_downloads_a_pdf() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();

    let res = client.get(srv.url("/api/export")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/pdf");

    let disposition = res.headers()["content-disposition"].to_str().unwrap().to_string();
    let filename = disposition
        .strip_prefix("attachment; filename=\"")
        .and_then(|s| s.strip_suffix('"'))
        .unwrap();
    assert!(filename.starts_with("reporte_bayesiano_"));
    assert!(filename.ends_with(".pdf"));
    // reporte_bayesiano_ + YYYYMMDD_HHMMSS + .pdf
    assert_eq!(filename.len(), "reporte_bayesiano_".len() + 15 + ".pdf".len());

    let bytes = res.bytes().await.unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn render_failure_downloads_error_text() {
    let dashboard = Dashboard::with_renderer(Theme::Light, Box::new(BrokenRenderer));
    let srv = TestServer::spawn_app(bayespro_api::app::build_app_with(dashboard)).await;
    let client = reqwest::Client::new();

    client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();

    let res = client.get(srv.url("/api/export")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/plain");
    assert_eq!(
        res.headers()["content-disposition"],
        "attachment; filename=\"error.txt\""
    );
    assert_eq!(
        res.text().await.unwrap(),
        "rendering failed: no renderer available"
    );
}

#[tokio::test]
async fn controls_sync_last_edit_wins() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(srv.url("/api/controls/sync"))
        .json(&json!({
            "parameter": "sensitivity",
            "edited": "slider",
            "field": 0.4,
            "slider": 0.75,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["parameter"], "sensitivity");
    assert_eq!(body["field"], 0.75);
    assert_eq!(body["slider"], 0.75);
}

#[tokio::test]
async fn sensitivity_curve_follows_last_result() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/api/sensitivity")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();

    let res = client
        .get(srv.url("/api/sensitivity?lo=0.2&hi=0.4"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 5);
    assert!(body["chart_svg"].as_str().unwrap().contains("polyline"));

    let res = client
        .get(srv.url("/api/sensitivity?lo=0.9&hi=0.1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sensitivity_with_vanishing_step_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();

    let res = client
        .get(srv.url("/api/sensitivity?step=1e-300"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .get(srv.url("/api/sensitivity?step=0.001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["points"].as_array().unwrap().len(), 1001);
}

#[tokio::test]
async fn report_preview_follows_last_result() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/api/report")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    client
        .post(srv.url("/api/calculate"))
        .json(&screening_form())
        .send()
        .await
        .unwrap();

    let res = client.get(srv.url("/api/report")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = res.text().await.unwrap();
    assert!(html.contains("Reporte Bayesiano - "));
    assert!(html.contains("64.75%"));
}
