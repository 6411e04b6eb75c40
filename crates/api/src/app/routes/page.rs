//! The dashboard page.
//!
//! Server-rendered shell; the script posts dashboard events to the JSON
//! endpoints and swaps in the returned panel/chart fragments.

use axum::{extract::Extension, response::Html};
use html_escape::{encode_double_quoted_attribute, encode_text};

use bayespro_events::{
    event::{DEFAULT_LABEL_A, DEFAULT_LABEL_B},
    Parameter,
};
use bayespro_report::Theme;

use crate::context::DashboardContext;

const STYLESHEETS: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<style>
body.theme-dark { background: #222; color: #eee; }
body.theme-dark .card { background: #303030; color: #eee; }
#toast { position: fixed; top: 0; right: 0; margin: 1rem; display: none; }
</style>"#;

const SCRIPT: &str = r#"<script>
const PARAMS = ["prior_a", "sensitivity", "false_positive_rate"];

function num(id) {
  const raw = document.getElementById(id).value;
  if (raw === "") return null;
  const v = Number(raw);
  return Number.isNaN(v) ? null : v;
}

function form() {
  return {
    label_a: document.getElementById("label_a").value,
    label_b: document.getElementById("label_b").value,
    prior_a: num("prior_a"),
    sensitivity: num("sensitivity"),
    false_positive_rate: num("false_positive_rate"),
  };
}

async function post(url, body) {
  return fetch(url, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
}

function applyTheme(theme) {
  document.body.classList.toggle("theme-dark", theme.name === "dark");
  document.getElementById("btn-tema").innerHTML =
    '<i class="fas ' + theme.toggle_icon + ' me-2"></i>' + theme.toggle_caption;
}

async function show(res) {
  if (res.status === 204) return;
  const body = await res.json();
  if (body.theme) applyTheme(body.theme);
  if (body.panel_html) document.getElementById("resultado-detallado").innerHTML = body.panel_html;
  if (body.chart_svg) document.getElementById("grafico-bayes").innerHTML = body.chart_svg;
  if (body.toast) {
    const toast = document.getElementById("toast");
    toast.style.display = "block";
    setTimeout(() => { toast.style.display = "none"; }, 3000);
  }
}

async function sync(parameter, edited) {
  const res = await post("/api/controls/sync", {
    parameter,
    edited,
    field: num(parameter),
    slider: num(parameter + "_slider"),
  });
  const body = await res.json();
  document.getElementById(parameter).value = body.field ?? "";
  if (body.slider !== null) document.getElementById(parameter + "_slider").value = body.slider;
}

async function sensitivity() {
  const lo = document.getElementById("rango-lo").value;
  const hi = document.getElementById("rango-hi").value;
  const res = await fetch("/api/sensitivity?lo=" + lo + "&hi=" + hi);
  if (res.status !== 200) return;
  const body = await res.json();
  document.getElementById("grafico-sensibilidad").innerHTML = body.chart_svg;
}

for (const p of PARAMS) {
  document.getElementById(p).addEventListener("input", () => sync(p, "field"));
  document.getElementById(p + "_slider").addEventListener("input", () => sync(p, "slider"));
}
document.getElementById("btn-calcular").addEventListener("click", async () => {
  await show(await post("/api/calculate", form()));
  await sensitivity();
});
document.getElementById("btn-tema").addEventListener("click", async () => {
  await show(await post("/api/theme", form()));
  await sensitivity();
});
document.getElementById("btn-exportar").addEventListener("click", () => {
  window.location.href = "/api/export";
});
document.getElementById("rango-lo").addEventListener("change", sensitivity);
document.getElementById("rango-hi").addEventListener("change", sensitivity);
</script>"#;

pub async fn index(Extension(ctx): Extension<DashboardContext>) -> Html<String> {
    let theme = ctx.lock().await.session().theme();
    Html(render_index(theme))
}

fn render_index(theme: Theme) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>BayesPro Analytics</title>\n");
    html.push_str(STYLESHEETS);
    html.push_str("\n</head>\n");
    html.push_str(&format!(
        "<body class=\"p-4 theme-{}\">\n<div class=\"container-fluid\">\n",
        theme.as_str()
    ));
    html.push_str("<h1 class=\"text-center my-4\">BayesPro Analytics</h1>\n");
    html.push_str("<div class=\"row\">\n");

    // Controls
    html.push_str("<div class=\"col-md-4 mb-4\"><div class=\"card shadow\"><div class=\"card-body\">\n");
    html.push_str(&text_input("label_a", "Nombre del Evento A", "Ej: Enfermedad", DEFAULT_LABEL_A));
    html.push_str(&text_input("label_b", "Nombre del Evento B", "Ej: Prueba Positiva", DEFAULT_LABEL_B));
    html.push_str("<hr>\n");
    for parameter in Parameter::ALL {
        html.push_str(&linked_control(parameter));
    }
    html.push_str(
        "<button id=\"btn-calcular\" class=\"btn btn-primary mt-4 w-100\">Calcular</button>\n",
    );
    html.push_str("</div></div></div>\n");

    // Results
    html.push_str("<div class=\"col-md-8\">\n");
    html.push_str("<h4>Análisis Bayesiano</h4>\n");
    html.push_str("<div id=\"grafico-bayes\" class=\"border rounded shadow\"></div>\n");
    html.push_str("<div id=\"resultado-detallado\" class=\"mt-3 p-3 rounded\"></div>\n");
    html.push_str("<h4 class=\"mt-4\">Análisis de Sensibilidad</h4>\n");
    html.push_str(
        "<label class=\"fw-bold\">Rango de P(A):</label> \
         <input id=\"rango-lo\" type=\"number\" min=\"0\" max=\"1\" step=\"0.05\" value=\"0\"> \
         <input id=\"rango-hi\" type=\"number\" min=\"0\" max=\"1\" step=\"0.05\" value=\"1\">\n",
    );
    html.push_str("<div id=\"grafico-sensibilidad\"></div>\n");
    html.push_str("<div class=\"d-flex justify-content-end\">\n");
    html.push_str(
        "<button id=\"btn-exportar\" class=\"btn btn-danger mt-3 me-2\"><i class=\"fas fa-file-pdf me-2\"></i>Exportar Reporte</button>\n",
    );
    html.push_str(&format!(
        "<button id=\"btn-tema\" class=\"btn btn-secondary mt-3\"><i class=\"fas {} me-2\"></i>{}</button>\n",
        theme.toggle_icon(),
        theme.toggle_caption()
    ));
    html.push_str("</div>\n</div>\n</div>\n");

    html.push_str(
        "<div id=\"toast\" class=\"alert alert-success\"><strong>BayesPro</strong> Cálculos actualizados correctamente</div>\n",
    );
    html.push_str("</div>\n");
    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

fn text_input(id: &str, caption: &str, placeholder: &str, value: &str) -> String {
    format!(
        "<label class=\"fw-bold mt-3\" for=\"{id}\">{}</label>\n\
         <input id=\"{id}\" class=\"form-control\" placeholder=\"{}\" value=\"{}\">\n",
        encode_text(caption),
        encode_double_quoted_attribute(placeholder),
        encode_double_quoted_attribute(value),
    )
}

/// Number field + slider for one parameter; both share the same bounds.
fn linked_control(parameter: Parameter) -> String {
    let id = parameter.id();
    let value = parameter.default_value();
    let (min, max, step) = (Parameter::MIN, Parameter::MAX, Parameter::STEP);
    format!(
        "<label class=\"fw-bold mt-3\" for=\"{id}\">{caption}</label>\n\
         <input id=\"{id}\" class=\"form-control\" type=\"number\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\">\n\
         <input id=\"{id}_slider\" class=\"form-range\" type=\"range\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\">\n",
        caption = encode_text(parameter.caption()),
    )
}
