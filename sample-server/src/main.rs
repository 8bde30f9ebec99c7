//! Tickform Sample Server
//!
//! Minimal round-trip demo: renders a checkbox list and an enum
//! checkbox group, then binds the posted form back into model values.

use axum::{
    extract::Form,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Router,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumProperty};
use tickform_core::escape::escape_html;
use tickform_core::{binding, display_name, CheckboxEnum, CheckboxListItem, NamingScope};
use tickform_html::{checkbox_list, enum_checkbox_list, Attributes};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Clone, Copy, Display, EnumIter, EnumProperty)]
enum Topping {
    #[strum(props(display = "Extra cheese"))]
    Cheese = 1,
    #[strum(props(description = "hot peppers"))]
    Jalapeno = 2,
    Olive = 4,
}

impl CheckboxEnum for Topping {
    fn underlying(&self) -> i64 {
        *self as i64
    }
}

fn seed_colors() -> Vec<CheckboxListItem> {
    vec![
        CheckboxListItem::checked("Red", "R"),
        CheckboxListItem::unchecked("Blue", "B"),
        CheckboxListItem::unchecked("Green", "G"),
    ]
}

async fn show_form() -> Result<Html<String>, (StatusCode, String)> {
    let scope = NamingScope::root();
    let colors = checkbox_list(
        &scope,
        "Colors",
        &seed_colors(),
        &Attributes::new().set("class", "field-group"),
    )
    .map_err(internal)?;
    let toppings = enum_checkbox_list(
        &scope,
        "Toppings",
        &[Topping::Cheese],
        &Attributes::new().set("class", "field-group"),
    )
    .map_err(internal)?;

    Ok(Html(format!(
        "<!DOCTYPE html>\n<html><body>\n<form action=\"/submit\" method=\"post\">\n\
         <h2>Colors</h2>\n{}\n<h2>Toppings</h2>\n{}\n\
         <button type=\"submit\">Save</button>\n</form>\n</body></html>",
        colors, toppings
    )))
}

async fn submit(Form(pairs): Form<Vec<(String, String)>>) -> Html<String> {
    let colors = binding::collect_items("Colors", &pairs);
    let toppings: Vec<Topping> = Topping::iter()
        .filter(|topping| {
            pairs
                .iter()
                .any(|(name, value)| name == "Toppings" && *value == topping.underlying().to_string())
        })
        .collect();

    let mut report = String::from("<h2>Posted colors</h2>\n<ul>\n");
    for item in &colors {
        report.push_str(&format!(
            "<li>{} ({}): {}</li>\n",
            escape_html(&item.text),
            escape_html(&item.value),
            if item.is_checked { "on" } else { "off" },
        ));
    }
    report.push_str("</ul>\n<h2>Posted toppings</h2>\n<ul>\n");
    for topping in &toppings {
        report.push_str(&format!("<li>{}</li>\n", escape_html(&display_name(topping))));
    }
    report.push_str("</ul>");
    Html(report)
}

fn internal(err: tickform_core::RenderError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let app = Router::new()
        .route("/", get(show_form))
        .route("/submit", post(submit))
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("sample form server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
