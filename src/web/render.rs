//! HTML страницы формы и результата

use std::fmt::Write;

use crate::types::{BudgetForm, BudgetInput};

pub const TITLE: &str = "Sales Prediction App";

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;display:flex;min-height:100vh}\
aside{width:16rem;background:#f0f2f6;padding:1.5rem;font-size:.9rem}\
main{flex:1;padding:2rem 3rem;max-width:56rem}\
.columns{display:flex;gap:1.5rem}.columns label{flex:1;display:flex;flex-direction:column}\
.success{background:#dff5e3;padding:.75rem;border-radius:.4rem}\
.error{background:#fde2e2;padding:.75rem;border-radius:.4rem}\
.warning{background:#fff4d6;padding:.75rem;border-radius:.4rem}\
.metric{font-size:2.5rem;font-weight:600}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.3rem .8rem;text-align:right}";

/// Значения полей формы в том виде, в каком их увидит пользователь
pub struct FormValues {
    pub youtube: String,
    pub tiktok: String,
    pub instagram: String,
}

impl From<&BudgetInput> for FormValues {
    fn from(input: &BudgetInput) -> Self {
        Self {
            youtube: format!("{:.2}", input.youtube),
            tiktok: format!("{:.2}", input.tiktok),
            instagram: format!("{:.2}", input.instagram),
        }
    }
}

impl From<&BudgetForm> for FormValues {
    fn from(form: &BudgetForm) -> Self {
        Self {
            youtube: form.youtube.clone(),
            tiktok: form.tiktok.clone(),
            instagram: form.instagram.clone(),
        }
    }
}

/// Баннер под заголовком
pub enum Notice<'a> {
    Success(&'a str),
    Error(&'a str),
    Warning(&'a str),
}

/// Главная страница: форма с тремя бюджетами
///
/// Если модель не загружена, показывается ошибка и кнопка отключена.
pub fn render_form_page(
    model_file: &str,
    model_error: Option<&str>,
    values: &FormValues,
    input_error: Option<&str>,
) -> String {
    let mut body = String::new();

    match model_error {
        Some(reason) => {
            push_notice(&mut body, Notice::Error(&format!("Error: {reason}")));
            push_notice(
                &mut body,
                Notice::Warning(&format!(
                    "Generate the model file '{model_file}' with the training script first, then refresh this page."
                )),
            );
        }
        None => push_notice(
            &mut body,
            Notice::Success(&format!("Model '{model_file}' loaded successfully!")),
        ),
    }

    if let Some(message) = input_error {
        push_notice(&mut body, Notice::Error(message));
    }

    push_form(&mut body, values, model_error.is_none());
    layout(model_file, &body)
}

/// Страница с результатом предсказания
pub fn render_result_page(model_file: &str, input: &BudgetInput, predicted_sales: f64) -> String {
    let mut body = String::new();
    push_notice(
        &mut body,
        Notice::Success(&format!("Model '{model_file}' loaded successfully!")),
    );
    push_form(&mut body, &FormValues::from(input), true);
    push_input_table(&mut body, input);
    push_notice(&mut body, Notice::Success("Predicted Sales:"));
    let _ = write!(
        body,
        "<div class=\"metric-box\"><div>Sales Units</div><div class=\"metric\" id=\"prediction\">{}</div></div>",
        format_number(predicted_sales)
    );
    layout(model_file, &body)
}

/// Предсказание упало: показываем ввод, ошибку и подсказку про колонки
pub fn render_prediction_error_page(model_file: &str, input: &BudgetInput, message: &str) -> String {
    let mut body = String::new();
    push_form(&mut body, &FormValues::from(input), true);
    push_input_table(&mut body, input);
    push_notice(
        &mut body,
        Notice::Error(&format!("An error occurred during prediction: {message}")),
    );
    push_notice(
        &mut body,
        Notice::Error(
            "Check that the column names (youtube, tiktok, instagram) match the ones the model was trained on.",
        ),
    );
    layout(model_file, &body)
}

fn layout(model_file: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
<aside><p>This app is built with axum to serve a pre-trained machine learning model.</p></aside>\n\
<main>\n<h1>{title} &#128200;</h1>\n<p>Using trained model (<code>{file}</code>)</p>\n{body}\n</main>\n</body>\n</html>\n",
        title = TITLE,
        file = escape_html(model_file),
    )
}

fn push_notice(out: &mut String, notice: Notice<'_>) {
    let (class, text) = match notice {
        Notice::Success(text) => ("success", text),
        Notice::Error(text) => ("error", text),
        Notice::Warning(text) => ("warning", text),
    };
    let _ = writeln!(out, "<p class=\"{class}\">{}</p>", escape_html(text));
}

fn push_form(out: &mut String, values: &FormValues, enabled: bool) {
    out.push_str("<h2>Enter the advertising budget:</h2>\n");
    out.push_str("<form method=\"post\" action=\"/predict\">\n<div class=\"columns\">\n");
    for (name, label, value) in [
        ("youtube", "YouTube", &values.youtube),
        ("tiktok", "TikTok", &values.tiktok),
        ("instagram", "Instagram", &values.instagram),
    ] {
        let _ = writeln!(
            out,
            "<label>{label}<input type=\"number\" name=\"{name}\" min=\"0\" step=\"1\" value=\"{}\" required></label>",
            escape_html(value)
        );
    }
    out.push_str("</div>\n<hr>\n");
    if enabled {
        out.push_str("<button type=\"submit\">Predict Sales</button>\n");
    } else {
        out.push_str("<button type=\"submit\" disabled>Predict Sales</button>\n");
    }
    out.push_str("</form>\n");
}

fn push_input_table(out: &mut String, input: &BudgetInput) {
    out.push_str("<p>Data used for prediction:</p>\n<table>\n<tr>");
    for (name, _) in input.channels() {
        let _ = write!(out, "<th>{name}</th>");
    }
    out.push_str("</tr>\n<tr>");
    for (_, value) in input.channels() {
        let _ = write!(out, "<td>{value:.2}</td>");
    }
    out.push_str("</tr>\n</table>\n");
}

/// `1234567.891` -> `1,234,567.89`
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 не показываем со знаком
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
