//! Server-rendered pages for the booking grid and the admin panel.

mod admin;
mod booking;

pub use admin::{admin_dashboard_page, admin_login_page};
pub use booking::booking_page;

use crate::model::page::{Notice, NoticeKind};

const STYLE: &str = r#"<style>
body{font-family:sans-serif;max-width:56rem;margin:0 auto;padding:2rem 1rem;background:#f1f5f9;color:#1e293b}
.grid{display:grid;grid-template-columns:repeat(6,1fr);gap:.75rem;margin-bottom:1.5rem}
.box{aspect-ratio:1;border:2px solid #cbd5e1;border-radius:.5rem;background:#fff;display:flex;flex-direction:column;align-items:center;justify-content:center;font-size:1.5rem;font-weight:bold}
.box.reserved{background:#94a3b8;border-color:#64748b;color:#fff}
.box small{font-size:.7rem;font-weight:normal}
.notice{padding:1rem;border-radius:.5rem;margin-bottom:1.5rem}
.notice.error{background:#fef2f2;color:#991b1b}
.notice.success{background:#f0fdf4;color:#166534}
</style>"#;

fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{STYLE}\n{head_extra}\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        None => String::new(),
        Some(Notice { kind, text }) => {
            let class = match kind {
                NoticeKind::Success => "success",
                NoticeKind::Error => "error",
            };
            format!(
                "<div class=\"notice {class}\" role=\"status\"><p>{}</p></div>",
                escape(text)
            )
        }
    }
}

// 利用者入力（氏名・電話番号）をそのまま埋め込まない
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
