use kernel::model::grid::{count_reserved, GridBox, GRID_SIZE};

use super::{escape, layout, notice_html};
use crate::model::page::Notice;

pub fn admin_login_page(notice: Option<&Notice>) -> String {
    let body = format!(
        r#"<h1>🔒 Administration</h1>
<p>Accès restreint</p>
{notice}
<form method="post" action="/admin">
<label>Mot de passe <input type="password" name="password" value="" placeholder="••••••••" autofocus></label>
<button type="submit">Se connecter</button>
</form>
<p><a href="/">← Retour au site</a></p>"#,
        notice = notice_html(notice),
    );
    layout("LOTRY - Administration", "", &body)
}

/// `return_home` adds a delayed redirect to the booking page, shown after a
/// successful reset.
pub fn admin_dashboard_page(
    boxes: &[GridBox],
    password: &str,
    notice: Option<&Notice>,
    return_home: bool,
) -> String {
    let grid = boxes
        .iter()
        .map(|b| match &b.holder {
            Some(holder) if b.reserved => format!(
                "<div class=\"box reserved\">{}<small>{}</small><small>{}</small></div>",
                b.number,
                escape(&holder.user_name),
                escape(&holder.user_phone)
            ),
            _ => format!("<div class=\"box\">{}</div>", b.number),
        })
        .collect::<String>();

    let body = format!(
        r#"<h1>⚙️ Panel Admin</h1>
<p>Gestion de la base de données</p>
<p><a href="/">← Retour au site</a></p>
{notice}
<h3>📊 État de la grille</h3>
<div class="grid">{grid}</div>
<p><strong>{reserved}</strong> case(s) réservée(s) sur <strong>{GRID_SIZE}</strong></p>
<h3>⚠️ Zone dangereuse</h3>
<p>Cette action supprimera toutes les réservations et réinitialisera toutes les cases.</p>
<form method="post" action="/admin/reset" onsubmit="return confirm('⚠️ Êtes-vous sûr de vouloir réinitialiser TOUTE la base de données ? Cette action est irréversible !')">
<input type="hidden" name="password" value="{password}">
<button type="submit">🗑️ Réinitialiser la base de données</button>
</form>"#,
        notice = notice_html(notice),
        reserved = count_reserved(boxes),
        password = escape(password),
    );
    let head = if return_home {
        r#"<meta http-equiv="refresh" content="2;url=/">"#
    } else {
        ""
    };
    layout("LOTRY - Panel Admin", head, &body)
}
