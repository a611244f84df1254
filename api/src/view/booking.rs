use kernel::model::grid::GridBox;

use super::{escape, layout, notice_html};
use crate::model::page::{BookingForm, Notice};

// 選択数に応じて合計と送信ボタンの状態を更新し、送信中は二重送信を防ぐ
const SCRIPT: &str = r#"<script>
(function () {
  var form = document.getElementById('booking');
  var button = document.getElementById('submit');
  var count = document.getElementById('count');
  var total = document.getElementById('total');
  var price = Number(form.dataset.unitPrice);
  function refresh() {
    var n = form.querySelectorAll('input[name=box]:checked').length;
    count.textContent = n;
    total.textContent = n * price;
    button.disabled = n === 0;
  }
  form.addEventListener('change', refresh);
  form.addEventListener('submit', function () {
    button.disabled = true;
    button.textContent = 'Envoi en cours...';
  });
  refresh();
})();
</script>"#;

pub fn booking_page(
    boxes: &[GridBox],
    form: &BookingForm,
    notice: Option<&Notice>,
    unit_price: u32,
) -> String {
    let grid = boxes
        .iter()
        .map(|b| {
            if b.reserved {
                return format!(
                    "<div class=\"box reserved\">{}<small>RÉSERVÉE</small></div>",
                    b.number
                );
            }
            let checked = if form.selected.contains(&b.number) {
                " checked"
            } else {
                ""
            };
            format!(
                "<label class=\"box\"><input type=\"checkbox\" name=\"box\" value=\"{n}\"{checked}>{n}</label>",
                n = b.number
            )
        })
        .collect::<String>();

    let selected = form.selected.len();
    let body = format!(
        r#"<header>
<h1><a href="/">LOTRY</a></h1>
<p>{unit_price}€ la case</p>
<p>1 case gagnante par grille</p>
</header>
<form id="booking" method="post" action="/reserve" data-unit-price="{unit_price}">
<div class="grid">{grid}</div>
<h2>Réserver mes cases</h2>
{notice}
<label>Nom complet <input type="text" name="name" value="{name}" placeholder="Votre nom"></label>
<label>Téléphone <input type="tel" name="phone" value="{phone}" placeholder="06 12 34 56 78"></label>
<p>Cases sélectionnées: <strong id="count">{selected}</strong></p>
<p>Total à payer: <strong><span id="total">{total}</span> €</strong></p>
<button id="submit" type="submit">ENVOYER ET PAYER</button>
</form>
<footer><p>© 2025 LOTRY - Tous droits réservés</p></footer>
{SCRIPT}"#,
        notice = notice_html(notice),
        name = escape(&form.name),
        phone = escape(&form.phone),
        total = selected as u64 * u64::from(unit_price),
    );
    layout(&format!("LOTRY - {unit_price}€ la case"), "", &body)
}
