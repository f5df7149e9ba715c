use dashboard_core_api::{DashboardSnapshot, Direction};
use domain_model::AssetRegistry;

const UP_COLOR: &str = "#3ddc97";
const DOWN_COLOR: &str = "#e5484d";

/// Assembles the full dashboard page from one refresh snapshot. Layout is
/// plain server-rendered HTML; a reload reruns the whole refresh cycle.
pub fn page(snapshot: &DashboardSnapshot) -> String {
    let registry = AssetRegistry::tracked();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Crypto Price Tracker</title>
<style>
body {{ background: #141a1f; color: #e8eaed; font-family: sans-serif; margin: 0; }}
a {{ color: #e8eaed; }}
.navbar {{ background: #10151a; padding: 12px 24px; display: flex; align-items: center; gap: 16px; }}
.navbar .hint {{ color: #8a939b; font-size: 13px; }}
.refresh-btn {{ background: #2563eb; color: #fff; padding: 8px 14px; border-radius: 4px; text-decoration: none; }}
.layout {{ display: flex; gap: 16px; padding: 16px 24px; align-items: flex-start; }}
.sidebar {{ flex: 1; }}
.main {{ flex: 3; }}
.panel {{ background: #1b2228; border-radius: 6px; padding: 16px; margin-bottom: 16px; }}
.panel h3 {{ margin-top: 0; color: #cfd6dc; font-size: 15px; }}
.warning {{ background: #7f1d1d; padding: 12px 16px; border-radius: 6px; margin: 16px 24px 0; }}
.cards {{ display: flex; flex-wrap: wrap; gap: 12px; }}
.card {{ background: #2c3e50; border-radius: 6px; padding: 12px; min-width: 130px; }}
.card .name {{ font-weight: bold; }}
.card .price {{ font-size: 17px; margin: 6px 0; }}
.row {{ display: flex; justify-content: space-between; margin-bottom: 8px; }}
.glyph {{ margin-right: 8px; color: #9aa5ad; }}
select, input {{ background: #10151a; color: #e8eaed; border: 1px solid #333; border-radius: 4px; padding: 6px; }}
iframe {{ width: 100%; height: 540px; border: none; background: #1f2630; }}
</style>
</head>
<body>
<div class="navbar">
  <a class="refresh-btn" href="/">Refresh Prices</a>
  <span class="hint">Based on recent 24 hours</span>
</div>
{warning}
<div class="layout">
  <div class="sidebar">
    {exchange}
    {movers}
  </div>
  <div class="main">
    {cards}
    {chart}
    {list}
  </div>
</div>
</body>
</html>"#,
        warning = warning_banner(snapshot),
        exchange = exchange_widget(&registry),
        movers = movers_section(snapshot),
        cards = cards_section(snapshot),
        chart = chart_section(&registry),
        list = list_section(snapshot),
    )
}

fn warning_banner(snapshot: &DashboardSnapshot) -> String {
    match &snapshot.warning {
        Some(warning) => format!(r#"<div class="warning">{warning}</div>"#),
        None => String::new(),
    }
}

fn change_color(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => UP_COLOR,
        Direction::Down => DOWN_COLOR,
    }
}

fn cards_section(snapshot: &DashboardSnapshot) -> String {
    let cards: String = snapshot
        .view
        .cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="card"><div class="name"><span class="glyph">{}</span>{}</div><div class="price">{}</div><div style="color: {}">{}</div></div>"#,
                card.glyph,
                card.display_name,
                card.price,
                change_color(card.direction),
                card.change,
            )
        })
        .collect();
    format!(r#"<div class="panel"><div class="cards">{cards}</div></div>"#)
}

fn movers_section(snapshot: &DashboardSnapshot) -> String {
    let movers: String = snapshot
        .view
        .movers
        .iter()
        .map(|mover| {
            format!(
                r#"<div class="row"><span><span class="glyph">{}</span>{}</span><span style="color: {}">{}</span></div>"#,
                mover.glyph,
                mover.display_name,
                change_color(mover.direction),
                mover.change,
            )
        })
        .collect();
    format!(r#"<div class="panel"><h3>Top Movers</h3>{movers}</div>"#)
}

fn list_section(snapshot: &DashboardSnapshot) -> String {
    let items: String = snapshot
        .view
        .list_items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="row"><span><span class="glyph">{}</span><strong>{}</strong> — {}</span><span style="color: {}">{}</span></div>"#,
                item.glyph,
                item.display_name,
                item.price,
                change_color(item.direction),
                item.change,
            )
        })
        .collect();
    format!(r#"<div class="panel"><h3>Crypto Prices</h3>{items}</div>"#)
}

fn asset_options(registry: &AssetRegistry, selected: &str) -> String {
    registry
        .iter()
        .map(|info| {
            let selected = if info.id == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{}>{}</option>"#, info.id, selected, info.display_name)
        })
        .collect()
}

fn exchange_widget(registry: &AssetRegistry) -> String {
    format!(
        r#"<div class="panel"><h3>Exchange</h3>
<div>You will send</div>
<input id="send-amount" type="number" value="1" oninput="computeReceive()">
<select id="send-coin" onchange="computeReceive()">{send_options}</select>
<div style="margin-top: 8px">You will receive</div>
<input id="receive-amount" type="text" disabled>
<select id="receive-coin" onchange="computeReceive()">{receive_options}<option value="usd">USD</option><option value="eur">EUR</option></select>
<div id="convert-error" style="color: {DOWN_COLOR}; font-size: 13px; margin-top: 6px"></div>
<script>
async function computeReceive() {{
  const amount = document.getElementById('send-amount').value;
  const send = document.getElementById('send-coin').value;
  const receive = document.getElementById('receive-coin').value;
  const response = await fetch('/convert?amount=' + encodeURIComponent(amount) + '&send=' + send + '&receive=' + receive);
  const body = await response.json();
  document.getElementById('receive-amount').value = body.result || '';
  document.getElementById('convert-error').textContent = body.error || '';
}}
computeReceive();
</script>
</div>"#,
        send_options = asset_options(registry, "bitcoin"),
        receive_options = asset_options(registry, "ethereum"),
    )
}

fn chart_section(registry: &AssetRegistry) -> String {
    format!(
        r#"<div class="panel">
<select id="chart-coin" onchange="document.getElementById('chart-frame').src = '/chart/' + this.value">{options}</select>
<iframe id="chart-frame" src="/chart/bitcoin"></iframe>
</div>"#,
        options = asset_options(registry, "bitcoin"),
    )
}
