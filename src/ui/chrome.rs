//! Chrome strip: tab bar, toolbar, bookmarks bar and status line.
//!
//! The page is static; Rust pushes state into it with `render(...)` after
//! every change and the page answers with JSON commands over IPC.

use serde::Serialize;

use crate::app::App;
use crate::types::bookmark::Bookmark;
use crate::types::events::StatusMessage;
use crate::types::tab::{ChromeState, TabSnapshot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChromeModel<'a> {
    tabs: Vec<TabSnapshot>,
    chrome: ChromeState,
    bookmarks: &'a [Bookmark],
    downloads: Vec<String>,
    status: Option<&'a StatusMessage>,
    dark_mode: bool,
    ad_blocker: bool,
    cursor_lock: bool,
    home_page: &'a str,
    download_dir: String,
}

/// Script that redraws the chrome from the current app state.
pub fn render_script(app: &App) -> String {
    let prefs = app.preferences();
    let model = ChromeModel {
        tabs: app.tabs().snapshots(),
        chrome: app.tabs().chrome(),
        bookmarks: app.bookmarks(),
        downloads: app.downloads().iter().map(|d| d.label()).collect(),
        status: app.status_message(),
        dark_mode: prefs.dark_mode,
        ad_blocker: prefs.ad_blocker,
        cursor_lock: prefs.cursor_lock,
        home_page: &prefs.home_page,
        download_dir: prefs.download_dir.to_string_lossy().into_owned(),
    };
    match serde_json::to_string(&model) {
        Ok(json) => format!("window.render && window.render({})", json),
        Err(e) => {
            log::warn!("Failed to serialize chrome state: {}", e);
            String::new()
        }
    }
}

pub const CHROME_HTML: &str = r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><style>
:root{--bg:#f3f3f3;--fg:#1f1f1f;--muted:#6b6b6b;--tab:#e2e2e2;--active:#ffffff;--accent:#2f6fdb}
.dark{--bg:#202124;--fg:#e8eaed;--muted:#9aa0a6;--tab:#2d2e31;--active:#35363a;--accent:#8ab4f8}
*{margin:0;padding:0;box-sizing:border-box}
body{font:13px system-ui,sans-serif;background:var(--bg);color:var(--fg);user-select:none;overflow:hidden}
#tabs{display:flex;height:32px;padding:4px 4px 0}
.tab{display:flex;align-items:center;gap:6px;max-width:200px;padding:0 10px;background:var(--tab);border-radius:6px 6px 0 0;margin-right:2px;cursor:default;white-space:nowrap}
.tab.active{background:var(--active)}
.tab .x{color:var(--muted);cursor:pointer}
#bar{display:flex;align-items:center;gap:4px;height:36px;padding:0 6px;background:var(--active)}
#bar button{background:none;border:0;color:var(--fg);font-size:15px;width:28px;height:28px;border-radius:4px}
#bar button:disabled{color:var(--muted)}
#addr{flex:1;height:26px;padding:0 10px;border-radius:13px;border:1px solid var(--tab);background:var(--bg);color:var(--fg)}
#progress{height:2px;background:var(--accent);width:0}
#strip{display:flex;gap:8px;height:26px;line-height:26px;padding:0 8px;color:var(--muted);white-space:nowrap;overflow:hidden}
#bookmarks{flex:1;overflow:hidden}
.bm{margin-right:10px;color:var(--fg);cursor:pointer}
#downloads{cursor:pointer}
</style></head><body>
<div id="tabs"></div>
<div id="bar">
<button id="back" title="Back">&#8592;</button>
<button id="fwd" title="Forward">&#8594;</button>
<button id="reload" title="Reload">&#8635;</button>
<button id="home" title="Home">&#8962;</button>
<input id="addr" spellcheck="false">
<button id="star" title="Bookmark this page">&#9734;</button>
<button id="shield" title="Ad blocker">&#9960;</button>
<button id="newtab" title="New tab">+</button>
<button id="prefs" title="Settings">&#9881;</button>
</div>
<div id="progress"></div>
<div id="strip"><span id="bookmarks"></span><span id="downloads" title="Click to clear finished downloads"></span><span id="status"></span></div>
<script>
const send = (cmd, extra) => window.ipc.postMessage(JSON.stringify(Object.assign({cmd}, extra || {})));
const $ = id => document.getElementById(id);
let state = null;
let statusTimer = null;
$('back').onclick = () => send('back');
$('fwd').onclick = () => send('forward');
$('reload').onclick = () => send('reload');
$('home').onclick = () => send('home');
$('star').onclick = () => send('bookmark');
$('newtab').onclick = () => send('new_tab');
$('shield').onclick = () => state && send('set_ad_blocker', {enabled: !state.adBlocker});
$('prefs').onclick = () => {
  if (!state) return;
  const homePage = prompt('Home page', state.homePage);
  if (homePage === null) return;
  const downloadDir = prompt('Download folder', state.downloadDir);
  if (downloadDir === null) return;
  send('apply_settings', {
    homePage, downloadDir,
    darkMode: confirm('Use dark mode?'),
    cursorLock: confirm('Let pages lock the cursor and request other permissions?'),
    adBlocker: state.adBlocker,
  });
};
$('downloads').onclick = () => send('clear_downloads');
$('addr').addEventListener('keydown', e => { if (e.key === 'Enter') send('navigate', {url: e.target.value}); });
document.addEventListener('keydown', e => {
  if (e.ctrlKey && e.key === 't') { e.preventDefault(); send('new_tab'); }
  if (e.ctrlKey && e.key === 'w' && state) { e.preventDefault(); send('close_tab', {id: state.tabs.find(t => t.active).id}); }
  if (e.key === 'F5') { e.preventDefault(); send('reload'); }
});
window.render = s => {
  state = s;
  document.documentElement.className = s.darkMode ? 'dark' : '';
  const tabs = $('tabs');
  tabs.textContent = '';
  for (const t of s.tabs) {
    const el = document.createElement('div');
    el.className = 'tab' + (t.active ? ' active' : '');
    el.title = t.url;
    const label = document.createElement('span');
    label.textContent = t.title;
    const x = document.createElement('span');
    x.className = 'x';
    x.textContent = '×';
    x.onclick = ev => { ev.stopPropagation(); send('close_tab', {id: t.id}); };
    el.onclick = () => send('activate', {id: t.id});
    el.append(label, x);
    tabs.append(el);
  }
  const bms = $('bookmarks');
  bms.textContent = '';
  s.bookmarks.forEach((b, index) => {
    const el = document.createElement('span');
    el.className = 'bm';
    el.textContent = b.title;
    el.title = b.title + ' - ' + b.url + ' (right-click to remove)';
    el.onclick = () => send('open_bookmark', {index});
    el.oncontextmenu = ev => { ev.preventDefault(); send('remove_bookmark', {index}); };
    bms.append(el);
  });
  $('downloads').textContent = s.downloads.length ? s.downloads[s.downloads.length - 1] : '';
  if (document.activeElement !== $('addr')) $('addr').value = s.chrome.address_bar;
  $('back').disabled = !s.chrome.navigation.can_go_back;
  $('fwd').disabled = !s.chrome.navigation.can_go_forward;
  $('shield').style.opacity = s.adBlocker ? '1' : '0.4';
  $('progress').style.width = s.chrome.progress == null ? '0' : s.chrome.progress + '%';
  if (s.status) {
    $('status').textContent = s.status.text;
    clearTimeout(statusTimer);
    statusTimer = setTimeout(() => { $('status').textContent = ''; }, s.status.timeout_ms);
  }
};
send('ready');
</script>
</body></html>"#;
