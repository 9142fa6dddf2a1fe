//! Server-rendered search page.

pub mod card;

use crate::config::SiteConfig;
use crate::models::{SearchState, SearchView, can_submit};
use crate::services::MAX_APPROX_DISTANCE;

pub use card::render_card;

pub const INVALID_ZIP_MESSAGE: &str = "Please enter a valid 5-digit ZIP code";

/// Availability badge for a course card. Display only; filtering never looks
/// at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Full,
    Limited,
    Available,
}

impl SeatStatus {
    pub fn from_seats(seats_available: u32) -> Self {
        match seats_available {
            0 => SeatStatus::Full,
            1..=3 => SeatStatus::Limited,
            _ => SeatStatus::Available,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeatStatus::Full => "Full",
            SeatStatus::Limited => "Limited",
            SeatStatus::Available => "Available",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SeatStatus::Full => "seats-full",
            SeatStatus::Limited => "seats-limited",
            SeatStatus::Available => "seats-available",
        }
    }
}

pub struct PageContext<'a> {
    pub state: &'a SearchState,
    pub site: &'a SiteConfig,
    /// Shown when the submitted ZIP was rejected before searching.
    pub input_notice: Option<&'a str>,
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;background:#eef2ff;margin:0}\
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}\
header,footer{text-align:center}\
.panel,.card,.notice{background:#fff;border-radius:.5rem;padding:1.5rem;margin-bottom:1.5rem}\
.notice.error,.notice.invalid{border:1px solid #fca5a5;color:#991b1b}\
.card-head{display:flex;justify-content:space-between}\
.college{color:#2563eb;font-weight:600;text-transform:uppercase;font-size:.85rem}\
.seats{border-radius:9999px;padding:.2rem .75rem;font-weight:600}\
.seats-full{background:#fee2e2;color:#991b1b}\
.seats-limited{background:#fef9c3;color:#854d0e}\
.seats-available{background:#dcfce7;color:#166534}\
.details{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
.waitlist{background:#fefce8;color:#854d0e;padding:.75rem}\
.register{display:block;text-align:center;background:#2563eb;color:#fff;padding:.75rem;border-radius:.5rem}\
.register.disabled{background:#d1d5db;color:#6b7280}\
.updated{font-size:.75rem;color:#9ca3af;text-align:center}";

// Mirrors the server-side ZIP handling while typing and locks the form once
// a search is submitted.
const SCRIPT: &str = "const f=document.getElementById('search-form'),\
i=document.getElementById('zipcode'),b=document.getElementById('search-button'),\
l=document.getElementById('loading');\
i.addEventListener('input',()=>{i.value=i.value.replace(/\\D/g,'').slice(0,5);b.disabled=i.value.length!==5;});\
f.addEventListener('submit',()=>{i.readOnly=true;b.textContent='Searching...';l.hidden=false;\
setTimeout(()=>{b.disabled=true;},0);});";

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let state = ctx.state;
    let region = escape(&ctx.site.region);
    let zip = escape(&state.zip_code);
    let searching = state.is_searching();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{region} Motorcycle Safety Class Finder</title>\n\
         <meta name=\"description\" content=\"Find MSF Basic RiderCourse classes near you in {region}\">\n"
    ));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n<main>\n", STYLE));

    html.push_str(&format!(
        "<header><h1>{region} Motorcycle Safety Class Finder</h1>\
         <p>Find MSF Basic RiderCourse classes near you</p></header>\n"
    ));

    html.push_str(&render_search_box(&zip, searching, can_submit(&state.zip_code)));

    if let Some(notice) = ctx.input_notice {
        html.push_str(&format!(
            "<div class=\"notice invalid\" role=\"alert\">{}</div>\n",
            escape(notice)
        ));
    }

    html.push_str(&format!(
        "<div id=\"loading\" class=\"panel\"{}><p>Searching for classes near you...</p></div>\n",
        if searching { "" } else { " hidden" }
    ));

    match state.view() {
        SearchView::Initial | SearchView::Loading => {}
        SearchView::Failed => {
            let message = state.error_message.as_deref().unwrap_or_default();
            html.push_str(&format!(
                "<div class=\"notice error\" role=\"alert\">{}</div>\n",
                escape(message)
            ));
            if !state.results.is_empty() {
                html.push_str(&render_results(state, ctx.site, &zip));
            }
        }
        SearchView::Empty => {
            html.push_str(&format!(
                "<div class=\"notice empty\"><p>No classes found within {} miles of ZIP code {}.</p>\
                 <p>Try a different ZIP code or check back later for new classes.</p></div>\n",
                MAX_APPROX_DISTANCE, zip
            ));
        }
        SearchView::Results => html.push_str(&render_results(state, ctx.site, &zip)),
    }

    html.push_str(
        "<footer><p>Data is updated every 6 hours. Always verify availability with the college.</p></footer>\n",
    );
    html.push_str("</main>\n");
    html.push_str(&format!("<script>{}</script>\n", SCRIPT));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_search_box(zip: &str, searching: bool, submittable: bool) -> String {
    format!(
        "<section class=\"panel\"><form id=\"search-form\" method=\"get\" action=\"/\">\
         <label for=\"zipcode\">Enter your ZIP code</label>\
         <input id=\"zipcode\" name=\"zip\" type=\"text\" inputmode=\"numeric\" pattern=\"[0-9]{{5}}\" \
         maxlength=\"5\" placeholder=\"28202\" autocomplete=\"postal-code\" value=\"{zip}\"{readonly}>\
         <button id=\"search-button\" type=\"submit\"{disabled}>{label}</button>\
         <p>We'll show you classes within {radius} miles of your location</p></form></section>\n",
        readonly = if searching { " readonly" } else { "" },
        disabled = if searching || !submittable { " disabled" } else { "" },
        label = if searching { "Searching..." } else { "Find Classes" },
        radius = MAX_APPROX_DISTANCE,
    )
}

fn render_results(state: &SearchState, site: &SiteConfig, zip: &str) -> String {
    let mut html = format!(
        "<section class=\"results\"><div class=\"panel summary\"><p>Found <strong>{}</strong> classes \
         near ZIP code <strong>{}</strong></p></div>\n",
        state.results.len(),
        zip
    );
    for nearby in &state.results {
        html.push_str(&render_card(nearby, site));
    }
    html.push_str("</section>\n");
    html
}
