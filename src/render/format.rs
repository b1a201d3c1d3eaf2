use crate::content::{Guide, ProTip, Step};

/// Troubleshooting stays fixed prose rather than guide content; the bodies
/// carry trusted inline markup and are emitted verbatim.
const TROUBLESHOOTING: &[(&str, &str)] = &[
    (
        "Tile missing in launchpad",
        "Verify the user inherits the catalog and group via role assignment and run transaction \
         <code>/UI2/INVALIDATE_GLOBAL_CACHES</code> if caches are stale.",
    ),
    (
        "Authorization error on launch",
        "Capture SU53 immediately after the failure or run STAUTHTRACE to identify missing \
         objects related to the underlying tcode.",
    ),
    (
        "Wrong backend system",
        "Confirm the system alias in the target mapping routes to the correct RFC destination \
         and that the logical system is part of the defined trusted RFC list.",
    ),
    (
        "Tile icon or text changes",
        "Adjust tile display properties directly in FLPD or maintain them centrally in the \
         <code>/UI2/FLP_CONF</code> customizing table, then clear client cache.",
    ),
];

const STYLESHEET: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; }
main { max-width: 64rem; margin: 0 auto; padding: 3rem 1.5rem; }
header, section, footer { margin-bottom: 3rem; }
.kicker { text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.8rem; color: #6ee7b7; }
.panel, .step, .card { border: 1px solid #334155; border-radius: 0.75rem; padding: 1.25rem; }
.panels, .cards { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.step { margin-bottom: 2rem; }
.step-label { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; color: #6ee7b7; }
.actions { list-style: none; padding: 0; }
.actions li { border: 1px solid #334155; border-radius: 0.5rem; padding: 0.75rem; margin-bottom: 0.75rem; }
.badge { display: inline-block; min-width: 1.5rem; text-align: center; border-radius: 9999px; background: #164e63; color: #a5f3fc; margin-right: 0.5rem; }
figure { margin: 1rem 0 0; }
figure img { max-width: 100%; border: 1px solid #334155; border-radius: 0.5rem; }
code { background: #1e293b; padding: 0.1rem 0.4rem; border-radius: 0.3rem; font-size: 0.85em; }
footer { background: rgba(16, 185, 129, 0.15); border-radius: 0.75rem; padding: 1.5rem; }
";

pub(super) fn append_document_head(out: &mut String, title: &str) {
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    out.push_str(&format!("<style>\n{STYLESHEET}</style>\n"));
    out.push_str("</head>\n<body>\n<main>\n");
}

pub(super) fn append_header(out: &mut String, guide: &Guide) {
    out.push_str("<header>\n");
    out.push_str(&format!(
        "<p class=\"kicker\">{}</p>\n",
        escape_text(&guide.kicker)
    ));
    out.push_str(&format!("<h1>{}</h1>\n", escape_text(&guide.title)));
    out.push_str(&format!(
        "<p class=\"intro\">{}</p>\n",
        escape_text(&guide.intro)
    ));
    out.push_str("<div class=\"panels\">\n");
    append_list_panel(out, "What you need", "checklist", &guide.prerequisites);
    append_list_panel(out, "Preparation checklist", "prep", &guide.preparation);
    out.push_str("</div>\n</header>\n");
}

fn append_list_panel(out: &mut String, heading: &str, class: &str, entries: &[String]) {
    out.push_str("<section class=\"panel\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape_text(heading)));
    out.push_str(&format!("<ul class=\"{class}\">\n"));
    for entry in entries {
        out.push_str(&format!("<li>{}</li>\n", escape_text(entry)));
    }
    out.push_str("</ul>\n</section>\n");
}

pub(super) fn append_step_section(out: &mut String, number: usize, step: &Step) {
    out.push_str(&format!(
        "<article class=\"step\" id=\"{}\">\n",
        escape_attr(&step.id)
    ));
    out.push_str(&format!("<p class=\"step-label\">Step {number}</p>\n"));
    out.push_str(&format!("<h2>{}</h2>\n", escape_text(&step.title)));
    out.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        escape_text(&step.summary)
    ));
    out.push_str("<ol class=\"actions\">\n");
    for action in &step.actions {
        out.push_str(&format!(
            "<li><span class=\"badge\">{number}</span>{}</li>\n",
            escape_text(action)
        ));
    }
    out.push_str("</ol>\n");
    out.push_str("<figure>\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"Screenshot for {}\" loading=\"lazy\">\n",
        escape_attr(&step.screenshot),
        escape_attr(&step.title)
    ));
    out.push_str("</figure>\n</article>\n");
}

pub(super) fn append_tips_section(out: &mut String, tips: &[ProTip]) {
    out.push_str("<section class=\"tips\">\n");
    out.push_str("<h2>Pro tips before transport and go-live</h2>\n");
    out.push_str("<div class=\"cards\">\n");
    for tip in tips {
        out.push_str("<div class=\"card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_text(&tip.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_text(&tip.detail)));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
}

pub(super) fn append_troubleshooting_section(out: &mut String) -> usize {
    out.push_str("<section class=\"troubleshooting\">\n");
    out.push_str("<h2>Troubleshooting cheatsheet</h2>\n");
    for (label, body) in TROUBLESHOOTING {
        out.push_str(&format!(
            "<p><strong>{}:</strong> {body}</p>\n",
            escape_text(label)
        ));
    }
    out.push_str("</section>\n");
    TROUBLESHOOTING.len()
}

pub(super) fn append_footer(out: &mut String, footer: &str) {
    out.push_str("<footer>\n");
    out.push_str(&format!("<p>{}</p>\n", escape_text(footer)));
    out.push_str("</footer>\n");
}

pub(super) fn append_document_close(out: &mut String) {
    out.push_str("</main>\n</body>\n</html>\n");
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
