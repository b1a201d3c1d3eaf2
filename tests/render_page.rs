//! End-to-end rendering checks over the built-in guide.
//!
//! These assert the structural contract of the document: section counts match
//! the content collections, step numbering follows declaration order, and
//! every step exposes a distinct anchor.

use tileguide::content::{builtin_guide, Guide, ProTip, Step};
use tileguide::render::render_guide;
use tileguide::validate::validate_guide;

fn rendered_builtin() -> (Guide, String) {
    let guide = builtin_guide().expect("built-in guide must parse");
    let rendered = render_guide(&guide);
    (guide, rendered.html)
}

#[test]
fn builtin_guide_renders_expected_section_counts() {
    let guide = builtin_guide().expect("built-in guide must parse");
    let rendered = render_guide(&guide);
    assert_eq!(rendered.summary.step_sections, 8);
    assert_eq!(rendered.summary.prerequisite_entries, 4);
    assert_eq!(rendered.summary.preparation_entries, 4);
    assert_eq!(rendered.summary.tip_cards, 4);
    assert_eq!(rendered.summary.troubleshooting_entries, 4);
    assert_eq!(rendered.summary.action_items, 24);

    assert_eq!(html_count(&rendered.html, "<article class=\"step\""), 8);
    assert_eq!(html_count(&rendered.html, "<div class=\"card\">"), 4);
}

#[test]
fn step_numbers_run_one_through_eight_in_declaration_order() {
    let (_, html) = rendered_builtin();
    let mut last_pos = 0;
    for number in 1..=8 {
        let label = format!("<p class=\"step-label\">Step {number}</p>");
        let pos = html[last_pos..]
            .find(&label)
            .unwrap_or_else(|| panic!("missing label for step {number} after byte {last_pos}"));
        last_pos += pos + label.len();
    }
    assert_eq!(html_count(&html, "<p class=\"step-label\">Step "), 8);
}

#[test]
fn each_step_exposes_its_anchor_exactly_once() {
    let (guide, html) = rendered_builtin();
    for step in &guide.steps {
        let anchor = format!("id=\"{}\"", step.id);
        assert_eq!(html_count(&html, &anchor), 1, "anchor {} not unique", step.id);
    }
}

#[test]
fn rendered_action_items_match_declared_actions_in_order() {
    let (guide, html) = rendered_builtin();
    let mut cursor = 0;
    for (idx, step) in guide.steps.iter().enumerate() {
        let section_start = html[cursor..]
            .find(&format!("id=\"{}\"", step.id))
            .expect("step section present");
        cursor += section_start;
        let badge = format!("<span class=\"badge\">{}</span>", idx + 1);
        let section_end = html[cursor..]
            .find("</article>")
            .expect("step section closed");
        let section = &html[cursor..cursor + section_end];
        assert_eq!(
            section.matches(badge.as_str()).count(),
            step.actions.len(),
            "step {} action count mismatch",
            step.id
        );
        for action in &step.actions {
            assert!(
                section.contains(&escape_text(action)),
                "step {} missing action text",
                step.id
            );
        }
        cursor += section_end;
    }
}

#[test]
fn screenshots_bind_alt_text_to_step_titles() {
    let (guide, html) = rendered_builtin();
    for step in &guide.steps {
        let img = format!(
            "<img src=\"{}\" alt=\"Screenshot for {}\"",
            step.screenshot, step.title
        );
        assert!(html.contains(&img), "missing screenshot for {}", step.id);
    }
}

#[test]
fn header_lists_match_collection_lengths() {
    let (guide, html) = rendered_builtin();
    let checklist = list_items_in(&html, "<ul class=\"checklist\">");
    let prep = list_items_in(&html, "<ul class=\"prep\">");
    assert_eq!(checklist, guide.prerequisites.len());
    assert_eq!(prep, guide.preparation.len());
}

#[test]
fn each_tip_renders_one_title_and_one_detail() {
    let (guide, html) = rendered_builtin();
    for tip in &guide.tips {
        assert_eq!(html_count(&html, &format!("<h3>{}</h3>", tip.title)), 1);
    }
    assert_eq!(html_count(&html, "<h3>"), guide.tips.len());
}

#[test]
fn document_has_fixed_sections_and_footer() {
    let (guide, html) = rendered_builtin();
    assert!(html.contains("<h2>Troubleshooting cheatsheet</h2>"));
    assert!(html.contains("<h2>Pro tips before transport and go-live</h2>"));
    assert!(html.contains(&guide.footer));
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn numbering_ignores_anchor_identifiers() {
    let mut guide = builtin_guide().expect("built-in guide must parse");
    // Anchors deliberately out of order; display numbers must still follow
    // declaration order.
    guide.steps.truncate(2);
    guide.steps[0].id = "finale".to_string();
    guide.steps[1].id = "opening".to_string();
    assert_eq!(validate_guide(&guide), None);

    let html = render_guide(&guide).html;
    let finale = html.find("id=\"finale\"").expect("first anchor present");
    let opening = html.find("id=\"opening\"").expect("second anchor present");
    assert!(finale < opening);
    let step_one = html.find("Step 1</p>").expect("step 1 label");
    let step_two = html.find("Step 2</p>").expect("step 2 label");
    assert!(finale < step_one && step_one < opening);
    assert!(opening < step_two);
}

#[test]
fn markup_in_content_is_escaped() {
    let guide = Guide {
        kicker: "K".to_string(),
        title: "Tiles & <Intents>".to_string(),
        intro: "Intro".to_string(),
        prerequisites: vec!["a < b".to_string()],
        preparation: vec!["c > d".to_string()],
        steps: vec![Step {
            id: "only".to_string(),
            title: "Go \"live\"".to_string(),
            summary: "S".to_string(),
            actions: vec!["run & verify".to_string()],
            screenshot: "shots/only.png".to_string(),
        }],
        tips: vec![ProTip {
            title: "T".to_string(),
            detail: "D".to_string(),
        }],
        footer: "F".to_string(),
    };
    let html = render_guide(&guide).html;
    assert!(html.contains("<h1>Tiles &amp; &lt;Intents&gt;</h1>"));
    assert!(html.contains("<li>a &lt; b</li>"));
    assert!(html.contains("run &amp; verify"));
    assert!(html.contains("alt=\"Screenshot for Go &quot;live&quot;\""));
    assert!(!html.contains("<Intents>"));
}

fn html_count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn list_items_in(html: &str, open_tag: &str) -> usize {
    let start = html.find(open_tag).expect("list present");
    let rest = &html[start..];
    let end = rest.find("</ul>").expect("list closed");
    rest[..end].matches("<li>").count()
}
