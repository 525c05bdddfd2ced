use dioxus::document::{EvalError, eval};

use crate::vm::SpyMeasurement;

pub const SCROLL_ROOT_ID: &str = "roadmap-scroll";

const MEASURE_SCRIPT_TEMPLATE: &str = r#"
    const root = document.getElementById("{root_id}");
    if (!root) { return { scroll_top: 0, sections: [] }; }
    const origin = root.getBoundingClientRect().top - root.scrollTop;
    const sections = Array.from(root.querySelectorAll("[data-spy-section]")).map((el) => ({
        id: el.id,
        top: el.getBoundingClientRect().top - origin,
    }));
    return { scroll_top: root.scrollTop, sections };
"#;

fn measure_script(root_id: &str) -> String {
    MEASURE_SCRIPT_TEMPLATE.replace("{root_id}", root_id)
}

fn scroll_to_script(root_id: &str, top: f64) -> String {
    format!(
        r#"
        const root = document.getElementById("{root_id}");
        if (root) {{ root.scrollTo({{ top: {top}, behavior: "smooth" }}); }}
        "#
    )
}

/// Scroll offset and the document-relative top of every tracked section.
pub async fn measure_sections() -> Result<SpyMeasurement, EvalError> {
    eval(&measure_script(SCROLL_ROOT_ID))
        .join::<SpyMeasurement>()
        .await
}

pub async fn scroll_to(top: f64) {
    let script = scroll_to_script(SCROLL_ROOT_ID, top);
    if let Err(err) = eval(&script).await {
        tracing::debug!(?err, top, "scroll request failed");
    }
}
