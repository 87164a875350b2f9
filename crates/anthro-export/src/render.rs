use anthro_core::models::site::{CircumferenceSite, SkinfoldSite};
use anthro_snapshot::model::Snapshot;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::info;

use crate::error::ExportError;
use crate::filters;

/// Built-in Markdown report layout.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// One labelled row of a measurement table.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: Option<f64>,
}

/// Template context: the snapshot itself plus display labels the template
/// should not have to know.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext<'a> {
    pub snapshot: &'a Snapshot,
    pub gender_label: Option<&'static str>,
    pub bmi_category_label: Option<&'static str>,
    pub whr_risk_label: Option<&'static str>,
    pub circumferences: Vec<Row>,
    pub skinfolds: Vec<Row>,
}

impl<'a> ReportContext<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        let comp = &snapshot.anthro.body_comp;
        Self {
            snapshot,
            gender_label: snapshot.patient.gender.map(|g| g.label()),
            bmi_category_label: comp.bmi_category.map(|c| c.label()),
            whr_risk_label: comp.whr_risk.map(|r| r.label()),
            circumferences: CircumferenceSite::ALL
                .iter()
                .map(|site| Row {
                    label: site.label(),
                    value: snapshot.anthro.circumferences_cm.get(*site),
                })
                .collect(),
            skinfolds: SkinfoldSite::ALL
                .iter()
                .map(|site| Row {
                    label: site.label(),
                    value: snapshot.anthro.skinfolds_mm.get(*site),
                })
                .collect(),
        }
    }
}

/// Render a Tera template with a snapshot.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// [`ReportContext`] fields become the template context variables, and the
/// `dash` and `metric` filters are available.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    snapshot: &Snapshot,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("dash", filters::dash);
    tera.register_filter("metric", filters::metric);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::new(snapshot))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    info!(template_name, len = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render with [`DEFAULT_TEMPLATE`].
pub fn render_default_report(snapshot: &Snapshot) -> Result<String, ExportError> {
    render_report("report.md", DEFAULT_TEMPLATE, snapshot)
}
