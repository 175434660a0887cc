use super::LicenseFormatter;
use crate::models::LibraryReport;

/// `["name": """license""","name2": """license2"""]`, licensed libraries only.
pub struct StructuredTextFormatter;

impl LicenseFormatter for StructuredTextFormatter {
    fn render(&self, reports: &[LibraryReport]) -> String {
        let mut out = String::from("[");
        for report in reports {
            if let Some(license) = report.outcome.license() {
                out.push_str(&format!("\"{}\": \"\"\"{}\"\"\",", report.name, license.body));
            }
        }
        if out.ends_with(',') {
            out.pop();
        }
        out.push(']');
        out
    }
}
