use super::LicenseFormatter;
use crate::models::LibraryReport;

const SPACER: &str = "<br><br><br><br>";

/// Header of `<b>・name</b> by owner<br>` lines, a spacer, then one section per license.
///
/// Every library gets a header line, licensed or not. Libraries without a
/// repository have no owner and are listed without the `by` part.
pub struct HtmlFormatter;

impl LicenseFormatter for HtmlFormatter {
    fn render(&self, reports: &[LibraryReport]) -> String {
        let mut header = String::new();
        let mut body = String::new();

        for report in reports {
            match report.outcome.repository() {
                Some(repo) => {
                    header.push_str(&format!("<b>・{}</b> by {}<br>", report.name, repo.owner))
                }
                None => header.push_str(&format!("<b>・{}</b><br>", report.name)),
            }

            if let Some(license) = report.outcome.license() {
                body.push_str(&format!("<h1>{}</h1><br>{}{}", report.name, license.body, SPACER));
            }
        }

        header + SPACER + &body
    }
}
