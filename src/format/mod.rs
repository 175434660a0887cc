//! Output formats for the combined license document.
//!
//! - [`html`]: bolded `name by owner` header followed by one `<h1>` section per license.
//! - [`text`]: bracketed `"name": """license""",` block.
//!
//! Both build the document by appending in report order.

pub mod html;
pub mod text;

use crate::models::{LibraryReport, OutputFormat};

pub use html::HtmlFormatter;
pub use text::StructuredTextFormatter;

pub trait LicenseFormatter {
    fn render(&self, reports: &[LibraryReport]) -> String;
}

/// Formatter for the configured output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn LicenseFormatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlFormatter),
        OutputFormat::Text => Box::new(StructuredTextFormatter),
    }
}
