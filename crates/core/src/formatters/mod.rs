#[cfg(feature = "json")]
pub mod json;
pub mod xml;

#[cfg(feature = "json")]
pub use json::{JsonConfig, convert_to_json};
pub use xml::{XmlConfig, convert_to_xml, write_xml};

use crate::Result;
use crate::model::Bible;

/// Output format for the assembled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Canonical `<bible>/<b>/<c>/<v>` XML.
    #[default]
    Xml,
    /// Same hierarchy as JSON.
    #[cfg(feature = "json")]
    Json,
}

/// Renders `bible` in `format`. `indent` of 0 selects compact output.
pub fn render(bible: &Bible, format: OutputFormat, indent: usize) -> Result<String> {
    match format {
        OutputFormat::Xml => convert_to_xml(bible, &XmlConfig { indent, ..Default::default() }),
        #[cfg(feature = "json")]
        OutputFormat::Json => {
            let mut json = convert_to_json(bible, &JsonConfig { pretty: indent > 0 })?;
            json.push('\n');
            Ok(json)
        }
    }
}
