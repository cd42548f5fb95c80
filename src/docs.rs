//! Documentation page content.
//!
//! Every tool's documentation page is the same fixed sequence of sections,
//! with the tool's own name, summary, and detail woven into the prose. The
//! section data is presentation-free; the TUI docs page and the `docs`
//! subcommand decide how to draw it.

use crate::catalog::ToolRecord;

/// A numbered how-it-works step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

/// Body of one documentation section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Paragraph(String),
    Bullets(&'static [&'static str]),
    Steps(&'static [Step]),
}

/// One section of the documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSection {
    pub heading: &'static str,
    pub body: SectionBody,
}

const KEY_FEATURES: [&str; 6] = [
    "Automated file detection and compatibility checking",
    "Secure backup creation before any modifications",
    "Checksum validation and automatic correction",
    "Detailed audit logs for compliance tracking",
    "Batch processing support for workshop efficiency",
    "Export verified outputs with comprehensive reports",
];

const HOW_IT_WORKS: [Step; 4] = [
    Step {
        title: "Upload File",
        body: "Import your ECU or TCU file. The system automatically detects the file type and \
               validates compatibility.",
    },
    Step {
        title: "Configure Settings",
        body: "Select your desired modifications or parameters. The interface guides you through \
               each option with clear descriptions.",
    },
    Step {
        title: "Process & Verify",
        body: "Apply changes with automatic checksum correction. Review detailed logs and \
               validation results.",
    },
    Step {
        title: "Download Output",
        body: "Export the modified file along with backup and compliance reports ready for \
               programming.",
    },
];

const SUPPORTED_PLATFORMS: &str =
    "This tool is compatible with a wide range of ECU and TCU modules. Refer to the \
     compatibility matrix in the ADZDiag platform for specific model numbers and firmware \
     versions.";

const BEST_PRACTICES: [&str; 5] = [
    "Always create a backup before making modifications",
    "Verify file checksums after processing",
    "Review compatibility warnings carefully",
    "Maintain audit logs for compliance purposes",
    "Test on bench setups before vehicle installation",
];

/// The documentation sections for a tool, in page order.
pub fn sections(tool: &ToolRecord) -> Vec<DocSection> {
    vec![
        DocSection {
            heading: "Overview",
            body: SectionBody::Paragraph(format!(
                "The {} tool provides comprehensive capabilities for {} This feature is designed \
                 for automotive workshops and technicians who need reliable, fast, and secure \
                 ECU modifications.",
                tool.name,
                tool.summary.to_lowercase()
            )),
        },
        DocSection {
            heading: "Key Features",
            body: SectionBody::Bullets(&KEY_FEATURES),
        },
        DocSection {
            heading: "How It Works",
            body: SectionBody::Steps(&HOW_IT_WORKS),
        },
        DocSection {
            heading: "Supported Platforms",
            body: SectionBody::Paragraph(SUPPORTED_PLATFORMS.to_string()),
        },
        DocSection {
            heading: "Best Practices",
            body: SectionBody::Bullets(&BEST_PRACTICES),
        },
        DocSection {
            heading: "Get Started",
            body: SectionBody::Paragraph(format!(
                "Ready to use {}? Access the tool directly in the ADZDiag platform.",
                tool.name
            )),
        },
    ]
}
