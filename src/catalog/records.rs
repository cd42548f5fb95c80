//! The hardcoded tool records, in platform display order.

use super::{Category, ToolRecord};

/// Every tool advertised on the platform. Order matters: filtered views
/// preserve this ordering.
pub const TOOLS: [ToolRecord; 16] = [
    ToolRecord {
        id: "dtc-editor",
        name: "DTC Editor",
        category: Category::Diagnostics,
        summary: "Disable or delete Diagnostic Trouble Codes (DTCs) from ECU files.",
        detail: "Identify and manage DTC entries with guided workflows, safe backups, and \
                 checksum-aware saves for supported ECUs.",
    },
    ToolRecord {
        id: "ford-radio-codes",
        name: "Ford Radio Codes",
        category: Category::Security,
        summary: "Generate radio unlock codes using authorized data inputs.",
        detail: "Supports common Ford/Visteon units with VIN/serial validation, batch tools, and \
                 exportable reports.",
    },
    ToolRecord {
        id: "program-keys",
        name: "Program Keys",
        category: Category::Security,
        summary: "Key programming utilities for supported vehicles and modules.",
        detail: "Step-by-step procedures with compatibility checks, guided pairing flows, and \
                 audit logging for authorized service use.",
    },
    ToolRecord {
        id: "vag-dsg-immo-off",
        name: "VAG DSG Immo-Off",
        category: Category::Immobilizer,
        summary: "Disable immobilizer on selected DSG/TCU controllers.",
        detail: "Compatible with DL382, DQ200/250/381/400/500 and related DSG TCUs with automated \
                 file patching.",
    },
    ToolRecord {
        id: "vag-ecu-immobilizer",
        name: "VAG ECU Immobilizer",
        category: Category::Immobilizer,
        summary: "Edit immobilizer parameters for supported VAG ECUs.",
        detail: "Coverage includes EDC17, MED17, ME7, ME9, PCR2.x, SID/Siemens and SIMOS families.",
    },
    ToolRecord {
        id: "vag-tcu-immobilizer",
        name: "VAG TCU Immobilizer",
        category: Category::Immobilizer,
        summary: "Edit immobilizer parameters for supported VAG TCUs.",
        detail: "Handles DL382, DQ200/250/381/400/500 and VL300/VL381 with guided module selection.",
    },
    ToolRecord {
        id: "vag-bcm2-immobilizer",
        name: "VAG BCM2 Immobilizer",
        category: Category::Immobilizer,
        summary: "Immobilizer data editing for BCM2 body control units.",
        detail: "Supports Audi A4/A5/Q5/A6/A7/A8 and VW Touareg BCM2 units with secure backups.",
    },
    ToolRecord {
        id: "porsche-ecu-immobilizer",
        name: "Porsche ECU Immobilizer",
        category: Category::Immobilizer,
        summary: "Edit immobilizer parameters for supported Porsche ECUs.",
        detail: "Coverage includes EDC17, ME7, MED17, SDI4/SDI6/SDI7/SDI8/SDI9 and SIMOS18 series \
                 ECUs.",
    },
    ToolRecord {
        id: "vag-sgo-to-bin",
        name: "VAG SGO to BIN Conversion",
        category: Category::FileConversion,
        summary: "Convert SGO factory firmware files to binary format.",
        detail: "Fast, checksum-aware conversion with project tracking and exportable metadata.",
    },
    ToolRecord {
        id: "vag-frf-odx-sox-to-bin",
        name: "VAG FRF/ODX/SOX to BIN",
        category: Category::FileConversion,
        summary: "Convert FRF, ODX and SOX firmware files to binary format.",
        detail: "Batch conversion with version detection and compatibility hints for supported \
                 ECUs.",
    },
    ToolRecord {
        id: "vag-bin-to-sgo",
        name: "VAG BIN to SGO Conversion",
        category: Category::FileConversion,
        summary: "Convert binary files to SGO factory firmware format.",
        detail: "Includes header generation, integrity checks, and packaging validation.",
    },
    ToolRecord {
        id: "vag-bin-to-odx-frf",
        name: "VAG BIN to ODX/FRF",
        category: Category::FileConversion,
        summary: "Convert binary files to ODX/FRF factory firmware format.",
        detail: "Template-driven conversion with metadata controls and output verification.",
    },
    ToolRecord {
        id: "daimler-seed-key",
        name: "Daimler Seed-Key",
        category: Category::Security,
        summary: "Calculate seed-key pairs for authorized programming access.",
        detail: "Compatible with supported Daimler ECUs and includes secure audit trails.",
    },
    ToolRecord {
        id: "daimler-smr-f-to-bin",
        name: "Daimler SMR-F to BIN",
        category: Category::FileConversion,
        summary: "Convert SMR-F factory firmware files to binary format.",
        detail: "Maintains segment integrity and supports batch processing for workshops.",
    },
    ToolRecord {
        id: "checksum-correction",
        name: "Checksum Correction",
        category: Category::Utilities,
        summary: "Automatic checksum correction for supported modules.",
        detail: "Detects and fixes checksum regions with detailed reports and rollback options.",
    },
    ToolRecord {
        id: "vin-immo-repair",
        name: "VIN/Immo Data Repair",
        category: Category::Utilities,
        summary: "Repair VIN and immobilizer data in supported files.",
        detail: "Guided repair workflows with validation rules and compatibility warnings.",
    },
];
