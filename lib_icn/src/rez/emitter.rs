use std::fmt::Write;

use log::{debug, info};
use thiserror::Error;

use super::pack::icon_payload;
use crate::icon::quantize::QuantizedIcon;
use crate::icon::role::IconRole;

/// Bytes rendered per `$"..."` line, matching DeRez output.
const BYTES_PER_LINE: usize = 16;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("{os_type} bitmap is {actual_width}x{actual_height}, resource expects {expected_width}x{expected_height}")]
    Emission {
        os_type: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("no bitmap supplied for {os_type}")]
    MissingRole { os_type: &'static str },

    #[error("more than one bitmap supplied for {os_type}")]
    DuplicateRole { os_type: &'static str },
}

#[derive(Debug, Clone)]
pub struct RezOptions {
    /// Resource ID shared by every block of the family.
    pub resource_id: i16,
    /// Optional resource name attached to every block.
    pub resource_name: Option<String>,
}

impl Default for RezOptions {
    fn default() -> Self {
        RezOptions {
            resource_id: 128,
            resource_name: None,
        }
    }
}

/// Renders the six quantized bitmaps as one Rez `data` document.
///
/// Blocks always appear in the fixed role order regardless of the order
/// the icons are supplied in. The document is assembled wholly in memory;
/// writing it is the caller's single side effect.
pub fn emit_document(icons: &[QuantizedIcon], options: &RezOptions) -> Result<String, EmitError> {
    for icon in icons {
        let (expected_width, expected_height) = icon.role.dimensions();
        if (icon.width, icon.height) != (expected_width, expected_height) {
            return Err(EmitError::Emission {
                os_type: icon.role.os_type(),
                expected_width,
                expected_height,
                actual_width: icon.width,
                actual_height: icon.height,
            });
        }
    }

    let mut document = String::new();
    for role in IconRole::ALL {
        let mut matches = icons.iter().filter(|icon| icon.role == role);
        let icon = matches.next().ok_or(EmitError::MissingRole {
            os_type: role.os_type(),
        })?;
        if matches.next().is_some() {
            return Err(EmitError::DuplicateRole {
                os_type: role.os_type(),
            });
        }

        emit_block(&mut document, icon, options);
        debug!("Emitted {} ({})", role.os_type(), options.resource_id);
    }

    info!(
        "Emitted {} resource blocks, {} bytes of Rez source",
        IconRole::ALL.len(),
        document.len()
    );
    Ok(document)
}

fn emit_block(document: &mut String, icon: &QuantizedIcon, options: &RezOptions) {
    match &options.resource_name {
        Some(name) => {
            let _ = writeln!(
                document,
                "data '{}' ({}, \"{}\") {{",
                icon.role.os_type(),
                options.resource_id,
                name
            );
        }
        None => {
            let _ = writeln!(
                document,
                "data '{}' ({}) {{",
                icon.role.os_type(),
                options.resource_id
            );
        }
    }

    for line in icon_payload(icon).chunks(BYTES_PER_LINE) {
        document.push_str("\t$\"");
        for (offset, byte) in line.iter().enumerate() {
            if offset > 0 && offset % 2 == 0 {
                document.push(' ');
            }
            let _ = write!(document, "{:02X}", byte);
        }
        document.push_str("\"\n");
    }

    document.push_str("};\n\n");
}
