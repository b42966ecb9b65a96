//! Edits to the header's metadata block.

use tracing::{debug, warn};

use crate::catalog::{Catalog, Translation};

/// Remove `Name: value` lines from the header metadata.
///
/// Field names match case-sensitively against the text before the first
/// `:` of each line. Returns how many lines were removed. Names that match
/// nothing are logged and otherwise ignored.
pub fn remove_header_fields<S: AsRef<str>>(catalog: &mut Catalog, fields: &[S]) -> usize {
    if fields.is_empty() {
        return 0;
    }

    let Some(header) = catalog.header_mut() else {
        debug!("no header to edit");
        return 0;
    };
    let Translation::Singular(metadata) = &mut header.translation else {
        warn!("header has plural forms, field removal skipped");
        return 0;
    };

    let mut removed = 0;
    let mut found = vec![false; fields.len()];
    let mut kept = String::with_capacity(metadata.len());

    for line in metadata.split_inclusive('\n') {
        let name = line.split_once(':').map(|(name, _)| name.trim());
        let hit = name.and_then(|name| fields.iter().position(|f| f.as_ref() == name));

        match hit {
            Some(pos) => {
                found[pos] = true;
                removed += 1;
            }
            None => kept.push_str(line),
        }
    }

    for (field, found) in fields.iter().zip(found) {
        if !found {
            warn!(field = field.as_ref(), "header field not present");
        }
    }

    *metadata = kept;
    removed
}
