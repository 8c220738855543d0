// crates/core/src/ucd/iswgraph.rs
//! `zx_iswgraph()` tables and conditionals.

use zx_tablegen_shared_kernel::{ErrorContext, Result, TableGenError};

use super::graph::PlaneSets;
use crate::compact::{coalesce, encode_dense};
use crate::data::unicode::{PLANE_COUNT, PlaneEncoding};
use crate::emit::{Listing, emit_dense_table, emit_range_conditional};

const ORIGIN: &str = "output from \"zx-tablegen iswgraph\"";

/// Every plane must hold members iff the layout gives it an encoding.
///
/// # Errors
///
/// Returns `ConsistencyViolation` naming the first plane that disagrees.
pub fn check_layout(planes: &PlaneSets, layout: &[PlaneEncoding; PLANE_COUNT]) -> Result<()> {
    for (plane, encoding) in layout.iter().enumerate() {
        let count = planes.plane(plane).len();
        let expected_members = !matches!(encoding, PlaneEncoding::Empty);
        if expected_members != (count > 0) {
            return Err(TableGenError::consistency(
                "plane-layout",
                format!("plane {plane:X} has {count} graphical codepoints, layout expects it {}",
                    if expected_members { "non-empty" } else { "empty" }),
            ));
        }
    }
    Ok(())
}

/// Render the dense tables followed by the range conditionals, each block
/// wrapped in begin/end copy-paste markers.
///
/// # Errors
///
/// Returns `ConsistencyViolation` from the layout check or the compactors.
pub fn render_iswgraph(
    planes: &PlaneSets,
    layout: &[PlaneEncoding; PLANE_COUNT],
    unicode_version: &str,
) -> Result<String> {
    check_layout(planes, layout)?;
    for (plane, count) in planes.counts().filter(|(_, count)| *count > 0) {
        log::debug!("plane {plane:X}: {count} graphical codepoints");
    }

    let mut out = Listing::new();
    out.push(format!("\t// Begin copy/paste of `zx_iswgraph()` tables {ORIGIN}"));
    let mut heading = Some(format!("Unicode {unicode_version}"));
    for (plane, encoding) in layout.iter().copied().enumerate() {
        let PlaneEncoding::Dense { name, skips } = encoding else {
            continue;
        };
        let members = planes.plane(plane);
        for skip in skips {
            if let Some(mismatch) = skip.audit(members) {
                log::warn!("plane {plane:X}: {mismatch}; revalidate skip ranges for Unicode {unicode_version}");
            }
        }
        let table = encode_dense(members, skips)
            .with_context(|| format!("encoding plane {plane:X} table zx_graph_{name}"))?;
        emit_dense_table(&mut out, &format!("zx_graph_{name}"), heading.take().as_deref(), &table);
    }
    out.push(format!("\t// End copy/paste of `zx_iswgraph()` tables {ORIGIN}"));

    out.push(format!("\t// Begin copy/paste of `zx_iswgraph()` if conditions {ORIGIN}"));
    for (plane, encoding) in layout.iter().enumerate() {
        if *encoding != PlaneEncoding::Sparse {
            continue;
        }
        let set = coalesce(planes.plane(plane), PlaneSets::window(plane))
            .with_context(|| format!("coalescing plane {plane:X}"))?;
        emit_range_conditional(&mut out, &set);
    }
    out.push(format!("\t// End copy/paste of `zx_iswgraph()` if conditions {ORIGIN}"));

    Ok(out.render())
}
