//! Extraction of version control locations from `Vcs-*` fields.

use crate::document::Vcs;
use crate::enumerations::VcsType;
use crate::error::Result;
use crate::field_map::FieldMap;

/// Take every recognized `Vcs-*` field from the map.
///
/// Absent and empty fields produce nothing. The result is ordered by field
/// suffix, so the order of fields in the record never shows in the output.
///
/// # Examples
///
/// ```
/// use debsrc::vcs::take_vcs;
/// use debsrc::{FieldMap, VcsType};
///
/// let mut fields: FieldMap = [
///     ("Vcs-Git", "https://salsa.debian.org/hello.git"),
///     ("Vcs-Bzr", "lp:hello"),
/// ]
/// .into_iter()
/// .collect();
///
/// let vcs = take_vcs(&mut fields)?;
/// assert_eq!(vcs[0].vcs_type, VcsType::Bzr);
/// assert_eq!(vcs[1].vcs_type, VcsType::Git);
/// # Ok::<(), debsrc::TranscodeError>(())
/// ```
///
/// # Errors
///
/// Currently infallible.
pub fn take_vcs(fields: &mut FieldMap) -> Result<Vec<Vcs>> {
    let mut systems: Vec<VcsType> = VcsType::ALL.to_vec();
    systems.sort_by_key(|vcs_type| vcs_type.as_token());

    Ok(systems
        .into_iter()
        .filter_map(|vcs_type| {
            fields
                .take_non_empty(&format!("Vcs-{vcs_type}"))
                .map(|description| Vcs {
                    vcs_type,
                    description,
                })
        })
        .collect())
}
