//! Google Play Store `Installs.json`

use serde_json::Value;

use crate::error::Result;
use crate::models::PlayStoreAppInstall;
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::from_iso_string;

/// Lazily extract [`PlayStoreAppInstall`] records.
///
/// `install.doc.title` and `install.firstInstallationTime` are required. The
/// device name (`install.deviceAttribute.deviceDisplayName`) is absent for
/// installs recorded before device tracking, so a missing `deviceAttribute`
/// object is tolerated too.
pub fn parse_app_installs(
    document: &Value,
) -> Result<impl Iterator<Item = Result<PlayStoreAppInstall>> + '_> {
    let items = top_level_array(document, None, "a JSON array of app installs")?;
    Ok(items.iter().enumerate().map(|(index, app)| parse_install(&Element::new(index, app))))
}

fn parse_install(app: &Element<'_>) -> Result<PlayStoreAppInstall> {
    Ok(PlayStoreAppInstall {
        title: app.required_str("install.doc.title")?.to_string(),
        device_name: app
            .optional_str("install.deviceAttribute.deviceDisplayName")?
            .map(str::to_string),
        dt: app.timestamp_with("install.firstInstallationTime", from_iso_string)?,
    })
}
