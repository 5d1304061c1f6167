//! SCORM 1.2 manifest rendering.

use crate::config::ExportConfig;

/// The manifest file name the SCORM 1.2 content packaging contract fixes.
/// It must sit at the package root, sibling to the files it references.
pub const MANIFEST_FILE: &str = "imsmanifest.xml";

/// Escape text for interpolation into XML content or attribute values.
pub(crate) fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `imsmanifest.xml`: one organization, one SCO item, one resource
/// listing the host page and the bridge script.
pub fn render_manifest(config: &ExportConfig) -> String {
    let identifier = escape_xml(&config.identifier);
    let title = escape_xml(&config.title);
    let host_page = escape_xml(&config.host_page_file);
    let bridge = escape_xml(&config.bridge_file);

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<manifest identifier="{identifier}" version="1.2"
 xmlns="http://www.imsproject.org/xsd/imscp_rootv1p1p2"
 xmlns:adlcp="http://www.adlnet.org/xsd/adlcp_rootv1p2"
 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
 xsi:schemaLocation="http://www.imsproject.org/xsd/imscp_rootv1p1p2 imscp_rootv1p1p2.xsd
                     http://www.adlnet.org/xsd/adlcp_rootv1p2 adlcp_rootv1p2.xsd">
	<organizations default="ORG1">
		<organization identifier="ORG1">
			<title>{title}</title>
			<item identifier="ITEM1" identifierref="RES1">
				<title>{title}</title>
			</item>
		</organization>
	</organizations>

	<resources>
		<resource identifier="RES1" type="webcontent" adlcp:scormtype="sco" href="{host_page}">
			<file href="{host_page}"/>
			<file href="{bridge}"/>
		</resource>
	</resources>
</manifest>
"#
    )
}
