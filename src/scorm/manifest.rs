use crate::error::Result;
use crate::scorm::title::page_title;
use crate::scorm::{
    Item, MANIFEST_IDENTIFIER, Manifest, ORGANIZATION_ID, Resource, SCHEMA, SCHEMA_VERSION,
};
use std::path::Path;

const IMSCP_NS: &str = "http://www.imsproject.org/xsd/imscp_rootv1p1p2";
const ADLCP_NS: &str = "http://www.adlnet.org/xsd/adlcp_rootv1p2";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Build the manifest for a set of pages.
///
/// `html_files` are page file names inside `base_dir`, numbered in the order
/// given. `asset_hrefs` are archive paths declared by every resource. Each
/// page is read for its title, and the first unreadable page aborts the build.
pub fn build_manifest(
    html_files: &[String],
    asset_hrefs: &[String],
    base_dir: &Path,
    title: &str,
) -> Result<Manifest> {
    let mut items = Vec::with_capacity(html_files.len());
    let mut resources = Vec::with_capacity(html_files.len());

    for (i, html_file) in html_files.iter().enumerate() {
        let index = i + 1;
        let page_title = page_title(&base_dir.join(html_file))?;
        items.push(Item::new(index, page_title));
        resources.push(Resource::new(index, html_file.as_str(), asset_hrefs));
    }

    Ok(Manifest {
        title: title.to_string(),
        items,
        resources,
    })
}

impl Manifest {
    /// Serialize as pretty-printed `imsmanifest.xml` text.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<manifest identifier=\"{MANIFEST_IDENTIFIER}\" version=\"{SCHEMA_VERSION}\" \
             xmlns=\"{IMSCP_NS}\" xmlns:adlcp=\"{ADLCP_NS}\" xmlns:xsi=\"{XSI_NS}\" \
             xsi:schemaLocation=\"{IMSCP_NS} imscp_rootv1p1p2.xsd {ADLCP_NS} adlcp_rootv1p2.xsd\">\n"
        ));

        xml.push_str("  <metadata>\n");
        xml.push_str(&format!("    <schema>{SCHEMA}</schema>\n"));
        xml.push_str(&format!("    <schemaversion>{SCHEMA_VERSION}</schemaversion>\n"));
        xml.push_str("  </metadata>\n");

        // Organizations
        xml.push_str(&format!("  <organizations default=\"{ORGANIZATION_ID}\">\n"));
        xml.push_str(&format!("    <organization identifier=\"{ORGANIZATION_ID}\">\n"));
        xml.push_str(&format!("      <title>{}</title>\n", xml_escape(&self.title)));
        for item in &self.items {
            xml.push_str(&format!(
                "      <item identifier=\"{}\" identifierref=\"{}\">\n",
                item.identifier, item.identifierref
            ));
            xml.push_str(&format!("        <title>{}</title>\n", xml_escape(&item.title)));
            xml.push_str("      </item>\n");
        }
        xml.push_str("    </organization>\n");
        xml.push_str("  </organizations>\n");

        // Resources
        if self.resources.is_empty() {
            xml.push_str("  <resources/>\n");
        } else {
            xml.push_str("  <resources>\n");
            for resource in &self.resources {
                xml.push_str(&format!(
                    "    <resource identifier=\"{}\" type=\"webcontent\" adlcp:scormtype=\"sco\" href=\"{}\">\n",
                    resource.identifier,
                    xml_escape(&resource.href)
                ));
                for file in &resource.files {
                    xml.push_str(&format!("      <file href=\"{}\"/>\n", xml_escape(file)));
                }
                xml.push_str("    </resource>\n");
            }
            xml.push_str("  </resources>\n");
        }

        xml.push_str("</manifest>\n");
        xml
    }
}

fn xml_escape(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn sample_manifest() -> Manifest {
        let assets = vec!["images/x.png".to_string()];
        Manifest {
            title: "Lecture Notes".to_string(),
            items: vec![Item::new(1, "Introduction"), Item::new(2, "b.html")],
            resources: vec![
                Resource::new(1, "a.html", &assets),
                Resource::new(2, "b.html", &assets),
            ],
        }
    }

    /// Count elements with the given local name, failing on malformed XML.
    fn count_elements(xml: &str, name: &[u8]) -> usize {
        let mut reader = Reader::from_str(xml);
        let mut count = 0;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == name => {
                    count += 1;
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("malformed manifest: {e}"),
                _ => {}
            }
        }
        count
    }

    #[test]
    fn test_manifest_xml_snapshot() {
        let xml = sample_manifest().to_xml();
        insta::assert_snapshot!(xml, @r#"
<?xml version="1.0" encoding="UTF-8"?>
<manifest identifier="com.example.scorm" version="1.2" xmlns="http://www.imsproject.org/xsd/imscp_rootv1p1p2" xmlns:adlcp="http://www.adlnet.org/xsd/adlcp_rootv1p2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.imsproject.org/xsd/imscp_rootv1p1p2 imscp_rootv1p1p2.xsd http://www.adlnet.org/xsd/adlcp_rootv1p2 adlcp_rootv1p2.xsd">
  <metadata>
    <schema>ADL SCORM</schema>
    <schemaversion>1.2</schemaversion>
  </metadata>
  <organizations default="ORG-1">
    <organization identifier="ORG-1">
      <title>Lecture Notes</title>
      <item identifier="ITEM-1" identifierref="RES-1">
        <title>Introduction</title>
      </item>
      <item identifier="ITEM-2" identifierref="RES-2">
        <title>b.html</title>
      </item>
    </organization>
  </organizations>
  <resources>
    <resource identifier="RES-1" type="webcontent" adlcp:scormtype="sco" href="a.html">
      <file href="images/x.png"/>
      <file href="a.html"/>
    </resource>
    <resource identifier="RES-2" type="webcontent" adlcp:scormtype="sco" href="b.html">
      <file href="images/x.png"/>
      <file href="b.html"/>
    </resource>
  </resources>
</manifest>
"#);
    }

    #[test]
    fn test_manifest_is_well_formed_with_special_chars() {
        let manifest = Manifest {
            title: "Q&A <draft> \"final\"".to_string(),
            items: vec![Item::new(1, "Fish & Chips")],
            resources: vec![Resource::new(1, "q&a.html", &[])],
        };
        let xml = manifest.to_xml();
        assert!(xml.contains("<title>Q&amp;A &lt;draft&gt; &quot;final&quot;</title>"));
        assert!(xml.contains("href=\"q&amp;a.html\""));
        assert_eq!(count_elements(&xml, b"manifest"), 1);
        assert_eq!(count_elements(&xml, b"item"), 1);
    }

    #[test]
    fn test_build_manifest_one_item_per_page() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.html"), "<title> My Lecture </title>").unwrap();
        std::fs::write(tmp.path().join("b.html"), "<p>untitled</p>").unwrap();
        std::fs::write(tmp.path().join("c.html"), "<TITLE>Third</TITLE>").unwrap();

        let pages = vec!["a.html".to_string(), "b.html".to_string(), "c.html".to_string()];
        let assets = vec!["images/x.png".to_string(), "images/y.svg".to_string()];
        let manifest = build_manifest(&pages, &assets, tmp.path(), "Course").unwrap();

        assert_eq!(manifest.items.len(), 3);
        assert_eq!(manifest.resources.len(), 3);
        for (i, (item, res)) in manifest.items.iter().zip(&manifest.resources).enumerate() {
            assert_eq!(item.identifier, format!("ITEM-{}", i + 1));
            assert_eq!(item.identifierref, res.identifier);
            assert_eq!(res.href, pages[i]);
            assert_eq!(res.files.len(), assets.len() + 1);
        }
        assert_eq!(manifest.items[0].title, "My Lecture");
        assert_eq!(manifest.items[1].title, "b.html");
        assert_eq!(manifest.items[2].title, "Third");

        let xml = manifest.to_xml();
        assert_eq!(count_elements(&xml, b"item"), 3);
        assert_eq!(count_elements(&xml, b"resource"), 3);
        assert_eq!(count_elements(&xml, b"file"), 9);
    }

    #[test]
    fn test_build_manifest_missing_page_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.html"), "<title>A</title>").unwrap();
        let pages = vec!["a.html".to_string(), "missing.html".to_string()];
        assert!(build_manifest(&pages, &[], tmp.path(), "Course").is_err());
    }

    #[test]
    fn test_empty_manifest_serializes() {
        let xml = Manifest::default().to_xml();
        assert!(xml.contains("<resources/>"));
        assert_eq!(count_elements(&xml, b"resource"), 0);
    }
}
