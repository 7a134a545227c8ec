pub mod archive;
pub mod manifest;
pub mod scan;
pub mod title;

/// Fixed path of the manifest inside every package.
pub const MANIFEST_PATH: &str = "imsmanifest.xml";

/// Identifier of the single organization in the course structure.
pub const ORGANIZATION_ID: &str = "ORG-1";

pub const MANIFEST_IDENTIFIER: &str = "com.example.scorm";
pub const SCHEMA: &str = "ADL SCORM";
pub const SCHEMA_VERSION: &str = "1.2";

/// A SCORM 1.2 package manifest: one organization plus one resource per page.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Package title, shown as the organization title.
    pub title: String,
    pub items: Vec<Item>,
    pub resources: Vec<Resource>,
}

/// A page in the course structure, pointing at its resource
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub identifier: String,
    pub identifierref: String,
    pub title: String,
}

/// A deliverable SCO: the HTML page plus every file it depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub identifier: String,
    pub href: String,
    /// `<file href>` entries, assets first and the page itself last.
    pub files: Vec<String>,
}

impl Item {
    /// Build the `index`-th item (1-based) with its matching resource reference.
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            identifier: format!("ITEM-{index}"),
            identifierref: format!("RES-{index}"),
            title: title.into(),
        }
    }
}

impl Resource {
    /// Build the `index`-th resource (1-based) for a page and its assets.
    pub fn new(index: usize, href: impl Into<String>, assets: &[String]) -> Self {
        let href = href.into();
        let mut files = assets.to_vec();
        files.push(href.clone());
        Self {
            identifier: format!("RES-{index}"),
            href,
            files,
        }
    }
}
