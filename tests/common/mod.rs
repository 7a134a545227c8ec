use std::io::Read;
use std::path::Path;

/// Write an HTML page, with a `<title>` when one is given.
pub fn write_page(dir: &Path, name: &str, title: Option<&str>) {
    let head = title.map_or(String::new(), |t| format!("<title>{t}</title>"));
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">{head}</head>\n<body><p>{name}</p></body>\n</html>\n"
    );
    std::fs::write(dir.join(name), html).expect("write page");
}

/// Write a small binary file, creating parent directories.
#[allow(dead_code)]
pub fn write_asset(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write asset");
}

/// Entry names in archive order
#[allow(dead_code)]
pub fn archive_names(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("read zip");
    (0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(|s| s.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn read_entry_string(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).expect("open zip");
    let mut archive = zip::ZipArchive::new(file).expect("read zip");
    let mut entry = archive.by_name(name).expect("entry");
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("read entry");
    content
}

/// Collect `(local element name, attributes)` for every element in the manifest,
/// panicking if it is not well-formed XML.
#[allow(dead_code)]
pub fn manifest_elements(xml: &str) -> Vec<(String, Vec<(String, String)>)> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut elements = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let attrs = e
                    .attributes()
                    .flatten()
                    .map(|a| {
                        (
                            String::from_utf8_lossy(a.key.as_ref()).into_owned(),
                            a.unescape_value().expect("attribute").into_owned(),
                        )
                    })
                    .collect();
                elements.push((name, attrs));
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed manifest: {e}"),
            _ => {}
        }
    }
    elements
}

/// Value of `key` on an element, if present.
#[allow(dead_code)]
pub fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
