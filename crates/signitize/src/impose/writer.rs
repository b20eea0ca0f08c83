//! PDF output streams
//!
//! Each stream is a fresh document. Source pages are deep-copied into it,
//! blank pages are created from the first page's MediaBox, and the file is
//! written when the stream ends.

use super::io::{PageSource, inherited_attribute};
use super::router::{PageSink, StreamKey, output_file_name};
use crate::constants::OUTPUT_PDF_VERSION;
use crate::layout::PageRef;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Page attributes that may be inherited from the page tree and must be
/// copied onto each page once it is detached from its parent
const INHERITABLE_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// A [`PageSink`] writing one PDF file per stream
pub struct PdfFileSink<'a> {
    source: &'a PageSource<'a>,
    output_dir: PathBuf,
    basename: String,
    current: Option<OpenStream>,
    written: Vec<PathBuf>,
}

/// Output document under construction
struct OpenStream {
    path: PathBuf,
    doc: Document,
    pages_tree_id: ObjectId,
    kids: Vec<Object>,
    /// Source object id -> copied object id, so shared resources are
    /// copied once per file
    cache: HashMap<ObjectId, ObjectId>,
}

impl<'a> PdfFileSink<'a> {
    pub fn new(
        source: &'a PageSource<'a>,
        output_dir: impl Into<PathBuf>,
        basename: impl Into<String>,
    ) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
            basename: basename.into(),
            current: None,
            written: Vec::new(),
        }
    }

    /// Files written, in order
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }

    fn open_stream(&mut self) -> Result<&mut OpenStream> {
        self.current
            .as_mut()
            .ok_or_else(|| SignitizeError::Config("no output stream is open".to_string()))
    }
}

impl PageSink for PdfFileSink<'_> {
    fn begin_stream(&mut self, key: StreamKey) -> Result<()> {
        if self.current.is_some() {
            return Err(SignitizeError::Config(
                "output stream is already open".to_string(),
            ));
        }

        let path = self.output_dir.join(output_file_name(&self.basename, key));
        log::info!("output {}", path.display());

        let mut doc = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_tree_id = doc.new_object_id();
        self.current = Some(OpenStream {
            path,
            doc,
            pages_tree_id,
            kids: Vec::new(),
            cache: HashMap::new(),
        });
        Ok(())
    }

    fn write_page(&mut self, page: PageRef) -> Result<()> {
        let source = self.source;
        let stream = self.open_stream()?;
        let page_id = match page {
            PageRef::Source(index) => {
                let source_id = source.page_id(index)?;
                copy_page(
                    &mut stream.doc,
                    source.document(),
                    source_id,
                    stream.pages_tree_id,
                    &mut stream.cache,
                )?
            }
            PageRef::Blank => create_blank_page(
                &mut stream.doc,
                source.blank_media_box(),
                stream.pages_tree_id,
            ),
        };
        stream.kids.push(Object::Reference(page_id));
        Ok(())
    }

    fn end_stream(&mut self) -> Result<()> {
        let OpenStream {
            path,
            mut doc,
            pages_tree_id,
            kids,
            ..
        } = self
            .current
            .take()
            .ok_or_else(|| SignitizeError::Config("no output stream is open".to_string()))?;

        log::debug!("writing {} pages to {}", kids.len(), path.display());
        finalize_document(&mut doc, pages_tree_id, kids);
        save_document(&mut doc, &path)?;
        self.written.push(path);
        Ok(())
    }
}

/// Copy a source page into `output` as a child of `parent_id`
fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    // Registered before copying so annotations pointing back at this page
    // resolve to the copy
    let new_page_id = output.new_object_id();
    cache.insert(page_id, new_page_id);

    let mut new_dict = copy_dictionary(output, source, page_dict, cache)?;

    for key in INHERITABLE_KEYS {
        if new_dict.has(key) {
            continue;
        }
        if let Some(value) = inherited_attribute(source, page_id, key) {
            new_dict.set(key, copy_object_deep(output, source, value, cache)?);
        }
    }

    new_dict.set("Parent", Object::Reference(parent_id));
    output
        .objects
        .insert(new_page_id, Object::Dictionary(new_dict));
    Ok(new_page_id)
}

/// Create a blank page with the given media box and no content stream
fn create_blank_page(output: &mut Document, media_box: &[Object], parent_id: ObjectId) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(media_box.to_vec()));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
    output.add_object(page_dict)
}

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times. Page tree
/// back-links (`Parent`) are not followed. References to source pages that
/// are not (yet) part of this output, such as an annotation's `/P` or a link
/// `/Dest`, become `null` instead of dragging an orphan page copy along.
fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }
            if source.get_object(*id).is_ok_and(is_page) {
                return Ok(Object::Null);
            }

            // Reserve the id first so reference cycles terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let copied = match source.get_object(*id) {
                Ok(referenced) => copy_object_deep(output, source, referenced, cache)?,
                Err(_) => Object::Null,
            };
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn is_page(obj: &Object) -> bool {
    match obj {
        Object::Dictionary(dict) => {
            matches!(dict.get(b"Type"), Ok(Object::Name(name)) if name.as_slice() == b"Page")
        }
        _ => false,
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

fn save_document(doc: &mut Document, path: &Path) -> Result<()> {
    let output_error = |source: std::io::Error| SignitizeError::OutputFile {
        path: path.to_owned(),
        source,
    };

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| output_error(std::io::Error::other(e.to_string())))?;
    std::fs::write(path, bytes).map_err(output_error)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_document_failure_is_output_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut doc = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_tree_id = doc.new_object_id();
        finalize_document(&mut doc, pages_tree_id, Vec::new());

        let path = temp_dir.path().join("missing").join("book-out.pdf");
        match save_document(&mut doc, &path) {
            Err(e @ SignitizeError::OutputFile { .. }) => {
                assert_eq!(e.kind(), ErrorKind::Output);
                assert!(e.to_string().contains("book-out.pdf"));
            }
            other => panic!("expected OutputFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_is_page() {
        let page = Object::Dictionary(Dictionary::from_iter(vec![(
            "Type",
            Object::Name(b"Page".to_vec()),
        )]));
        let pages = Object::Dictionary(Dictionary::from_iter(vec![(
            "Type",
            Object::Name(b"Pages".to_vec()),
        )]));
        assert!(is_page(&page));
        assert!(!is_page(&pages));
        assert!(!is_page(&Object::Integer(1)));
    }
}
