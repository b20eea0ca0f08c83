//! Document I/O operations for signitizing

use crate::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// Deepest page tree walked when resolving inherited attributes
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Load a single PDF document, unlocking it if it is encrypted
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let mut doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
        .await?
        .map_err(SignitizeError::InvalidDocument)?;
    unlock(&mut doc)?;
    log::info!("loaded {:?} ({} pages)", path, doc.get_pages().len());
    Ok(doc)
}

/// Make sure the document can be read.
///
/// An encrypted document is tried once with the empty password; if that
/// does not open it the document is rejected.
pub fn unlock(doc: &mut Document) -> Result<()> {
    if !doc.is_encrypted() {
        return Ok(());
    }
    log::debug!("document is encrypted, trying empty password");
    doc.decrypt("").map_err(|e| {
        log::debug!("decryption failed: {}", e);
        SignitizeError::Encrypted
    })
}

/// Create the output directory (and parents) if it does not exist
pub async fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| SignitizeError::OutputDir {
            path: path.to_owned(),
            source,
        })
}

/// The ordered pages of a loaded document
pub struct PageSource<'a> {
    document: &'a Document,
    page_ids: Vec<ObjectId>,
    blank_media_box: Vec<Object>,
}

impl<'a> PageSource<'a> {
    pub fn new(document: &'a Document) -> Result<Self> {
        let page_ids: Vec<ObjectId> = document.get_pages().values().copied().collect();
        let first = *page_ids.first().ok_or(SignitizeError::NoPages)?;
        let blank_media_box = page_media_box(document, first);
        Ok(Self {
            document,
            page_ids,
            blank_media_box,
        })
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn len(&self) -> usize {
        self.page_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page_ids.is_empty()
    }

    /// Object id of the page at 0-based `index`
    pub fn page_id(&self, index: usize) -> Result<ObjectId> {
        self.page_ids
            .get(index)
            .copied()
            .ok_or(SignitizeError::MissingPage(index + 1))
    }

    /// MediaBox given to synthesized blank pages (taken from the first page)
    pub fn blank_media_box(&self) -> &[Object] {
        &self.blank_media_box
    }
}

/// Look up a page attribute, following the page tree for inherited values
pub(crate) fn inherited_attribute<'d>(
    doc: &'d Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'d Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            return resolve(doc, value);
        }
        let parent = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn resolve<'d>(doc: &'d Document, obj: &'d Object) -> Option<&'d Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// MediaBox of a page, defaulting to US Letter
pub(crate) fn page_media_box(doc: &Document, page_id: ObjectId) -> Vec<Object> {
    inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .filter(|arr| arr.len() == 4)
        .cloned()
        .unwrap_or_else(default_media_box)
}

/// Get default MediaBox for US Letter size
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_WIDTH_PT),
        Object::Real(DEFAULT_PAGE_HEIGHT_PT),
    ]
}
