//! Segment assembly and output.
//!
//! Each page group becomes a standalone PDF built from a clone of the source
//! document: the root Pages node is rebuilt around the kept pages, dropped
//! pages and orphaned tree nodes are pruned, and the result is saved as
//! `segment_<k>.pdf`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use pdf_extract::{Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::segmenter::PageGroup;

/// Page attributes that may live on ancestor Pages nodes. The rebuild
/// discards intermediate nodes, so these are copied onto each kept page
/// while the original tree is still intact.
const INHERITED_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Catalog entries that can reference dropped pages. Segments are standalone
/// documents, so these are not carried over.
const CATALOG_DROPPED_KEYS: [&[u8]; 8] = [
    b"Outlines",
    b"Names",
    b"Dests",
    b"OpenAction",
    b"AcroForm",
    b"PageLabels",
    b"StructTreeRoot",
    b"Threads",
];

/// File name for the 1-based segment number `k`.
pub fn segment_file_name(k: usize) -> String {
    format!("segment_{}.pdf", k)
}

/// Writes one standalone PDF per page group into `output_dir`, named
/// `segment_1.pdf`, `segment_2.pdf`, ... in group order.
///
/// The directory is created if missing. Existing files with the same names
/// are overwritten; files from earlier runs with other names are left alone.
/// A failure while writing segment `k` propagates immediately and leaves
/// segments `1..k-1` on disk.
pub fn write_segments(
    source: &Document,
    groups: &[PageGroup],
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(groups.len());
    for (position, group) in groups.iter().enumerate() {
        let path = output_dir.join(segment_file_name(position + 1));
        write_segment(source, group, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn write_segment(source: &Document, group: &PageGroup, path: &Path) -> Result<()> {
    let mut doc = source.clone();
    let page_map = doc.get_pages();

    // Page numbers are 1-based in the page map.
    let mut kept = Vec::with_capacity(group.page_count());
    for page_index in group.pages() {
        let page_number = page_index as u32 + 1;
        let object_id = page_map
            .get(&page_number)
            .copied()
            .ok_or(Error::MissingPage(page_number))?;
        kept.push(object_id);
    }

    // Inherited attributes must be resolved before the tree is rebuilt.
    let mut materialized = Vec::with_capacity(kept.len());
    for &page_id in &kept {
        let mut attributes = Vec::new();
        for key in INHERITED_PAGE_KEYS {
            if let Some(value) = find_inherited(&doc, page_id, key) {
                attributes.push((key, value));
            }
        }
        materialized.push((page_id, attributes));
    }

    let (catalog_id, pages_root_id) = document_roots(&doc)?;

    for (page_id, attributes) in materialized {
        let page_dict = doc.get_object_mut(page_id)?.as_dict_mut()?;
        for (key, value) in attributes {
            page_dict.set(key, value);
        }
        page_dict.set("Parent", Object::Reference(pages_root_id));
    }

    // Rebuild the root Pages node around the kept pages.
    let kids: Vec<Object> = kept.iter().map(|&id| Object::Reference(id)).collect();
    let pages_dict = doc.get_object_mut(pages_root_id)?.as_dict_mut()?;
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(kept.len() as i64));

    let catalog = doc.get_object_mut(catalog_id)?.as_dict_mut()?;
    for key in CATALOG_DROPPED_KEYS {
        catalog.remove(key);
    }

    let kept_set: BTreeSet<ObjectId> = kept.iter().copied().collect();
    for object_id in page_map.values() {
        if !kept_set.contains(object_id) {
            doc.objects.remove(object_id);
        }
    }
    let _ = doc.prune_objects();
    doc.renumber_objects();
    doc.compress();
    doc.save(path)?;

    log::debug!(
        "wrote {} (pages {}..={})",
        path.display(),
        group.first_page,
        group.last_page
    );
    Ok(())
}

/// Resolves the catalog and the root Pages node from the trailer.
fn document_roots(doc: &Document) -> Result<(ObjectId, ObjectId)> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_object(catalog_id)?.as_dict()?;
    let pages_root_id = catalog.get(b"Pages")?.as_reference()?;
    Ok((catalog_id, pages_root_id))
}

/// Looks `key` up on the page dictionary, then up the Parent chain.
/// The closest value wins, matching PDF attribute inheritance.
fn find_inherited(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = page_id;
    // Parent chains are short; the bound guards against reference cycles.
    for _ in 0..64 {
        let dict = doc.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value.clone());
        }
        current = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
    None
}
