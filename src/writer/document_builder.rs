//! Document object builder.
//!
//! Converts laid-out pages into an [`ObjectGraph`]: catalog, page tree,
//! the four font dictionaries, one page dictionary per page, one content
//! stream per page and, when any metadata is set, an Info dictionary.
//!
//! ```text
//! 1        Catalog
//! 2        Pages
//! 3..=6    Font F1..F4
//! 7..      Page × n
//! 7+n..    Content stream × n
//! last     Info (optional)
//! ```

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use super::pdf_writer::PdfWriterConfig;
use crate::error::{Error, Result};
use crate::fonts::FontRegistry;
use crate::layout::Page;
use crate::object::{Dict, Object, ObjectRef};
use std::collections::BTreeMap;
use std::io::Write;

/// Indirect objects of one document, keyed by object number.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGraph {
    objects: BTreeMap<u32, Object>,
    next_id: u32,
    root: Option<ObjectRef>,
    info: Option<ObjectRef>,
}

impl ObjectGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            next_id: 1,
            root: None,
            info: None,
        }
    }

    /// Reserve the next object number.
    pub fn allocate(&mut self) -> ObjectRef {
        let id = self.next_id;
        self.next_id += 1;
        ObjectRef::new(id, 0)
    }

    /// Store an object under a reference.
    pub fn insert(&mut self, id: ObjectRef, object: Object) {
        self.next_id = self.next_id.max(id.id + 1);
        self.objects.insert(id.id, object);
    }

    /// Allocate a number and store the object in one step.
    pub fn add(&mut self, object: Object) -> ObjectRef {
        let id = self.allocate();
        self.insert(id, object);
        id
    }

    /// Set the document catalog.
    pub fn set_root(&mut self, root: ObjectRef) {
        self.root = Some(root);
    }

    /// Set the document information dictionary.
    pub fn set_info(&mut self, info: ObjectRef) {
        self.info = Some(info);
    }

    /// Document catalog reference.
    pub fn root(&self) -> Option<ObjectRef> {
        self.root
    }

    /// Information dictionary reference.
    pub fn info(&self) -> Option<ObjectRef> {
        self.info
    }

    /// Look up an object by number.
    pub fn get(&self, id: u32) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the graph holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectRef, &Object)> {
        self.objects
            .iter()
            .map(|(id, obj)| (ObjectRef::new(*id, 0), obj))
    }

    /// Check that ids run 1..=N without gaps and every reference resolves.
    pub fn validate(&self) -> Result<()> {
        for (expected, id) in (1u32..).zip(self.objects.keys()) {
            if *id != expected {
                return Err(Error::Serialization(format!(
                    "object ids are not contiguous: expected {}, found {}",
                    expected, id
                )));
            }
        }

        let root = self
            .root
            .ok_or_else(|| Error::Serialization("document has no catalog".to_string()))?;
        let trailer_refs = std::iter::once(root).chain(self.info);
        let object_refs = self.objects.values().flat_map(Object::references);

        for r in trailer_refs.chain(object_refs) {
            if !self.objects.contains_key(&r.id) {
                return Err(Error::Serialization(format!("dangling reference {}", r)));
            }
        }
        Ok(())
    }
}

impl Default for ObjectGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress data using zlib for the FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Builds the object graph for laid-out pages.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'a> {
    fonts: &'a FontRegistry,
    config: &'a PdfWriterConfig,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder over a font registry and writer settings.
    pub fn new(fonts: &'a FontRegistry, config: &'a PdfWriterConfig) -> Self {
        Self { fonts, config }
    }

    /// Build the object graph for `pages`.
    pub fn build(&self, pages: &[Page]) -> Result<ObjectGraph> {
        let mut graph = ObjectGraph::new();

        let catalog_id = graph.allocate();
        let pages_id = graph.allocate();
        graph.set_root(catalog_id);

        let mut font_resources = Dict::new();
        for font in self.fonts.iter() {
            let font_id = graph.add(ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(font.base_font)),
            ]));
            font_resources.insert(font.id.resource_name().to_string(), Object::Reference(font_id));
        }

        let page_ids: Vec<ObjectRef> = pages.iter().map(|_| graph.allocate()).collect();
        let content_ids: Vec<ObjectRef> = pages.iter().map(|_| graph.allocate()).collect();

        for ((page, page_id), content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id)),
                ("MediaBox", ObjectSerializer::rect(0.0, 0.0, page.width, page.height)),
                ("Contents", ObjectSerializer::reference(*content_id)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![("Font", Object::Dictionary(font_resources.clone()))]),
                ),
            ]);
            graph.insert(*page_id, page_obj);
            graph.insert(*content_id, self.content_stream(page)?);
        }

        graph.insert(
            pages_id,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                (
                    "Kids",
                    Object::Array(page_ids.iter().copied().map(Object::Reference).collect()),
                ),
                ("Count", ObjectSerializer::integer(pages.len() as i64)),
            ]),
        );
        graph.insert(
            catalog_id,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(pages_id)),
            ]),
        );

        if let Some(info) = self.info_dictionary() {
            let info_id = graph.add(info);
            graph.set_info(info_id);
        }

        log::debug!("built object graph: {} objects for {} pages", graph.len(), pages.len());
        Ok(graph)
    }

    fn content_stream(&self, page: &Page) -> Result<Object> {
        let raw = ContentStreamBuilder::new().add_draw_ops(&page.ops).build()?;

        let mut dict = Dict::new();
        let data = if self.config.compress {
            let compressed = compress_data(&raw)?;
            dict.insert("Length".to_string(), Object::Integer(compressed.len() as i64));
            dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
            compressed
        } else {
            dict.insert("Length".to_string(), Object::Integer(raw.len() as i64));
            raw
        };

        Ok(Object::Stream {
            dict,
            data: bytes::Bytes::from(data),
        })
    }

    fn info_dictionary(&self) -> Option<Object> {
        if !self.config.has_metadata() {
            return None;
        }
        let fields = [
            ("Title", &self.config.title),
            ("Author", &self.config.author),
            ("Subject", &self.config.subject),
            ("Keywords", &self.config.keywords),
            ("Creator", &self.config.creator),
        ];
        let entries: Vec<(&str, Object)> = fields
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| (key, ObjectSerializer::text_string(v)))
            })
            .collect();
        Some(ObjectSerializer::dict(entries))
    }
}

/// Build the object graph for `pages` with default writer settings.
pub fn build(pages: &[Page], fonts: &FontRegistry) -> Result<ObjectGraph> {
    DocumentBuilder::new(fonts, &PdfWriterConfig::default()).build(pages)
}
