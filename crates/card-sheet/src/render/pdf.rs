//! PDF canvas backed by `lopdf`
//!
//! Every page collects content stream operators as strings and the image
//! XObjects it references; closing the page turns them into a page object.

use super::xobject::create_image_xobject;
use crate::canvas::Canvas;
use crate::layout::{Point, Rect};
use crate::types::{CardSheetError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// An image registered with a [`PdfCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub struct PdfImage {
    id: ObjectId,
    /// Resource name used in content streams
    name: String,
}

struct OpenPage {
    width_pt: f32,
    height_pt: f32,
    ops: Vec<String>,
    xobjects: Dictionary,
}

pub struct PdfCanvas {
    doc: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    current: Option<OpenPage>,
    image_count: usize,
    title: String,
}

impl PdfCanvas {
    pub fn new(title: impl Into<String>) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_tree_id = doc.new_object_id();
        Self {
            doc,
            pages_tree_id,
            page_refs: Vec::new(),
            current: None,
            image_count: 0,
            title: title.into(),
        }
    }

    /// Number of closed pages
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn page_mut(&mut self) -> Result<&mut OpenPage> {
        self.current
            .as_mut()
            .ok_or_else(|| CardSheetError::Canvas("No page is open".to_string()))
    }

    /// Create pages tree, info and catalog
    fn finalize_document(&mut self) {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs.clone())),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let info_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(self.title.as_str())),
            ("Producer", Object::string_literal("card-sheet")),
        ]));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new("Cards")
    }
}

impl Canvas for PdfCanvas {
    type Image = PdfImage;

    fn register_image(&mut self, name: &str, bytes: &[u8]) -> Result<PdfImage> {
        let stream = create_image_xobject(bytes)?;
        let id = self.doc.add_object(stream);
        self.image_count += 1;
        log::debug!("Embedded {} as image object {:?}", name, id);

        Ok(PdfImage {
            id,
            name: format!("Im{}", self.image_count),
        })
    }

    fn new_page(&mut self, width_pt: f32, height_pt: f32) -> Result<()> {
        if self.current.is_some() {
            return Err(CardSheetError::Canvas(
                "Previous page was not closed".to_string(),
            ));
        }
        self.current = Some(OpenPage {
            width_pt,
            height_pt,
            ops: Vec::new(),
            xobjects: Dictionary::new(),
        });
        Ok(())
    }

    fn close_page(&mut self) -> Result<()> {
        let page = self
            .current
            .take()
            .ok_or_else(|| CardSheetError::Canvas("No page is open".to_string()))?;

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width_pt),
                Object::Real(page.height_pt),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(page.xobjects));

        let content = page.ops.join("");
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }

    fn draw_image_in_rect(&mut self, image: &PdfImage, rect: Rect) -> Result<()> {
        let page = self.page_mut()?;
        page.xobjects
            .set(image.name.as_bytes(), Object::Reference(image.id));
        page.ops.push(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            rect.width, rect.height, rect.x, rect.y, image.name
        ));
        Ok(())
    }

    fn set_line_width(&mut self, width_pt: f32) -> Result<()> {
        self.page_mut()?.ops.push(format!("{} w\n", width_pt));
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point]) -> Result<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let mut op = format!("{} {} m", first.x, first.y);
        for point in rest {
            op.push_str(&format!(" {} {} l", point.x, point.y));
        }
        op.push_str(" S\n");
        self.page_mut()?.ops.push(op);
        Ok(())
    }

    fn encode_to<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        if self.current.is_some() {
            return Err(CardSheetError::Canvas(
                "Cannot encode while a page is open".to_string(),
            ));
        }
        log::debug!("Encoding {} pages", self.page_count());
        self.finalize_document();
        self.doc.compress();
        self.doc.save_to(sink)?;
        Ok(())
    }
}
