//! Assembly of the finished content stream into one PDF buffer.
//!
//! The document uses the standard Type1 faces with WinAnsi encoding, so no
//! font programs are embedded; viewers supply them. Output is buffered in
//! memory since the document is a fixed small single page.

use crate::error::RenderError;
use crate::page::{PAGE_HEIGHT, PAGE_WIDTH};
use lopdf::content::Content;
use lopdf::{dictionary, Document, Object, Stream};
use remito_fonts::{HELVETICA, HELVETICA_BOLD};
use std::io::Cursor;

/// Builds a complete single-page PDF around the page content and returns
/// the document bytes.
pub fn assemble(content: Content) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_dict = dictionary! {
        "F1" => Object::Dictionary(dictionary! {
            "Type" => "Font", "Subtype" => "Type1",
            "BaseFont" => HELVETICA, "Encoding" => "WinAnsiEncoding",
        }),
        "F2" => Object::Dictionary(dictionary! {
            "Type" => "Font", "Subtype" => "Type1",
            "BaseFont" => HELVETICA_BOLD, "Encoding" => "WinAnsiEncoding",
        }),
    };
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(font_dict),
    });

    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut cursor = Cursor::new(Vec::new());
    doc.save_to(&mut cursor)?;
    Ok(cursor.into_inner())
}
