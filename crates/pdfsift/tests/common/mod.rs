//! Shared PDF builders for integration tests.
//!
//! Documents are created programmatically with lopdf: one Helvetica text
//! line per page, optionally with an /Info dictionary.

#![allow(dead_code)]

use lopdf::{Dictionary, Object, Stream, StringFormat, dictionary};

/// Build a PDF whose page `i` shows the single line `texts[i]`.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    build(texts, None)
}

/// Build a PDF with the given pages and /Info title and author.
pub fn pdf_with_info(texts: &[&str], title: &str, author: &str) -> Vec<u8> {
    let info = dictionary! {
        "Title" => Object::String(title.as_bytes().to_vec(), StringFormat::Literal),
        "Author" => Object::String(author.as_bytes().to_vec(), StringFormat::Literal),
    };
    build(texts, Some(info))
}

/// Build a PDF like [`pdf_with_pages`] whose page `broken` points its
/// /Contents at an object that does not exist.
pub fn pdf_with_dangling_contents(texts: &[&str], broken: usize) -> Vec<u8> {
    let mut doc = lopdf::Document::load_mem(&build(texts, None)).unwrap();
    let page_id = doc.get_pages()[&(broken as u32 + 1)];
    if let Ok(page_obj) = doc.get_object_mut(page_id) {
        if let Ok(dict) = page_obj.as_dict_mut() {
            dict.set("Contents", Object::Reference((9999, 0)));
        }
    }
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn build(texts: &[&str], info: Option<Dictionary>) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in texts {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(texts.len() as i64),
    });
    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    if let Some(info) = info {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", Object::Reference(info_id));
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
