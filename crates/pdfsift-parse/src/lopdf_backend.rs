//! lopdf-based PDF parsing backend.
//!
//! Implements [`PdfBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. Page text comes from lopdf's content-stream text decoder, which
//! emits a line break at the end of each text object.

use crate::backend::PdfBackend;
use crate::error::BackendError;
use pdfsift_core::{DocumentMetadata, PdfError};

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
    /// lopdf page numbers (1-based) and page object ids, indexed by 0-based
    /// page position.
    pages: Vec<(u32, lopdf::ObjectId)>,
}

impl LopdfDocument {
    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.pages.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend. This is the default backend used by pdfsift.
///
/// # Example
///
/// ```ignore
/// use pdfsift_parse::{LopdfBackend, PdfBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let first = LopdfBackend::page_text(&doc, 0)?;
/// ```
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner =
            lopdf::Document::load_mem(bytes).map_err(|e| BackendError::Open(e.to_string()))?;

        if inner.is_encrypted() {
            return Err(BackendError::Core(PdfError::PasswordRequired));
        }

        // get_pages is a BTreeMap keyed by 1-based page number, so entries are in order.
        let pages: Vec<(u32, lopdf::ObjectId)> = inner.get_pages().into_iter().collect();
        tracing::debug!(pages = pages.len(), "opened PDF with lopdf");

        Ok(LopdfDocument { inner, pages })
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.pages.len()
    }

    fn page_text(doc: &Self::Document, index: usize) -> Result<String, Self::Error> {
        let (number, page_id) = *doc.pages.get(index).ok_or_else(|| BackendError::PageText {
            page: index,
            message: format!("page index out of range (0..{})", doc.pages.len()),
        })?;

        // extract_text silently yields nothing for unreadable content streams.
        check_page_contents(&doc.inner, page_id).map_err(|message| BackendError::PageText {
            page: index,
            message,
        })?;

        doc.inner
            .extract_text(&[number])
            .map_err(|e| BackendError::PageText {
                page: index,
                message: e.to_string(),
            })
    }

    fn document_metadata(doc: &Self::Document) -> Result<DocumentMetadata, Self::Error> {
        let Some(info) = info_dictionary(&doc.inner) else {
            return Ok(DocumentMetadata::default());
        };
        let inner = &doc.inner;

        Ok(DocumentMetadata {
            title: info_string(inner, info, b"Title"),
            author: info_string(inner, info, b"Author"),
            subject: info_string(inner, info, b"Subject"),
            keywords: info_string(inner, info, b"Keywords"),
            creator: info_string(inner, info, b"Creator"),
            producer: info_string(inner, info, b"Producer"),
            creation_date: info_string(inner, info, b"CreationDate"),
            mod_date: info_string(inner, info, b"ModDate"),
        })
    }
}

/// Follow a single level of indirect reference.
fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> Option<&'a lopdf::Object> {
    match obj {
        lopdf::Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// The trailer's /Info dictionary, if present and well-formed.
fn info_dictionary(doc: &lopdf::Document) -> Option<&lopdf::Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    resolve(doc, info)?.as_dict().ok()
}

/// Verify that every content stream of a page resolves and decodes.
fn check_page_contents(doc: &lopdf::Document, page_id: lopdf::ObjectId) -> Result<(), String> {
    for id in doc.get_page_contents(page_id) {
        let object = doc
            .get_object(id)
            .map_err(|e| format!("content stream {} {} R: {e}", id.0, id.1))?;
        let stream = object
            .as_stream()
            .map_err(|e| format!("content stream {} {} R: {e}", id.0, id.1))?;
        if stream.dict.has(b"Filter") {
            stream
                .decompressed_content()
                .map_err(|e| format!("content stream {} {} R: {e}", id.0, id.1))?;
        }
    }
    Ok(())
}

/// Read a text entry from the /Info dictionary.
fn info_string(doc: &lopdf::Document, dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match resolve(doc, dict.get(key).ok()?)? {
        obj @ lopdf::Object::String(..) => Some(decode_text_string(obj)),
        lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Decode a PDF text string object.
///
/// Strings with a byte order mark go through lopdf's decoder (UTF-16BE or
/// UTF-8). Unmarked strings are taken as UTF-8 when valid and as
/// PDFDocEncoding otherwise.
fn decode_text_string(obj: &lopdf::Object) -> String {
    let Ok(bytes) = obj.as_str() else {
        return String::new();
    };
    let has_bom = bytes.starts_with(&[0xFE, 0xFF]) || bytes.starts_with(&[0xEF, 0xBB, 0xBF]);
    if !has_bom {
        if let Ok(s) = std::str::from_utf8(bytes) {
            return s.to_string();
        }
    }
    lopdf::decode_text_string(obj).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "malformed text string, decoding lossily");
        String::from_utf8_lossy(bytes).into_owned()
    })
}

/// Build a PDF with one Helvetica text line per page and an optional /Info
/// dictionary.
#[cfg(test)]
fn create_test_pdf(texts: &[&str], info: Option<lopdf::Dictionary>) -> Vec<u8> {
    use lopdf::{Document, Object, ObjectId, Stream, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => texts.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    if let Some(info) = info {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, StringFormat, dictionary};

    #[test]
    fn open_rejects_garbage() {
        let err = LopdfBackend::open(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, BackendError::Open(_)));
        assert!(matches!(PdfError::from(err), PdfError::InputError(_)));
    }

    #[test]
    fn page_count_matches_document() {
        let bytes = create_test_pdf(&["one", "two", "three"], None);
        let doc = LopdfBackend::open(&bytes).unwrap();
        assert_eq!(LopdfBackend::page_count(&doc), 3);
    }

    #[test]
    fn page_text_per_page() {
        let bytes = create_test_pdf(&["Alpha experiment", "Beta results"], None);
        let doc = LopdfBackend::open(&bytes).unwrap();
        let first = LopdfBackend::page_text(&doc, 0).unwrap();
        let second = LopdfBackend::page_text(&doc, 1).unwrap();
        assert!(first.contains("Alpha experiment"));
        assert!(!first.contains("Beta"));
        assert!(second.contains("Beta results"));
    }

    #[test]
    fn page_text_out_of_range() {
        let bytes = create_test_pdf(&["only"], None);
        let doc = LopdfBackend::open(&bytes).unwrap();
        let err = LopdfBackend::page_text(&doc, 5).unwrap_err();
        assert!(matches!(err, BackendError::PageText { page: 5, .. }));
    }

    #[test]
    fn zero_page_document() {
        let bytes = create_test_pdf(&[], None);
        let doc = LopdfBackend::open(&bytes).unwrap();
        assert_eq!(LopdfBackend::page_count(&doc), 0);
    }

    #[test]
    fn metadata_absent() {
        let bytes = create_test_pdf(&["x"], None);
        let doc = LopdfBackend::open(&bytes).unwrap();
        assert!(LopdfBackend::document_metadata(&doc).unwrap().is_empty());
    }

    #[test]
    fn metadata_fields() {
        let info = dictionary! {
            "Title" => Object::String(b"Vaccine Research".to_vec(), StringFormat::Literal),
            "Author" => Object::String(b"Lab 4".to_vec(), StringFormat::Literal),
            "CreationDate" => Object::String(b"D:20240101120000Z".to_vec(), StringFormat::Literal),
        };
        let bytes = create_test_pdf(&["x"], Some(info));
        let doc = LopdfBackend::open(&bytes).unwrap();
        let meta = LopdfBackend::document_metadata(&doc).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Vaccine Research"));
        assert_eq!(meta.author.as_deref(), Some("Lab 4"));
        assert_eq!(meta.creation_date.as_deref(), Some("D:20240101120000Z"));
        assert_eq!(meta.producer, None);
    }

    fn literal(bytes: &[u8]) -> Object {
        Object::String(bytes.to_vec(), StringFormat::Literal)
    }

    /// Re-save `bytes` after pointing page `index` at `contents`.
    fn with_page_contents(bytes: &[u8], index: usize, contents: Object) -> Vec<u8> {
        let mut doc = lopdf::Document::load_mem(bytes).unwrap();
        let page_id = doc.get_pages()[&(index as u32 + 1)];
        doc.get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("Contents", contents);
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn page_text_dangling_contents_is_error() {
        let bytes = create_test_pdf(&["ok one", "ok two"], None);
        let bytes = with_page_contents(&bytes, 1, Object::Reference((9999, 0)));
        let doc = LopdfBackend::open(&bytes).unwrap();

        assert!(LopdfBackend::page_text(&doc, 0).unwrap().contains("ok one"));
        let err = LopdfBackend::page_text(&doc, 1).unwrap_err();
        assert!(matches!(err, BackendError::PageText { page: 1, .. }));
        assert!(matches!(PdfError::from(err), PdfError::ParseError(m) if m.starts_with("page 2:")));
    }

    #[test]
    fn page_text_corrupt_flate_stream_is_error() {
        let mut doc = lopdf::Document::load_mem(&create_test_pdf(&["ok one", "ok two"], None))
            .unwrap();
        let bad = doc.add_object(lopdf::Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            b"this is not zlib data".to_vec(),
        ));
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        let bytes = with_page_contents(&buf, 0, Object::Reference(bad));

        let doc = LopdfBackend::open(&bytes).unwrap();
        let err = LopdfBackend::page_text(&doc, 0).unwrap_err();
        assert!(matches!(err, BackendError::PageText { page: 0, .. }));
        assert!(LopdfBackend::page_text(&doc, 1).unwrap().contains("ok two"));
    }

    #[test]
    fn page_without_contents_is_blank() {
        let bytes = create_test_pdf(&["ok one"], None);
        let bytes = with_page_contents(&bytes, 0, Object::Array(vec![]));
        let doc = LopdfBackend::open(&bytes).unwrap();
        assert_eq!(LopdfBackend::page_text(&doc, 0).unwrap().trim(), "");
    }

    #[test]
    fn decode_utf16_with_bom() {
        assert_eq!(decode_text_string(&literal(&[0xFE, 0xFF, 0x00, 0x48, 0x00, 0xE9])), "Hé");
    }

    #[test]
    fn decode_pdfdoc_encoding() {
        assert_eq!(decode_text_string(&literal(&[0x43, 0xE9])), "Cé");
        assert_eq!(decode_text_string(&literal(&[0x8D, 0x41, 0x8E])), "\u{201C}A\u{201D}");
        assert_eq!(decode_text_string(&literal(&[0x80, 0x20, 0x84])), "\u{2022} \u{2014}");
    }

    #[test]
    fn decode_plain_utf8() {
        assert_eq!(decode_text_string(&literal(b"Polymer B")), "Polymer B");
        assert_eq!(decode_text_string(&literal("Lösung".as_bytes())), "Lösung");
    }
}
