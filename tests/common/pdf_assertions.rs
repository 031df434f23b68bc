use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract font names referenced by the pages.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::HashSet::new();

    let pages = doc.get_pages();
    for (_page_num, page_id) in pages.iter() {
        let Ok(page_obj) = doc.get_object(*page_id) else {
            continue;
        };
        let Ok(page_dict) = page_obj.as_dict() else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources") else {
            continue;
        };
        let resources_dict = if let Ok(ref_id) = resources.as_reference() {
            doc.get_object(ref_id).ok().and_then(|obj| obj.as_dict().ok())
        } else {
            resources.as_dict().ok()
        };
        let Some(resources) = resources_dict else {
            continue;
        };
        let Ok(font_dict) = resources.get(b"Font") else {
            continue;
        };
        let fonts_dict = if let Ok(ref_id) = font_dict.as_reference() {
            doc.get_object(ref_id).ok().and_then(|obj| obj.as_dict().ok())
        } else {
            font_dict.as_dict().ok()
        };
        let Some(fonts_dict) = fonts_dict else {
            continue;
        };
        for (_font_name, font_val) in fonts_dict.iter() {
            let font_dict_opt = if let Ok(font_dict) = font_val.as_dict() {
                Some(font_dict)
            } else if let Ok(font_obj_id) = font_val.as_reference() {
                doc.get_object(font_obj_id).ok().and_then(|obj| obj.as_dict().ok())
            } else {
                None
            };
            if let Some(font_dict) = font_dict_opt {
                if let Ok(base_font) = font_dict.get(b"BaseFont") {
                    if let Ok(font_name) = base_font.as_name() {
                        fonts.insert(String::from_utf8_lossy(font_name).to_string());
                    }
                }
            }
        }
    }

    fonts.into_iter().collect()
}

/// Get page dimensions (width, height) in points.
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_obj = doc.get_object(*page_id).ok()?;
    let page_dict = page_obj.as_dict().ok()?;
    let media_box = page_dict.get(b"MediaBox").ok()?;
    let arr = media_box.as_array().ok()?;
    if arr.len() >= 4 {
        let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
        let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
        return Some((width, height));
    }
    None
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text.
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text.
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF.
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern.
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance.
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
