//! Text fragment extraction.
//!
//! [`FragmentCollector`] plugs into the layout engine's output-device
//! interface and records one [`TextFragment`] per word the engine emits.
//! The engine walks pages in document order and words in reading order, so
//! the collected vector is already in the order gap detection expects.
//!
//! Coordinates are converted from PDF space (y grows upward from the page
//! origin) to top-down page space (y grows downward from the top edge),
//! which is the space all gap arithmetic happens in.

use pdf_extract::{Document, MediaBox, OutputDev, OutputError, Transform};

use crate::error::Result;

/// A positioned run of text on a page, in top-down page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFragment {
    /// Top coordinate of the fragment; 0 is the top edge of the page
    pub top_y: f32,
    /// Vertical extent of the fragment, strictly positive
    pub height: f32,
    /// 0-based page the fragment belongs to
    pub page_index: usize,
}

#[derive(Clone, Copy)]
struct PendingWord {
    top_y: f64,
    height: f64,
}

/// Accumulates [`TextFragment`]s from layout engine callbacks.
///
/// The engine invokes [`begin_word`](OutputDev::begin_word) before each shown
/// string and [`end_word`](OutputDev::end_word) after it; the glyphs in
/// between merge into a single fragment (minimum top, maximum height).
#[derive(Default)]
pub struct FragmentCollector {
    fragments: Vec<TextFragment>,
    page_index: usize,
    page_top: f64,
    pending: Option<PendingWord>,
}

impl FragmentCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the collector and returns the fragments in emission order.
    pub fn into_fragments(self) -> Vec<TextFragment> {
        self.fragments
    }

    fn flush_word(&mut self) {
        if let Some(word) = self.pending.take() {
            self.fragments.push(TextFragment {
                top_y: word.top_y as f32,
                height: word.height as f32,
                page_index: self.page_index,
            });
        }
    }
}

impl OutputDev for FragmentCollector {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> std::result::Result<(), OutputError> {
        // Engine page numbers are 1-based.
        self.page_index = (page_num as usize).saturating_sub(1);
        self.page_top = media_box.ury;
        Ok(())
    }

    fn end_page(&mut self) -> std::result::Result<(), OutputError> {
        self.flush_word();
        log::debug!(
            "page {}: {} fragments so far",
            self.page_index,
            self.fragments.len()
        );
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        _width: f64,
        _spacing: f64,
        font_size: f64,
        _char: &str,
    ) -> std::result::Result<(), OutputError> {
        let top_y = self.page_top - trm.m32;
        // Vertical scale of the text matrix; identity for untransformed text.
        let vertical_scale = (trm.m21 * trm.m21 + trm.m22 * trm.m22).sqrt();
        let height = font_size * vertical_scale;

        // Degenerate glyphs carry no layout information.
        if !top_y.is_finite() || !height.is_finite() || height <= 0.0 {
            return Ok(());
        }

        self.pending = Some(match self.pending {
            Some(word) => PendingWord {
                top_y: word.top_y.min(top_y),
                height: word.height.max(height),
            },
            None => PendingWord { top_y, height },
        });
        Ok(())
    }

    fn begin_word(&mut self) -> std::result::Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }

    fn end_word(&mut self) -> std::result::Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }

    fn end_line(&mut self) -> std::result::Result<(), OutputError> {
        Ok(())
    }
}

/// Runs the layout engine over `doc` and returns every text fragment in
/// reading order. An empty vector means the document carries no extractable
/// text (empty pages, pure images).
pub fn extract_fragments(doc: &Document) -> Result<Vec<TextFragment>> {
    let mut collector = FragmentCollector::new();
    pdf_extract::output_doc(doc, &mut collector)?;
    let fragments = collector.into_fragments();
    log::debug!("extracted {} text fragments", fragments.len());
    Ok(fragments)
}
