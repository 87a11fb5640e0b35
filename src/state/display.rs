use crate::source::{ImageFile, Raster};

const ENLARGE_FACTOR: f64 = 1.1;
const NARROW_FACTOR: f64 = 0.9;

/// The image-display state machine.
///
/// Holds the ordered file list, the current index, the decoded raster of the
/// current file, and the size at which that raster is rendered. The list is
/// fixed at construction; only the index, raster, and sizes change.
///
/// The viewport is the pixel region the image is fitted into. It starts at
/// zero and is updated from window events; every sizing rule that depends on
/// it is deferred while either dimension is zero.
#[derive(Debug)]
pub struct DisplayState {
    files: Vec<ImageFile>,
    current: usize,
    raster: Option<Raster>,
    displayed: Option<(u32, u32)>,
    viewport: (u32, u32),
}

impl DisplayState {
    pub fn new(files: Vec<ImageFile>) -> Self {
        Self {
            files,
            current: 0,
            raster: None,
            displayed: None,
            viewport: (0, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Index of the current file, `None` while the list is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.files.is_empty()).then_some(self.current)
    }

    pub fn current_file(&self) -> Option<&ImageFile> {
        self.files.get(self.current)
    }

    pub fn raster(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }

    /// Size the raster is rendered at, `None` before the first fit.
    pub fn displayed_size(&self) -> Option<(u32, u32)> {
        self.displayed
    }

    /// Step to the next file, wrapping at the end of the list.
    ///
    /// Returns the new current file so the caller can decode it; no-op on an
    /// empty list.
    pub fn next(&mut self) -> Option<&ImageFile> {
        if self.files.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.files.len();
        self.files.get(self.current)
    }

    /// Step to the previous file, wrapping at the start of the list.
    pub fn previous(&mut self) -> Option<&ImageFile> {
        if self.files.is_empty() {
            return None;
        }
        self.current = (self.current + self.files.len() - 1) % self.files.len();
        self.files.get(self.current)
    }

    /// Install a freshly decoded raster and re-fit it to the viewport.
    ///
    /// The fit is deferred while the viewport has no known size.
    pub fn show(&mut self, raster: Raster) {
        self.raster = Some(raster);
        self.fit();
    }

    /// Record the viewport size and re-fit the current image to it.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.fit();
    }

    /// Fit the current image inside the viewport, preserving aspect ratio.
    ///
    /// When the image's proportions match the viewport exactly it fills it;
    /// otherwise the constrained dimension (height for relatively tall
    /// images, width for relatively wide ones) is pinned to the viewport and
    /// the other follows from the aspect ratio. No effect until both a
    /// raster and a nonzero viewport exist.
    pub fn fit(&mut self) {
        let Some(raster) = &self.raster else {
            return;
        };
        let (vw, vh) = self.viewport;
        if vw == 0 || vh == 0 {
            return;
        }

        let (w, h) = (raster.width, raster.height);
        let aspect = f64::from(w) / f64::from(h);
        let exact = u64::from(w) * u64::from(vh) == u64::from(h) * u64::from(vw);
        let taller = u64::from(h) * u64::from(vw) > u64::from(w) * u64::from(vh);

        // the derived dimension can round to zero for extreme aspect ratios
        self.displayed = Some(if exact {
            (vw, vh)
        } else if taller {
            (((f64::from(vh) * aspect).round() as u32).max(1), vh)
        } else {
            (vw, ((f64::from(vw) / aspect).round() as u32).max(1))
        });
    }

    /// Grow the displayed size by 10%, compounding on the current size.
    pub fn enlarge(&mut self) {
        self.rescale(ENLARGE_FACTOR);
    }

    /// Shrink the displayed size by 10%, compounding on the current size.
    pub fn narrow(&mut self) {
        self.rescale(NARROW_FACTOR);
    }

    // Truncating conversion, floored at one pixel per dimension. No-op until
    // the first fit has produced a displayed size.
    fn rescale(&mut self, factor: f64) {
        if let Some((w, h)) = self.displayed {
            let w = ((f64::from(w) * factor) as u32).max(1);
            let h = ((f64::from(h) * factor) as u32).max(1);
            self.displayed = Some((w, h));
        }
    }
}
