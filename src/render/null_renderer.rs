use crate::error::ChartResult;
use crate::render::{FeatureChartView, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates view content so structural problems surface before a
/// real engine is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_bar_count: usize,
    pub last_image_count: usize,
    pub last_busy: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, view: &FeatureChartView) -> ChartResult<()> {
        view.validate()?;
        self.render_count += 1;
        self.last_bar_count = view.chart.category_count();
        self.last_image_count = view.chart.layout.images.len();
        self.last_busy = view.is_busy();
        Ok(())
    }
}
