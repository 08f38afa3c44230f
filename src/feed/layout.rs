use crate::api::ImageRecord;

/// Number of masonry columns that fit in `viewport_width`.
pub fn column_count(viewport_width: f64, min_column_width: f64, max_columns: usize) -> usize {
    let max_columns = max_columns.max(1);
    if !viewport_width.is_finite() || min_column_width <= 0.0 {
        return max_columns;
    }
    let fitting = (viewport_width / min_column_width).floor() as usize;
    fitting.clamp(1, max_columns)
}

/// Places each record, in order, into the column that is currently shortest.
/// Heights are measured in column widths, so a record adds its aspect ratio.
/// Each placed record keeps its arrival position, which stays unique even
/// when the feed repeats an id.
pub fn distribute(images: &[ImageRecord], columns: usize) -> Vec<Vec<(usize, ImageRecord)>> {
    let columns = columns.max(1);
    let mut layout: Vec<Vec<(usize, ImageRecord)>> = vec![Vec::new(); columns];
    let mut heights = vec![0.0f64; columns];

    for (position, image) in images.iter().enumerate() {
        let mut target = 0;
        for (index, height) in heights.iter().enumerate() {
            if *height < heights[target] {
                target = index;
            }
        }
        heights[target] += image.aspect_ratio();
        layout[target].push((position, image.clone()));
    }

    layout
}
