//! 热点热力图

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::runner::HotMatrix;

/// 热点矩阵：每个节点一个色块，颜色深浅按计数对最大值归一化
pub fn render_hotspot(hot: &HotMatrix, title: &str, out: &Path) -> Result<(), Box<dyn Error>> {
    let n = hot.n() as i32;
    let max = hot.max().max(1) as f64;

    let root = SVGBackend::new(out, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0..n, 0..n)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()?;

    chart.draw_series(
        (0..n)
            .flat_map(|x| (0..n).map(move |y| (x, y)))
            .map(|(x, y)| {
                let v = hot.get(x as usize, y as usize) as f64 / max;
                Rectangle::new([(x, y), (x + 1, y + 1)], RED.mix(v).filled())
            }),
    )?;

    root.present()?;
    Ok(())
}
