//! 双轴效率折线图

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::bench::TrialRecord;

/// 吞吐（左轴）与平均时延（右轴）随注入强度变化的折线图
pub fn render_efficiency(
    records: &[TrialRecord],
    title: &str,
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    assert!(!records.is_empty(), "nothing to plot");

    let x_max = records.iter().map(|r| r.speed).max().unwrap_or(1) as i32;
    let finished_max = records.iter().map(|r| r.finished).max().unwrap_or(0).max(1) as f64;
    let delay_max = records
        .iter()
        .map(|r| r.avg_delay)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = SVGBackend::new(out, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0..x_max + 1, 0.0..finished_max * 1.1)?
        .set_secondary_coord(0..x_max + 1, 0.0..delay_max * 1.1);

    chart
        .configure_mesh()
        .x_desc("injected packets per node per step")
        .y_desc("finished packets")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("average delay (cycles)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            records.iter().map(|r| (r.speed as i32, r.finished as f64)),
            &BLUE,
        ))?
        .label("throughput")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_secondary_series(LineSeries::new(
            records.iter().map(|r| (r.speed as i32, r.avg_delay)),
            &RED,
        ))?
        .label("average delay")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
