use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::aggregation::MonthlyPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const WIDTH: u32 = 700;
const HEIGHT: u32 = 300;
const INCOME_COLOR: RGBColor = RGBColor(34, 197, 94);
const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// Oldest month first.
    pub points: Vec<MonthlyPoint>,
}

pub enum Msg {
    Redraw,
}

/// Income and expense lines across the trailing months.
pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = Msg;
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Redraw => {
                self.draw(&ctx.props().points);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().points != old_props.points {
            self.draw(&ctx.props().points);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().points);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Xu hướng 6 tháng"}</h3>
                <div class="chart-legend">
                    <span class="legend-item income">{"Thu nhập"}</span>
                    <span class="legend-item expense">{"Chi tiêu"}</span>
                </div>
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="chart-canvas"
                    width={WIDTH.to_string()}
                    height={HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl TrendChart {
    fn draw(&self, points: &[MonthlyPoint]) {
        if points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(WIDTH);
        canvas.set_height(HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_value = points
            .iter()
            .flat_map(|p| [p.income, p.expense])
            .fold(0.0_f64, f64::max);
        let y_max = if max_value <= 0.0 { 1.0 } else { max_value * 1.1 };
        let x_max = (points.len() - 1).max(1) as f64;

        let labels: Vec<String> = points
            .iter()
            .map(|p| format!("{}/{}", p.month.month, p.month.year))
            .collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0_f64..x_max, 0.0_f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| shared::currency::group_digits(&format!("{:.0}", v)))
            .x_label_formatter(&|v| {
                let idx = v.round() as usize;
                labels.get(idx).cloned().unwrap_or_default()
            })
            .x_labels(points.len())
            .y_labels(6)
            .label_style(("sans-serif", 12, &RGBColor(100, 100, 100)))
            .axis_style(&RGBColor(220, 220, 220))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        for (color, values) in [
            (INCOME_COLOR, points.iter().map(|p| p.income).collect::<Vec<_>>()),
            (EXPENSE_COLOR, points.iter().map(|p| p.expense).collect::<Vec<_>>()),
        ] {
            let series = values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect::<Vec<_>>();
            if chart
                .draw_series(LineSeries::new(series.iter().copied(), color.stroke_width(3)))
                .is_err()
            {
                return;
            }
            for (x, y) in series {
                if chart
                    .draw_series(std::iter::once(Circle::new((x, y), 4, color.filled())))
                    .is_err()
                {
                    return;
                }
            }
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MonthKey;

    #[test]
    fn draw_tolerates_detached_canvas_and_empty_points() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[]);
        chart.draw(&[MonthlyPoint {
            month: MonthKey { year: 2024, month: 5 },
            income: 100.0,
            expense: 50.0,
        }]);
    }
}
