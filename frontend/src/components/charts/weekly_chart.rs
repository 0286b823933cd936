use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::aggregation::WeeklySeries;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const WIDTH: u32 = 700;
const HEIGHT: u32 = 300;
const INCOME_COLOR: RGBColor = RGBColor(34, 197, 94);
const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);

const DAY_LABELS: [&str; 7] = ["T2", "T3", "T4", "T5", "T6", "T7", "CN"];

#[derive(Properties, PartialEq)]
pub struct WeeklyChartProps {
    pub series: WeeklySeries,
}

pub enum Msg {
    Redraw,
}

/// Grouped income/expense bars for the current week, Monday through Sunday.
pub struct WeeklyChart {
    canvas_ref: NodeRef,
}

impl Component for WeeklyChart {
    type Message = Msg;
    type Properties = WeeklyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Redraw => {
                self.draw(&ctx.props().series);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().series != old_props.series {
            self.draw(&ctx.props().series);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().series);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Thu chi tuần này"}</h3>
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

impl WeeklyChart {
    fn draw(&self, series: &WeeklySeries) {
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

        let max_value = series
            .income
            .iter()
            .chain(series.expense.iter())
            .fold(0.0_f64, |acc, &v| acc.max(v));
        // keep a visible axis when the week is empty
        let y_max = if max_value <= 0.0 { 1.0 } else { max_value * 1.1 };

        let mut chart = match ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0_f64..7.0, 0.0_f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| shared::currency::group_digits(&format!("{:.0}", v)))
            .x_label_formatter(&|v| {
                let idx = v.floor() as usize;
                DAY_LABELS.get(idx).copied().unwrap_or("").to_string()
            })
            .x_labels(7)
            .y_labels(6)
            .label_style(("sans-serif", 12, &RGBColor(100, 100, 100)))
            .axis_style(&RGBColor(220, 220, 220))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        // two bars per day, income on the left
        for day in 0..7 {
            let base = day as f64;
            let income = series.income[day];
            let expense = series.expense[day];

            if income > 0.0 {
                let bar = Rectangle::new(
                    [(base + 0.15, 0.0), (base + 0.45, income)],
                    INCOME_COLOR.filled(),
                );
                if chart.draw_series(std::iter::once(bar)).is_err() {
                    return;
                }
            }
            if expense > 0.0 {
                let bar = Rectangle::new(
                    [(base + 0.55, 0.0), (base + 0.85, expense)],
                    EXPENSE_COLOR.filled(),
                );
                if chart.draw_series(std::iter::once(bar)).is_err() {
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

    #[test]
    fn draw_tolerates_detached_canvas() {
        let chart = WeeklyChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&WeeklySeries::default());
    }

    #[test]
    fn day_labels_cover_monday_through_sunday() {
        assert_eq!(DAY_LABELS.len(), 7);
        assert_eq!(DAY_LABELS[0], "T2");
        assert_eq!(DAY_LABELS[6], "CN");
    }
}
